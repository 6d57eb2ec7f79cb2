//! Pure layout pass: constraints in, rectangles out. Nothing here touches egui state.

pub mod flex;
pub mod geom;

pub use flex::{Child, Flex, Spacing};
pub use geom::{Dimensions, Insets, Rect};
