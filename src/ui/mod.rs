//! UI module - frame ops, pane renderers and the egui painter

pub mod components;
pub mod ops;
pub mod paint;
