//! Per-frame draw operation buffer

use crate::layout::Rect;
use crate::types::PlayerButton;
use egui::Color32;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: Rect,
        color: Color32,
    },
    /// Text centered inside `rect`
    Label {
        rect: Rect,
        text: String,
        size: f32,
        color: Color32,
    },
    Button {
        rect: Rect,
        button: PlayerButton,
    },
    Progress {
        rect: Rect,
        value: f32,
        fill: Color32,
        track: Color32,
    },
}

/// Ops for one frame, in paint order. Built fresh every frame and dropped after painting.
#[derive(Debug, Default)]
pub struct LayoutFrame {
    ops: Vec<DrawOp>,
}

impl LayoutFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Buttons in the order they were laid out
    pub fn buttons(&self) -> impl Iterator<Item = (PlayerButton, Rect)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Button { rect, button } => Some((*button, *rect)),
            _ => None,
        })
    }
}
