//! Submit a LayoutFrame to egui

use super::ops::{DrawOp, LayoutFrame};
use crate::theme::{self, Theme};
use crate::types::UiState;
use eframe::egui;
use tracing::trace;

/// Paint every op in order. Button clicks are recorded on `state` for this frame.
pub fn paint_frame(ui: &mut egui::Ui, frame: &LayoutFrame, theme: &Theme, state: &mut UiState) {
    let painter = ui.painter().clone();

    for op in frame.ops() {
        match op {
            DrawOp::Fill { rect, color } => {
                painter.rect_filled(rect.to_egui(), 0.0, *color);
            }
            DrawOp::Label {
                rect,
                text,
                size,
                color,
            } => {
                painter.text(
                    rect.to_egui().center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(*size),
                    *color,
                );
            }
            DrawOp::Button { rect, button } => {
                let rect = rect.to_egui();
                let response = ui
                    .push_id(button.name(), |ui| ui.put(rect, theme.button(button.glyph(), rect.size())))
                    .inner;
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if response.clicked() {
                    trace!(button = button.name(), "Button clicked");
                    state.activate(*button);
                }
            }
            DrawOp::Progress {
                rect,
                value,
                fill,
                track,
            } => {
                let rect = rect.to_egui();
                painter.rect_filled(rect, theme::RADIUS_SMALL, *track);
                let filled = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * value.clamp(0.0, 1.0), rect.height()),
                );
                painter.rect_filled(filled, theme::RADIUS_SMALL, *fill);
            }
        }
    }
}
