//! Pane renderers
//!
//! Each renderer takes its allotted bounds as hard constraints, pushes ops
//! into the frame and returns the space it consumed.

use super::ops::{DrawOp, LayoutFrame};
use crate::layout::{Child, Dimensions, Flex, Insets, Rect, Spacing};
use crate::theme::Theme;
use crate::types::{PlayerButton, UiState};
use egui::Color32;

/// Solid block with a centered heading
pub fn render_box(
    bounds: Rect,
    theme: &Theme,
    text: &str,
    background: Color32,
    frame: &mut LayoutFrame,
) -> Dimensions {
    if bounds.is_empty() {
        return Dimensions::ZERO;
    }

    frame.push(DrawOp::Fill {
        rect: bounds,
        color: background,
    });
    frame.push(DrawOp::Label {
        rect: bounds,
        text: text.to_owned(),
        size: theme.heading_size,
        color: theme.label_color,
    });
    bounds.size()
}

/// Transport buttons on top, progress bar underneath
pub fn render_player_panel(
    bounds: Rect,
    theme: &Theme,
    state: &UiState,
    frame: &mut LayoutFrame,
) -> Dimensions {
    if bounds.is_empty() {
        return Dimensions::ZERO;
    }

    frame.push(DrawOp::Fill {
        rect: bounds,
        color: theme.panel_background,
    });

    let (_, button_h) = theme.button_size;
    let progress_h = theme.progress_height + 2 * theme.progress_inset;
    let rows = Flex::vertical().layout(bounds, &[Child::Rigid(button_h), Child::Rigid(progress_h)]);

    layout_button_row(rows[0], theme, frame);

    let bar = rows[1].inset(Insets::uniform(theme.progress_inset));
    if !bar.is_empty() {
        frame.push(DrawOp::Progress {
            rect: bar,
            value: state.progress().value(),
            fill: theme.progress_fill,
            track: theme.progress_track,
        });
    }

    bounds.size()
}

/// Five buttons, evenly spaced and centered. Narrow rows shrink every button equally.
fn layout_button_row(row: Rect, theme: &Theme, frame: &mut LayoutFrame) {
    let (button_w, _) = theme.button_size;
    let count = PlayerButton::ALL.len() as u32;

    let rects = if row.w >= button_w * count {
        let span = (count * (button_w + theme.button_gap)).min(row.w);
        let span = row.centered(span, row.h);
        let children = [Child::Rigid(button_w); 5];
        Flex::horizontal(Spacing::Around).layout(span, &children)
    } else {
        let children = [Child::Flexed(1.0); 5];
        Flex::horizontal(Spacing::Start).layout(row, &children)
    };

    for (button, rect) in PlayerButton::ALL.into_iter().zip(rects) {
        frame.push(DrawOp::Button { rect, button });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::PANE_TOP;
    use pretty_assertions::assert_eq;

    #[test]
    fn box_fills_bounds_and_centers_label() {
        let theme = Theme::new();
        let mut frame = LayoutFrame::new();
        let bounds = Rect::new(0, 0, 300, 80);

        let used = render_box(bounds, &theme, "Box 1", PANE_TOP, &mut frame);

        assert_eq!(used, Dimensions::new(300, 80));
        assert_eq!(
            frame.ops(),
            &[
                DrawOp::Fill {
                    rect: bounds,
                    color: PANE_TOP
                },
                DrawOp::Label {
                    rect: bounds,
                    text: "Box 1".into(),
                    size: theme.heading_size,
                    color: Color32::BLACK,
                },
            ]
        );
    }

    #[test]
    fn zero_area_box_draws_nothing() {
        let theme = Theme::new();
        for bounds in [Rect::new(0, 0, 0, 50), Rect::new(4, 4, 50, 0)] {
            let mut frame = LayoutFrame::new();
            let used = render_box(bounds, &theme, "Box 2", PANE_TOP, &mut frame);
            assert_eq!(used, Dimensions::ZERO);
            assert!(frame.is_empty());
        }
    }

    #[test]
    fn panel_has_five_buttons_in_fixed_order() {
        let theme = Theme::new();
        for width in [1, 3, 7, 100, 239, 240, 241, 500, 4000] {
            let mut frame = LayoutFrame::new();
            render_player_panel(Rect::new(0, 0, width, 120), &theme, &UiState::default(), &mut frame);

            let buttons: Vec<_> = frame.buttons().map(|(b, _)| b).collect();
            assert_eq!(buttons, PlayerButton::ALL.to_vec(), "width {width}");

            let rects: Vec<Rect> = frame.buttons().map(|(_, r)| r).collect();
            for pair in rects.windows(2) {
                assert!(pair[0].right() <= pair[1].x, "width {width}");
            }
            assert!(rects.last().map_or(true, |r| r.right() <= width));
        }
    }

    #[test]
    fn wide_row_is_centered_with_even_gaps() {
        let theme = Theme::new();
        let mut frame = LayoutFrame::new();
        render_player_panel(Rect::new(0, 0, 1000, 120), &theme, &UiState::default(), &mut frame);

        let rects: Vec<Rect> = frame.buttons().map(|(_, r)| r).collect();
        let (bw, bh) = theme.button_size;
        assert!(rects.iter().all(|r| r.w == bw && r.h == bh && r.y == 0));
        for pair in rects.windows(2) {
            assert_eq!(pair[1].x - pair[0].right(), theme.button_gap);
        }
        let left = rects[0].x;
        let right = 1000 - rects[4].right();
        assert_eq!(left, right);
    }

    #[test]
    fn narrow_row_shrinks_buttons_to_fit() {
        let theme = Theme::new();
        let mut frame = LayoutFrame::new();
        render_player_panel(Rect::new(0, 0, 102, 120), &theme, &UiState::default(), &mut frame);

        let widths: Vec<u32> = frame.buttons().map(|(_, r)| r.w).collect();
        assert_eq!(widths, vec![21, 21, 20, 20, 20]);
    }

    #[test]
    fn progress_bar_sits_below_buttons_inset_by_ten() {
        let theme = Theme::new();
        let mut frame = LayoutFrame::new();
        render_player_panel(Rect::new(0, 800, 640, 200), &theme, &UiState::default(), &mut frame);

        let bar = frame.ops().iter().find_map(|op| match op {
            DrawOp::Progress { rect, value, .. } => Some((*rect, *value)),
            _ => None,
        });
        let (_, bh) = theme.button_size;
        assert_eq!(
            bar,
            Some((Rect::new(10, 800 + bh + 10, 620, theme.progress_height), 0.5))
        );
    }

    #[test]
    fn short_panel_clips_rows() {
        let theme = Theme::new();
        let mut frame = LayoutFrame::new();
        let used = render_player_panel(Rect::new(0, 0, 640, 25), &theme, &UiState::default(), &mut frame);

        assert_eq!(used, Dimensions::new(640, 25));
        assert!(frame.buttons().all(|(_, r)| r.h == 25));
        assert!(!frame.ops().iter().any(|op| matches!(op, DrawOp::Progress { .. })));
    }

    #[test]
    fn zero_area_panel_draws_nothing() {
        let mut frame = LayoutFrame::new();
        let used = render_player_panel(Rect::new(0, 0, 640, 0), &Theme::new(), &UiState::default(), &mut frame);
        assert_eq!(used, Dimensions::ZERO);
        assert!(frame.is_empty());
    }
}
