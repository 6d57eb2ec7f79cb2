//! App module - contains the main application state and per-frame pipeline

mod commands;
mod session;

pub use commands::{CommandSink, LogCommands};
pub use session::{Control, WindowEvent, WindowSession};

use crate::constants::PANE_WEIGHTS;
use crate::layout::{Child, Dimensions, Flex, Rect};
use crate::theme::{self, Theme};
use crate::types::UiState;
use crate::ui::components::{render_box, render_player_panel};
use crate::ui::ops::LayoutFrame;
use eframe::egui;

// ============================================================================
// PANES
// ============================================================================

/// Content of one vertical region
#[derive(Clone, Debug, PartialEq)]
pub enum Pane {
    Block {
        label: String,
        background: egui::Color32,
    },
    Player,
}

/// Box 1, Box 2 and the player panel, top to bottom
pub fn default_panes() -> Vec<(f32, Pane)> {
    let [top, middle, player] = PANE_WEIGHTS;
    vec![
        (
            top,
            Pane::Block {
                label: "Box 1".into(),
                background: theme::PANE_TOP,
            },
        ),
        (
            middle,
            Pane::Block {
                label: "Box 2".into(),
                background: theme::PANE_MIDDLE,
            },
        ),
        (player, Pane::Player),
    ]
}

/// Lay out every pane inside `bounds` and collect the ops. No egui state is touched.
pub fn build_frame(
    bounds: Rect,
    theme: &Theme,
    panes: &[(f32, Pane)],
    state: &UiState,
) -> (LayoutFrame, Vec<Dimensions>) {
    let mut frame = LayoutFrame::new();
    let children: Vec<Child> = panes.iter().map(|(w, _)| Child::Flexed(*w)).collect();
    let regions = Flex::vertical().layout(bounds, &children);

    let used = panes
        .iter()
        .zip(regions)
        .map(|((_, pane), region)| match pane {
            Pane::Block { label, background } => {
                render_box(region, theme, label, *background, &mut frame)
            }
            Pane::Player => render_player_panel(region, theme, state, &mut frame),
        })
        .collect();

    (frame, used)
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App<'a> {
    pub(crate) session: &'a mut WindowSession,
    pub(crate) theme: Theme,
    pub(crate) panes: Vec<(f32, Pane)>,
    pub(crate) state: UiState,
    pub(crate) commands: Box<dyn CommandSink + 'a>,
}

impl<'a> App<'a> {
    pub fn new(cc: &eframe::CreationContext<'_>, session: &'a mut WindowSession) -> Self {
        theme::install_fonts(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            session,
            theme: Theme::new(),
            panes: default_panes(),
            state: UiState::default(),
            commands: Box::new(LogCommands),
        }
    }

    /// Hand clicks from the frame just painted to the command sink
    pub(crate) fn dispatch_commands(&mut self) {
        for command in self.state.drain_commands() {
            self.commands.dispatch(command);
        }
    }
}
