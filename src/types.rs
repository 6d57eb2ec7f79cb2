//! Common types and data structures

use crate::constants::PROGRESS_PLACEHOLDER;

/// Transport buttons in the player panel, in left-to-right order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerButton {
    Image,
    SkipBackward,
    Play,
    Pause,
    SkipForward,
}

impl PlayerButton {
    pub const ALL: [PlayerButton; 5] = [
        PlayerButton::Image,
        PlayerButton::SkipBackward,
        PlayerButton::Play,
        PlayerButton::Pause,
        PlayerButton::SkipForward,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PlayerButton::Image => egui_phosphor::regular::IMAGE,
            PlayerButton::SkipBackward => egui_phosphor::regular::SKIP_BACK,
            PlayerButton::Play => egui_phosphor::regular::PLAY,
            PlayerButton::Pause => egui_phosphor::regular::PAUSE,
            PlayerButton::SkipForward => egui_phosphor::regular::SKIP_FORWARD,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerButton::Image => "image",
            PlayerButton::SkipBackward => "skip_backward",
            PlayerButton::Play => "play",
            PlayerButton::Pause => "pause",
            PlayerButton::SkipForward => "skip_forward",
        }
    }

    pub fn command(self) -> PlayerCommand {
        match self {
            PlayerButton::Image => PlayerCommand::PickImage,
            PlayerButton::SkipBackward => PlayerCommand::SkipBackward,
            PlayerButton::Play => PlayerCommand::Play,
            PlayerButton::Pause => PlayerCommand::Pause,
            PlayerButton::SkipForward => PlayerCommand::SkipForward,
        }
    }
}

/// What a transport button asks the player to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    PickImage,
    SkipBackward,
    Play,
    Pause,
    SkipForward,
}

/// Per-button click tracking
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    activated: bool,
    presses: u64,
}

impl ButtonState {
    /// Record a click for the current frame
    pub fn activate(&mut self) {
        self.activated = true;
        self.presses += 1;
    }

    /// True if the button was clicked during the current frame
    pub fn activated(&self) -> bool {
        self.activated
    }

    pub fn presses(&self) -> u64 {
        self.presses
    }

    pub fn clear(&mut self) {
        self.activated = false;
    }
}

/// Playback position in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress(f32);

impl Progress {
    /// Clamps into [0, 1]; NaN becomes 0
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(PROGRESS_PLACEHOLDER)
    }
}

/// All mutable widget state for one window
#[derive(Clone, Debug, Default)]
pub struct UiState {
    buttons: [ButtonState; 5],
    progress: Progress,
}

impl UiState {
    pub fn button(&self, button: PlayerButton) -> &ButtonState {
        &self.buttons[button.index()]
    }

    pub fn activate(&mut self, button: PlayerButton) {
        self.buttons[button.index()].activate();
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Clear activations and return the commands for the buttons that were clicked, in button order
    pub fn drain_commands(&mut self) -> Vec<PlayerCommand> {
        PlayerButton::ALL
            .iter()
            .filter_map(|&b| {
                let state = &mut self.buttons[b.index()];
                let fired = state.activated();
                state.clear();
                fired.then(|| b.command())
            })
            .collect()
    }
}
