//! Application constants and configuration

pub const APP_NAME: &str = "Player Panes";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,player_panes=debug";
pub const LOG_FILE_NAME: &str = "player-panes.log";

pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 240.0];

/// Vertical share of each pane, top to bottom. Sums to 1.0.
pub const PANE_WEIGHTS: [f32; 3] = [0.1, 0.7, 0.2];

/// Progress shown until something drives playback
pub const PROGRESS_PLACEHOLDER: f32 = 0.5;
