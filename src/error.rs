//! Process-level error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The platform tore the window down with an error
    #[error("window terminated: {0}")]
    PlatformTermination(#[from] eframe::Error),
}
