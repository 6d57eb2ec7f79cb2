//! Window lifecycle: Running until the platform destroys the window

use crate::error::AppError;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Destroyed,
}

pub enum WindowEvent {
    FrameReady,
    /// Carries the platform's termination error, if any
    Destroy(Option<eframe::Error>),
}

#[derive(Debug)]
pub enum Control {
    /// Build and submit the next frame
    Render,
    /// Event arrived after teardown
    Ignore,
    /// Window is gone; the process should exit with this outcome
    Exit(Result<(), AppError>),
}

#[derive(Debug)]
pub struct WindowSession {
    state: SessionState,
    frames: u64,
}

impl WindowSession {
    pub fn open() -> Self {
        info!("Window session opened");
        Self {
            state: SessionState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle(&mut self, event: WindowEvent) -> Control {
        if self.state == SessionState::Destroyed {
            warn!("Window event after destroy, ignoring");
            return Control::Ignore;
        }

        match event {
            WindowEvent::FrameReady => {
                self.frames += 1;
                Control::Render
            }
            WindowEvent::Destroy(err) => {
                self.state = SessionState::Destroyed;
                debug!(frames = self.frames, "Window session destroyed");
                match err {
                    Some(e) => Control::Exit(Err(AppError::from(e))),
                    None => Control::Exit(Ok(())),
                }
            }
        }
    }

    /// Close out the session with the result of the platform's event loop
    pub fn destroy(&mut self, outcome: eframe::Result<()>) -> Result<(), AppError> {
        match self.handle(WindowEvent::Destroy(outcome.err())) {
            Control::Exit(result) => result,
            Control::Render | Control::Ignore => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_error(msg: &str) -> eframe::Error {
        eframe::Error::AppCreation(msg.to_owned().into())
    }

    #[test]
    fn frames_render_while_running() {
        let mut session = WindowSession::open();
        for _ in 0..3 {
            assert!(matches!(session.handle(WindowEvent::FrameReady), Control::Render));
        }
        assert_eq!(session.frames(), 3);
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn clean_destroy_exits_ok() {
        let mut session = WindowSession::open();
        assert!(session.destroy(Ok(())).is_ok());
        assert_eq!(session.state(), SessionState::Destroyed);
    }

    #[test]
    fn destroy_with_error_surfaces_it() {
        let mut session = WindowSession::open();
        let err = session
            .destroy(Err(platform_error("surface lost")))
            .unwrap_err();

        let AppError::PlatformTermination(inner) = &err;
        assert!(matches!(inner, eframe::Error::AppCreation(_)));
        assert!(err.to_string().contains("surface lost"));
    }

    #[test]
    fn events_after_destroy_are_ignored() {
        let mut session = WindowSession::open();
        session.handle(WindowEvent::Destroy(None));

        assert!(matches!(session.handle(WindowEvent::FrameReady), Control::Ignore));
        assert!(session.destroy(Err(platform_error("late"))).is_ok());
        assert_eq!(session.frames(), 0);
    }
}
