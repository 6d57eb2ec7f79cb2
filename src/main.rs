#![windows_subsystem = "windows"]
//! Player Panes - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod error;
mod layout;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, Control, WindowEvent, WindowSession};
use constants::*;
use error::AppError;
use eframe::egui;
use layout::Rect;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use ui::paint::paint_frame;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> ExitCode {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Player Panes starting");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(WINDOW_MIN_SIZE)
        .with_title(APP_NAME);

    match utils::rasterize_icon(64) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Failed to rasterize window icon"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut session = WindowSession::open();
    let session_ref = &mut session;
    let outcome = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, session_ref)))),
    );

    debug!(frames = session.frames(), "Event loop returned");
    exit_code(session.destroy(outcome))
}

/// Map the session outcome to the process exit status, logging fatal errors
fn exit_code(result: Result<(), AppError>) -> ExitCode {
    match result {
        Ok(()) => {
            info!("Player Panes exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App<'_> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !matches!(self.session.handle(WindowEvent::FrameReady), Control::Render) {
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let bounds = Rect::from_egui(ui.max_rect());
                let (frame, _) = app::build_frame(bounds, &self.theme, &self.panes, &self.state);
                paint_frame(ui, &frame, &self.theme, &mut self.state);
            });

        self.dispatch_commands();
    }
}
