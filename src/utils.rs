//! Utility functions

use std::path::PathBuf;

use crate::constants::APP_NAME;

// Square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="12" fill="#6464c8"/><path d="M24 18 L48 32 L24 46 Z" fill="#fff"/><rect x="14" y="52" width="36" height="4" rx="2" fill="#fff"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image. None if the SVG fails to parse.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let unmul = |c: u8| ((c as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8;
                [unmul(p.red()), unmul(p.green()), unmul(p.blue()), a]
            }
        })
        .collect()
}

/// Get the directory for app data (logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
