//! Centralized theme constants for Player Panes
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Panes
// =============================================================================
pub const PANE_TOP: Color32 = Color32::from_rgb(200, 100, 100);
pub const PANE_MIDDLE: Color32 = Color32::from_rgb(100, 200, 100);
pub const PANE_PLAYER: Color32 = Color32::from_rgb(100, 100, 200);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_LABEL: Color32 = Color32::BLACK;
pub const TEXT_BUTTON: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x51, 0xb5); // indigo-500
pub const BTN_DEFAULT_HOVER: Color32 = Color32::from_rgb(0x5c, 0x6b, 0xc0); // indigo-400

// =============================================================================
// COLORS - Progress
// =============================================================================
pub const PROGRESS_FILL: Color32 = Color32::WHITE;
pub const PROGRESS_TRACK: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 100);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 24.0;
pub const FONT_BUTTON: f32 = 20.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const BUTTON_SIZE: (u32, u32) = (48, 40);
pub const BUTTON_GAP: u32 = 8;
pub const PROGRESS_HEIGHT: u32 = 4;
pub const PROGRESS_INSET: u32 = 10;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_SMALL: f32 = 2.0;

/// Resolved style handed to every renderer. Built once, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub heading_size: f32,
    pub label_color: Color32,
    pub panel_background: Color32,
    pub button_glyph_size: f32,
    pub button_text: Color32,
    pub button_fill: Color32,
    pub button_size: (u32, u32),
    pub button_gap: u32,
    pub progress_fill: Color32,
    pub progress_track: Color32,
    pub progress_height: u32,
    pub progress_inset: u32,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            heading_size: FONT_HEADING,
            label_color: TEXT_LABEL,
            panel_background: PANE_PLAYER,
            button_glyph_size: FONT_BUTTON,
            button_text: TEXT_BUTTON,
            button_fill: BTN_DEFAULT,
            button_size: BUTTON_SIZE,
            button_gap: BUTTON_GAP,
            progress_fill: PROGRESS_FILL,
            progress_track: PROGRESS_TRACK,
            progress_height: PROGRESS_HEIGHT,
            progress_inset: PROGRESS_INSET,
        }
    }

    /// Transport button with the theme fill, forced to `size`
    pub fn button(&self, glyph: &str, size: egui::Vec2) -> egui::Button<'static> {
        egui::Button::new(
            egui::RichText::new(glyph.to_owned())
                .size(self.button_glyph_size)
                .color(self.button_text),
        )
        .fill(self.button_fill)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(size)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPER - Fonts
// =============================================================================

/// Register Phosphor glyphs as a Proportional fallback so button icons render
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: Color32::TRANSPARENT,
        widgets: egui::style::Widgets {
            inactive: egui::style::WidgetVisuals {
                bg_fill: BTN_DEFAULT,
                weak_bg_fill: BTN_DEFAULT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.0, TEXT_BUTTON),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BTN_DEFAULT_HOVER,
                weak_bg_fill: BTN_DEFAULT_HOVER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.5, TEXT_BUTTON),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: lighten(BTN_DEFAULT, 0.06),
                weak_bg_fill: lighten(BTN_DEFAULT, 0.06),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.0, TEXT_BUTTON),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.5,
            },
            ..egui::Visuals::light().widgets
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
