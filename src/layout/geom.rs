//! Integer pixel geometry used by the layout pass

use eframe::egui;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub w: u32,
    pub h: u32,
}

impl Dimensions {
    pub const ZERO: Self = Self { w: 0, h: 0 };

    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn uniform(v: u32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Snap an egui rect onto whole pixels. Negative or non-finite extents clamp to zero.
    pub fn from_egui(rect: egui::Rect) -> Self {
        let clamp = |v: f32| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
        Self::new(
            clamp(rect.min.x),
            clamp(rect.min.y),
            clamp(rect.width()),
            clamp(rect.height()),
        )
    }

    pub fn to_egui(self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x as f32, self.y as f32),
            egui::vec2(self.w as f32, self.h as f32),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.w, self.h)
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn inset(self, insets: Insets) -> Self {
        let x = self.x.saturating_add(insets.left);
        let y = self.y.saturating_add(insets.top);
        let w = self
            .w
            .saturating_sub(insets.left.saturating_add(insets.right));
        let h = self
            .h
            .saturating_sub(insets.top.saturating_add(insets.bottom));
        Rect::new(x, y, w, h)
    }

    pub fn centered(self, w: u32, h: u32) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        let x = self.x.saturating_add((self.w - w) / 2);
        let y = self.y.saturating_add((self.h - h) / 2);
        Rect::new(x, y, w, h)
    }
}
