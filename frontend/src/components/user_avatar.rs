//! User Avatar Component
//!
//! Filled disc with a centered glyph, painted straight into a rect. Used for
//! the camera-off placeholder and for roster tiles without a portrait.

use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

/// Grey used behind a participant's initial
pub const FALLBACK_FILL: Color32 = Color32::from_rgb(0x7f, 0x7f, 0x7f);

/// User avatar with initial letter
pub struct UserAvatar {
    radius: f32,
    background_color: Color32,
    text_color: Color32,
    border: Option<Stroke>,
}

impl UserAvatar {
    /// Creates a new avatar with the fallback styling
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            background_color: FALLBACK_FILL,
            text_color: Color32::WHITE,
            border: None,
        }
    }

    pub fn colors(mut self, background: Color32, text: Color32) -> Self {
        self.background_color = background;
        self.text_color = text;
        self
    }

    pub fn border(mut self, stroke: Stroke) -> Self {
        self.border = Some(stroke);
        self
    }

    /// Paints the disc centered on `center` with `glyph` in the middle
    pub fn paint(&self, painter: &Painter, center: Pos2, glyph: &str) {
        painter.circle_filled(center, self.radius, self.background_color);
        if let Some(stroke) = self.border {
            painter.circle_stroke(center, self.radius, stroke);
        }
        painter.text(
            center,
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(self.radius * 0.9),
            self.text_color,
        );
    }
}
