//! Button Component
//!
//! Round control-bar buttons in the call screen's palette.

use egui::{Color32, FontId, RichText, Vec2};

/// Button variant styles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Toggle in its "on" state and plain call actions
    On,
    /// Toggle switched off
    Off,
    /// Leave call
    Danger,
    /// Smaller buttons on the right of the bar
    Utility,
}

impl ButtonVariant {
    /// Returns the fill color for this button variant
    pub fn color(&self) -> Color32 {
        match self {
            ButtonVariant::On | ButtonVariant::Utility => Color32::from_rgb(0x3c, 0x40, 0x43),
            ButtonVariant::Off => Color32::from_rgb(0x5f, 0x63, 0x68),
            ButtonVariant::Danger => Color32::from_rgb(0xea, 0x43, 0x35),
        }
    }

    fn diameter(&self) -> f32 {
        match self {
            ButtonVariant::Utility => 40.0,
            _ => 46.0,
        }
    }
}

/// A styled button component with configurable appearance
pub struct Button {
    text: String,
    text_size: f32,
    text_color: Color32,
    min_size: Option<Vec2>,
    variant: ButtonVariant,
    hover_text: Option<String>,
}

impl Button {
    /// Creates a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            text_size: 18.0,
            text_color: Color32::WHITE,
            min_size: None,
            variant: ButtonVariant::On,
            hover_text: None,
        }
    }

    /// Sets the minimum size of the button
    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }

    /// Tooltip, also the button's accessible name
    pub fn hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    /// Renders the button and returns the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = self
            .min_size
            .unwrap_or_else(|| Vec2::splat(self.variant.diameter()));

        let button = egui::Button::new(
            RichText::new(&self.text)
                .font(FontId::proportional(self.text_size))
                .color(self.text_color),
        )
        .fill(self.variant.color())
        .corner_radius(size.y / 2.0)
        .min_size(size);

        let response = ui.add(button);
        match self.hover_text {
            Some(text) => response.on_hover_text(text),
            None => response,
        }
    }
}
