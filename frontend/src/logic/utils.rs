//! Utility Functions
//!
//! Helper functions for frame conversion.

use egui::{Color32, ColorImage, Vec2};
use media::RgbFrame;

/// Converts a packed RGB frame to an EGUI ColorImage
pub fn rgb_to_color_image(frame: &RgbFrame) -> ColorImage {
    let pixels: Vec<Color32> = frame
        .pixels
        .chunks_exact(3)
        .map(|rgb| Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        .collect();

    ColorImage {
        size: [frame.width, frame.height],
        pixels,
        source_size: Vec2::new(frame.width as f32, frame.height as f32),
    }
}
