//! Frame types.
//!
//! `VideoFrame` is what the camera hands out (BGR, OpenCV owned);
//! `RgbFrame` is what the display surface consumes.

use opencv::core::Mat;
use opencv::prelude::*;
use std::time::Instant;

/// Raw BGR frame straight from the capture device.
pub struct VideoFrame {
    data: Mat,
    timestamp: Instant,
}

impl VideoFrame {
    /// Wraps a captured matrix, stamping the capture time.
    pub fn new(mat: Mat) -> Self {
        VideoFrame {
            data: mat,
            timestamp: Instant::now(),
        }
    }

    pub fn width(&self) -> i32 {
        self.data.cols()
    }

    pub fn height(&self) -> i32 {
        self.data.rows()
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    pub fn data(&self) -> &Mat {
        &self.data
    }
}

/// Tightly packed RGB pixels, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RgbFrame {
    /// Returns `None` when `pixels` does not hold exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == width * height * 3).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Single-colour frame, handy as a stand-in image.
    pub fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let pixels = rgb.iter().copied().cycle().take(width * height * 3).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
