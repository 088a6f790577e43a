//! BGR to RGB conversion.

use crate::error::{MediaError, Result};
use crate::video::frame::{RgbFrame, VideoFrame};
use opencv::core::Mat;
use opencv::imgproc::{COLOR_BGR2RGB, cvt_color_def};
use opencv::prelude::*;

/// Converts an OpenCV BGR matrix into a packed RGB frame.
pub fn mat_to_rgb(bgr: &Mat) -> Result<RgbFrame> {
    if bgr.empty() {
        return Err(MediaError::Image("Empty matrix".to_string()));
    }

    let mut rgb = Mat::default();
    cvt_color_def(bgr, &mut rgb, COLOR_BGR2RGB)?;

    let width = rgb.cols() as usize;
    let height = rgb.rows() as usize;
    let pixels = rgb.data_bytes()?.to_vec();

    RgbFrame::new(width, height, pixels).ok_or_else(|| {
        MediaError::Image(format!(
            "Unexpected pixel layout for {}x{} frame",
            width, height
        ))
    })
}

/// Converts a captured camera frame to RGB.
pub fn frame_to_rgb(frame: &VideoFrame) -> Result<RgbFrame> {
    mat_to_rgb(frame.data())
}
