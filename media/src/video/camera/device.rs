//! OpenCV-backed camera device.

use crate::error::{MediaError, Result};
use crate::video::frame::VideoFrame;
use opencv::prelude::*;
use opencv::videoio::{
    CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture,
};
use tracing::{debug, error, info, warn};

use super::config::CameraConfig;

/// Log progress every N frames
const CAMERA_LOG_INTERVAL: u64 = 1000;

/// Open video capture device; released on drop.
pub struct Camera {
    capture: VideoCapture,
    config: CameraConfig,
    frame_count: u64,
    actual_width: u32,
    actual_height: u32,
    actual_fps: f64,
}

impl Camera {
    /// Opens the device and applies the requested format.
    ///
    /// # Errors
    /// `MediaError::Camera` if the device cannot be opened (missing, busy or
    /// access denied).
    pub fn open(config: CameraConfig) -> Result<Self> {
        info!(
            "[CAMERA] Opening device {} @ {:.1} fps",
            config.device_id, config.fps
        );

        let mut capture = VideoCapture::new(config.device_id, CAP_ANY)
            .map_err(|e| MediaError::Camera(format!("Failed to open camera: {}", e)))?;

        let opened = capture
            .is_opened()
            .map_err(|e| MediaError::Camera(format!("Error verifying camera status: {}", e)))?;
        if !opened {
            return Err(MediaError::Camera(format!(
                "Camera {} is not available",
                config.device_id
            )));
        }

        if let Some((width, height)) = config.resolution {
            let _ = capture.set(CAP_PROP_FRAME_WIDTH, f64::from(width));
            let _ = capture.set(CAP_PROP_FRAME_HEIGHT, f64::from(height));
        }
        let _ = capture.set(CAP_PROP_FPS, config.fps);

        let actual_width = capture.get(CAP_PROP_FRAME_WIDTH)? as u32;
        let actual_height = capture.get(CAP_PROP_FRAME_HEIGHT)? as u32;
        let actual_fps = capture.get(CAP_PROP_FPS)?;

        info!(
            "[CAMERA] Device {} configured: {}x{} @ {:.1} fps",
            config.device_id, actual_width, actual_height, actual_fps
        );
        if (actual_fps - config.fps).abs() > 1.0 {
            warn!(
                "[CAMERA] FPS mismatch (got: {:.1}, requested: {:.1})",
                actual_fps, config.fps
            );
        }

        Ok(Camera {
            capture,
            config,
            frame_count: 0,
            actual_width,
            actual_height,
            actual_fps,
        })
    }

    /// Reads one frame, blocking until the driver delivers it.
    pub fn capture_frame(&mut self) -> Result<VideoFrame> {
        let mut mat = Mat::default();

        let success = self
            .capture
            .read(&mut mat)
            .map_err(|e| MediaError::Camera(format!("Failed to read frame: {}", e)))?;

        if !success || mat.empty() || mat.cols() == 0 || mat.rows() == 0 {
            return Err(MediaError::Camera("Empty or invalid frame".to_string()));
        }

        self.frame_count += 1;
        if self.frame_count.is_multiple_of(CAMERA_LOG_INTERVAL) {
            debug!("[CAMERA] Frames captured: {}", self.frame_count);
        }

        Ok(VideoFrame::new(mat))
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn actual_resolution(&self) -> (u32, u32) {
        (self.actual_width, self.actual_height)
    }

    pub fn actual_fps(&self) -> f64 {
        self.actual_fps
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        info!(
            "[CAMERA] Releasing device {}. Total frames captured: {}",
            self.config.device_id, self.frame_count
        );

        if let Err(e) = self.capture.release() {
            error!("[CAMERA] Error releasing camera: {}", e);
        }
    }
}
