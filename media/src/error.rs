//! Error types for media operations.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MediaError>;

/// Text shown to the user whenever the camera cannot be acquired.
pub const CAMERA_UNAVAILABLE_MESSAGE: &str =
    "Camera not available. Please check permissions or ensure it's not in use by another app.";

/// Low-level failures inside the capture backend and image decoding.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Camera error: {0}")]
    Camera(String),
    #[error("Image error: {0}")]
    Image(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),
}

/// Failure of a capture request, as seen by the camera manager.
///
/// Permission denial, a busy device and a missing device all map here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera unavailable: {reason}")]
    CameraUnavailable { reason: String },
}

impl CameraError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        CameraError::CameraUnavailable {
            reason: reason.into(),
        }
    }

    /// Message suitable for the error overlay.
    pub fn user_message(&self) -> &'static str {
        match self {
            CameraError::CameraUnavailable { .. } => CAMERA_UNAVAILABLE_MESSAGE,
        }
    }
}

impl From<MediaError> for CameraError {
    fn from(err: MediaError) -> Self {
        CameraError::unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = MediaError::Config("Invalid setting".to_string());
        assert_eq!(err.to_string(), "Config error: Invalid setting");
    }

    #[test]
    fn test_error_display_camera() {
        let err = MediaError::Camera("Device not found".to_string());
        assert_eq!(err.to_string(), "Camera error: Device not found");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let media_err: MediaError = io_err.into();
        assert!(matches!(media_err, MediaError::Io(_)));
    }

    #[test]
    fn test_media_error_becomes_camera_unavailable() {
        let err: CameraError = MediaError::Camera("busy".to_string()).into();
        assert_eq!(err, CameraError::unavailable("Camera error: busy"));
        assert_eq!(err.user_message(), CAMERA_UNAVAILABLE_MESSAGE);
    }
}
