use super::camera_track::CameraTrack;
use super::constraints::MediaConstraints;
use super::media_stream::MediaStream;
use super::track::MediaTrack;
use crate::error::CameraError;
use crate::video::CameraConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Platform capture entry point.
///
/// Implementations may block while the device opens; callers run them off
/// the UI thread.
pub trait MediaDevices: Send {
    fn get_user_media(&self, constraints: &MediaConstraints) -> Result<MediaStream, CameraError>;
}

/// Cameras reachable through OpenCV's `VideoCapture`.
#[derive(Debug, Default)]
pub struct OpenCvDevices {
    next_id: AtomicU64,
}

impl OpenCvDevices {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl MediaDevices for OpenCvDevices {
    fn get_user_media(&self, constraints: &MediaConstraints) -> Result<MediaStream, CameraError> {
        if !constraints.video {
            return Err(CameraError::unavailable("Only video capture is supported"));
        }
        if constraints.audio {
            warn!("[CAMERA] Audio requested but not supported, capturing video only");
        }

        let mut config = CameraConfig::new(constraints.device_id, constraints.fps)?;
        if let Some((width, height)) = constraints.resolution {
            config = config.with_resolution(width, height)?;
        }

        let track = CameraTrack::start(self.next_id(), config)?;
        let stream_id = self.next_id();
        info!(
            "[CAMERA] Stream {} acquired from device {}",
            stream_id, constraints.device_id
        );

        let tracks: Vec<Box<dyn MediaTrack>> = vec![Box::new(track)];
        Ok(MediaStream::new(stream_id, tracks))
    }
}
