//! Media Capture Module
//!
//! Local camera capture for the call screen: capture streams made of tracks,
//! the OpenCV camera backend, the camera resource manager that ties a stream's
//! lifetime to the user's camera intent, and portrait decoding for the roster.

pub mod error;
pub mod manager;
pub mod portrait;
pub mod stream;
pub mod video;

pub use error::{CAMERA_UNAVAILABLE_MESSAGE, CameraError, MediaError};
pub use manager::{
    AcquireRequest, CameraManager, CameraStatus, Completion, CurrentIntent, IntentToken,
};
pub use portrait::{Portrait, PortraitSize, load_portrait};
pub use stream::{
    CameraTrack, MediaConstraints, MediaDevices, MediaStream, MediaTrack, OpenCvDevices,
    ReleaseWatch, TrackKind, TrackState,
};
pub use video::{CameraConfig, RgbFrame, VideoFrame};
