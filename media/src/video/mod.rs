//! Video capture and frame handling.

pub mod camera;
pub mod converters;
pub mod frame;

pub use camera::{Camera, CameraConfig};
pub use converters::{frame_to_rgb, mat_to_rgb};
pub use frame::{RgbFrame, VideoFrame};
