//! Camera device access.

pub mod config;
pub mod device;

pub use config::CameraConfig;
pub use device::Camera;
