//! Camera capture configuration.

use crate::error::{MediaError, Result};

/// Device selection and requested capture format
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Camera device ID (0 for default camera)
    pub device_id: i32,
    /// Requested resolution (None = whatever the driver picks)
    pub resolution: Option<(u32, u32)>,
    /// Target frames per second
    pub fps: f64,
}

impl CameraConfig {
    const MIN_FPS: f64 = 1.0;
    const MAX_FPS: f64 = 240.0;
    const MIN_DIMENSION: u32 = 1;
    /// 8K
    const MAX_DIMENSION: u32 = 7680;

    /// Validates `fps` and clamps it into 1.0..=240.0.
    ///
    /// # Errors
    /// `MediaError::Config` if fps is NaN or infinite.
    pub fn new(device_id: i32, fps: f64) -> Result<Self> {
        if !fps.is_finite() {
            return Err(MediaError::Config(
                "FPS must be a finite number (not NaN or infinite)".to_string(),
            ));
        }

        Ok(Self {
            device_id,
            resolution: None,
            fps: fps.clamp(Self::MIN_FPS, Self::MAX_FPS),
        })
    }

    /// Requests a specific resolution; each side must be within 1..=7680.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Result<Self> {
        for (name, value) in [("Width", width), ("Height", height)] {
            if !(Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&value) {
                return Err(MediaError::Config(format!(
                    "{} must be between {} and {}, got {}",
                    name,
                    Self::MIN_DIMENSION,
                    Self::MAX_DIMENSION,
                    value
                )));
            }
        }

        self.resolution = Some((width, height));
        Ok(self)
    }

    /// Time budget for one frame at the configured rate.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps)
    }
}

/// Device 0 at 30 FPS
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            resolution: None,
            fps: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.fps, 30.0);
        assert!(config.resolution.is_none());
    }

    #[test]
    fn test_fps_clamping() {
        assert_eq!(CameraConfig::new(0, 0.5).unwrap().fps, 1.0);
        assert_eq!(CameraConfig::new(0, 300.0).unwrap().fps, 240.0);
        assert_eq!(CameraConfig::new(0, 60.0).unwrap().fps, 60.0);
    }

    #[test]
    fn test_fps_not_finite() {
        for fps in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                CameraConfig::new(0, fps),
                Err(MediaError::Config(_))
            ));
        }
    }

    #[test]
    fn test_resolution_bounds() {
        let base = CameraConfig::new(0, 30.0).unwrap();
        assert!(base.clone().with_resolution(0, 480).is_err());
        assert!(base.clone().with_resolution(640, 10000).is_err());
        assert_eq!(
            base.with_resolution(1280, 720).unwrap().resolution,
            Some((1280, 720))
        );
    }

    #[test]
    fn test_frame_interval() {
        let config = CameraConfig::new(0, 25.0).unwrap();
        assert_eq!(config.frame_interval().as_millis(), 40);
    }
}
