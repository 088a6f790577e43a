/// What a capture request asks the platform for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaConstraints {
    pub video: bool,
    pub audio: bool,
    pub device_id: i32,
    pub fps: f64,
    pub resolution: Option<(u32, u32)>,
}

impl MediaConstraints {
    /// Camera only, no microphone.
    pub fn video_only(device_id: i32, fps: f64) -> Self {
        Self {
            video: true,
            audio: false,
            device_id,
            fps,
            resolution: None,
        }
    }

    pub fn with_resolution(mut self, resolution: Option<(u32, u32)>) -> Self {
        self.resolution = resolution;
        self
    }
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self::video_only(0, 30.0)
    }
}
