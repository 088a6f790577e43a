use egui::ColorImage;
use media::{CameraError, IntentToken, MediaStream};

/// Events sent from the Logic thread back to the UI thread
#[derive(Debug)]
pub enum LogicEvent {
    /// Outcome of `LogicCommand::AcquireCamera`. Sent exactly once per request.
    CameraAcquired {
        token: IntentToken,
        result: Result<MediaStream, CameraError>,
    },

    PortraitLoaded {
        index: usize,
        avatar: ColorImage,
        backdrop: ColorImage,
    },

    PortraitFailed {
        index: usize,
        reason: String,
    },
}
