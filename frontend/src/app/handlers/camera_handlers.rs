//! Camera and Microphone Handlers
//!
//! Turns toggle clicks into camera manager intents and applies acquisition
//! results coming back from the logic thread.

use crate::app::state::App;
use crate::events::LogicCommand;
use media::{AcquireRequest, CameraError, Completion, IntentToken, MediaStream};
use std::sync::mpsc::SendError;
use tracing::{error, info, warn};

impl App {
    /// Toggles the camera on/off for the local user
    pub(in crate::app) fn handle_toggle_camera(&mut self) {
        let request = self.camera.toggle();

        info!(
            "[CAMERA] User '{}' toggled camera to {}",
            self.call_info.user_name,
            if self.camera.is_enabled() { "ON" } else { "OFF" }
        );

        self.dispatch_acquire(request);
    }

    /// Toggles the microphone button state. There is no audio capture.
    pub(in crate::app) fn handle_toggle_mic(&mut self) {
        self.mic_enabled = !self.mic_enabled;
        info!(
            "[AUDIO] User '{}' {} microphone",
            self.call_info.user_name,
            if self.mic_enabled { "unmuted" } else { "muted" }
        );
    }

    /// Hands an acquisition to the logic thread.
    /// A dead logic thread counts as an unavailable camera.
    pub(in crate::app) fn dispatch_acquire(&mut self, request: Option<AcquireRequest>) {
        let Some(request) = request else {
            return;
        };

        if let Err(SendError(_)) = self
            .logic_cmd_tx
            .send(LogicCommand::AcquireCamera(request))
        {
            error!("[CAMERA] Logic thread disconnected, cannot open camera");
            self.handle_camera_acquired(
                request.token,
                Err(CameraError::unavailable("logic thread disconnected")),
            );
        }
    }

    /// Applies the outcome of an acquisition
    pub(in crate::app) fn handle_camera_acquired(
        &mut self,
        token: IntentToken,
        result: Result<MediaStream, CameraError>,
    ) {
        match self.camera.complete(token, result) {
            Completion::Bound { stream_id } => {
                info!("[CAMERA] Camera live (stream {})", stream_id);
            }
            Completion::Failed(err) => {
                warn!("[CAMERA] Camera turned off after failure: {}", err);
                self.show_error(err.user_message().to_string());
            }
            Completion::Discarded => {}
        }
    }
}
