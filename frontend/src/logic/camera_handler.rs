//! Camera Acquisition
//!
//! Opening a capture device blocks for up to a few seconds, so it runs here
//! instead of on the UI thread. Every request gets exactly one reply. Requests
//! the user has already moved past are answered without touching the device,
//! and the device is only opened again once the stream handed out last has
//! been released by the UI.

use crate::events::LogicEvent;
use media::{
    AcquireRequest, CameraError, CurrentIntent, MediaDevices, MediaStream, ReleaseWatch,
};
use std::sync::mpsc::Sender;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long to wait for the UI to let go of the previous stream.
/// The UI repaints at least once a second, so this only expires on shutdown.
const RELEASE_TIMEOUT: Duration = Duration::from_secs(3);

pub(super) struct CameraWorker {
    devices: Box<dyn MediaDevices>,
    intent: CurrentIntent,
    handed_out: Option<ReleaseWatch>,
}

impl CameraWorker {
    pub(super) fn new(devices: Box<dyn MediaDevices>, intent: CurrentIntent) -> Self {
        Self {
            devices,
            intent,
            handed_out: None,
        }
    }

    pub(super) fn handle_acquire_camera(
        &mut self,
        request: AcquireRequest,
        evt_tx: &Sender<LogicEvent>,
    ) {
        let result = self.acquire(request);
        self.reply(request, result, evt_tx);
    }

    fn acquire(&mut self, request: AcquireRequest) -> Result<MediaStream, CameraError> {
        if !self.intent.is_current(request.token) {
            return Err(superseded(request));
        }

        self.wait_for_previous_release();

        // The intent may have moved on while waiting.
        if !self.intent.is_current(request.token) {
            return Err(superseded(request));
        }

        info!(
            "[CAMERA] Opening device {} at {} fps (token {})",
            request.constraints.device_id, request.constraints.fps, request.token
        );

        let mut stream = match self.devices.get_user_media(&request.constraints) {
            Ok(stream) => stream,
            Err(e) => {
                warn!("[CAMERA] Could not open device (token {}): {}", request.token, e);
                return Err(e);
            }
        };

        if !self.intent.is_current(request.token) {
            let stopped = stream.stop_all();
            info!(
                "[CAMERA] Stream {} outdated while opening (token {}), {} track(s) stopped",
                stream.id(),
                request.token,
                stopped
            );
            return Ok(stream);
        }

        info!(
            "[CAMERA] Device ready, stream {} (token {})",
            stream.id(),
            request.token
        );
        self.handed_out = Some(stream.release_watch());
        Ok(stream)
    }

    fn wait_for_previous_release(&mut self) {
        let Some(watch) = self.handed_out.take() else {
            return;
        };

        if !watch.is_released() {
            debug!("[CAMERA] Waiting for the previous stream to be released");
            if !watch.wait(RELEASE_TIMEOUT) {
                warn!(
                    "[CAMERA] Previous stream still held after {:?}, opening anyway",
                    RELEASE_TIMEOUT
                );
            }
        }
    }

    fn reply(
        &self,
        request: AcquireRequest,
        result: Result<MediaStream, CameraError>,
        evt_tx: &Sender<LogicEvent>,
    ) {
        // If the UI is gone the stream is dropped here, which stops its tracks.
        if evt_tx
            .send(LogicEvent::CameraAcquired {
                token: request.token,
                result,
            })
            .is_err()
        {
            warn!("[CAMERA] UI thread gone, discarding acquisition {}", request.token);
        }
    }
}

fn superseded(request: AcquireRequest) -> CameraError {
    debug!("[CAMERA] Skipping outdated request (token {})", request.token);
    CameraError::unavailable(format!("request {} superseded", request.token))
}
