//! Camera Resource Manager
//!
//! Keeps the physical camera in line with the user's on/off intent.
//!
//! # Lifecycle
//!
//! ```text
//!  set_enabled(true) ──> Starting ──complete(Ok)──> Live
//!        │                  │                        │
//!        │            complete(Err)           set_enabled(false)
//!        │                  v                  / teardown()
//!        │               Failed                      │
//!        └──────────── set_enabled(false) ──> Off <──┘
//! ```
//!
//! Acquisition itself runs elsewhere (it blocks while the device opens). The
//! manager hands out an [`AcquireRequest`] stamped with an [`IntentToken`] and
//! later receives the outcome through [`CameraManager::complete`]. Every intent
//! change bumps the token, so an outcome carrying an older token is released
//! on arrival instead of being bound. The worker can read the latest token
//! through [`CurrentIntent`] and skip requests that are already outdated.

use crate::error::CameraError;
use crate::stream::{MediaConstraints, MediaStream};
use crate::video::RgbFrame;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Generation number of the camera intent.
pub type IntentToken = u64;

/// Read-only view of a manager's latest token, shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct CurrentIntent {
    token: Arc<AtomicU64>,
}

impl CurrentIntent {
    pub fn token(&self) -> IntentToken {
        self.token.load(Ordering::Acquire)
    }

    /// False once the intent has moved past `token`.
    pub fn is_current(&self, token: IntentToken) -> bool {
        self.token() == token
    }

    fn publish(&self, token: IntentToken) {
        self.token.store(token, Ordering::Release);
    }
}

/// Capture request to run off the UI thread and report back with
/// [`CameraManager::complete`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquireRequest {
    pub token: IntentToken,
    pub constraints: MediaConstraints,
}

/// Physical state of the camera as the view sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStatus {
    Off,
    Starting,
    Live,
    Failed,
}

/// What [`CameraManager::complete`] did with an acquisition outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The stream is now bound to the display surface.
    Bound { stream_id: u64 },
    /// The current attempt failed; intent was reset to off.
    Failed(CameraError),
    /// The outcome belonged to an outdated intent. A stream, if any, was stopped.
    Discarded,
}

/// Owns at most one live [`MediaStream`] and ties its lifetime to the camera
/// intent.
pub struct CameraManager {
    constraints: MediaConstraints,
    enabled: bool,
    token: IntentToken,
    pending: Option<IntentToken>,
    bound: Option<MediaStream>,
    error: Option<String>,
    published: CurrentIntent,
}

impl CameraManager {
    /// Starts disabled. Audio is never requested.
    pub fn new(constraints: MediaConstraints) -> Self {
        Self {
            constraints: Self::video_only(constraints),
            enabled: false,
            token: 0,
            pending: None,
            bound: None,
            error: None,
            published: CurrentIntent::default(),
        }
    }

    fn video_only(constraints: MediaConstraints) -> MediaConstraints {
        MediaConstraints {
            video: true,
            audio: false,
            ..constraints
        }
    }

    /// Applies the user's intent.
    ///
    /// Returns a request to dispatch when this call starts a new acquisition.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<AcquireRequest> {
        if enabled {
            self.enable()
        } else {
            self.disable();
            None
        }
    }

    /// Flips the intent.
    pub fn toggle(&mut self) -> Option<AcquireRequest> {
        self.set_enabled(!self.enabled)
    }

    fn enable(&mut self) -> Option<AcquireRequest> {
        if self.enabled {
            debug!("[CAMERA] Enable ignored, camera intent already on");
            return None;
        }

        // Invariant says nothing is bound while disabled; release anyway.
        self.release();

        self.enabled = true;
        self.error = None;
        self.advance_token();
        self.pending = Some(self.token);

        info!("[CAMERA] Intent on, requesting capture (token {})", self.token);
        Some(AcquireRequest {
            token: self.token,
            constraints: self.constraints,
        })
    }

    fn disable(&mut self) {
        if self.enabled {
            info!("[CAMERA] Intent off (token {})", self.token);
        }

        self.enabled = false;
        self.advance_token();
        self.pending = None;
        self.release();
    }

    fn advance_token(&mut self) {
        self.token += 1;
        self.published.publish(self.token);
    }

    /// Receives the outcome of the acquisition issued under `token`.
    pub fn complete(
        &mut self,
        token: IntentToken,
        result: Result<MediaStream, CameraError>,
    ) -> Completion {
        let current = self.pending == Some(token);

        match (current, result) {
            (true, Ok(stream)) => {
                self.release();
                self.pending = None;

                let stream_id = stream.id();
                info!(
                    "[CAMERA] Stream {} bound to display (token {})",
                    stream_id, token
                );
                self.bound = Some(stream);
                Completion::Bound { stream_id }
            }
            (true, Err(err)) => {
                warn!("[CAMERA] Acquisition failed (token {}): {}", token, err);
                self.pending = None;
                self.enabled = false;
                self.error = Some(err.user_message().to_string());
                Completion::Failed(err)
            }
            (false, Ok(mut stream)) => {
                let stopped = stream.stop_all();
                info!(
                    "[CAMERA] Stale stream {} released (token {}, current {}), {} track(s) stopped",
                    stream.id(),
                    token,
                    self.token,
                    stopped
                );
                Completion::Discarded
            }
            (false, Err(err)) => {
                debug!(
                    "[CAMERA] Ignoring stale failure (token {}, current {}): {}",
                    token, self.token, err
                );
                Completion::Discarded
            }
        }
    }

    /// Lifecycle handler for component teardown: turns the intent off and
    /// stops every track of the bound stream.
    pub fn teardown(&mut self) {
        if self.enabled || self.bound.is_some() {
            info!("[CAMERA] Teardown, releasing camera");
        }
        self.disable();
    }

    /// Stops every track of the bound stream, then unbinds it.
    fn release(&mut self) {
        if let Some(mut stream) = self.bound.take() {
            let stopped = stream.stop_all();
            info!(
                "[CAMERA] Stream {} unbound, {} track(s) stopped",
                stream.id(),
                stopped
            );
        }
    }

    /// Device and format for future acquisitions. A bound stream is kept.
    pub fn constraints(&self) -> MediaConstraints {
        self.constraints
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_token(&self) -> IntentToken {
        self.token
    }

    /// Handle for the thread running acquisitions.
    pub fn current_intent(&self) -> CurrentIntent {
        self.published.clone()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn bound_stream(&self) -> Option<&MediaStream> {
        self.bound.as_ref()
    }

    /// Newest unseen frame of the bound stream.
    pub fn take_latest_frame(&self) -> Option<RgbFrame> {
        self.bound.as_ref().and_then(MediaStream::take_latest_frame)
    }

    pub fn status(&self) -> CameraStatus {
        match (self.enabled, self.bound.is_some(), self.pending.is_some()) {
            (true, true, _) => CameraStatus::Live,
            (true, false, true) => CameraStatus::Starting,
            (false, _, _) if self.error.is_some() => CameraStatus::Failed,
            _ => CameraStatus::Off,
        }
    }
}

impl Default for CameraManager {
    fn default() -> Self {
        Self::new(MediaConstraints::default())
    }
}

impl Drop for CameraManager {
    fn drop(&mut self) {
        self.teardown();
    }
}
