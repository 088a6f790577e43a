//! Live camera track backed by a dedicated capture thread.

use super::track::{MediaTrack, TrackKind, TrackState};
use crate::error::{MediaError, Result};
use crate::video::{Camera, CameraConfig, RgbFrame, frame_to_rgb};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::sync_channel;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Back-off after a failed read
const READ_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Video track whose capture thread owns the OpenCV device.
///
/// The device is opened on the capture thread and released when that thread
/// exits, which [`MediaTrack::stop`] waits for.
pub struct CameraTrack {
    id: u64,
    label: String,
    running: Arc<AtomicBool>,
    latest: Arc<Mutex<Option<RgbFrame>>>,
    pump: Option<JoinHandle<()>>,
}

impl CameraTrack {
    /// Opens the camera and starts publishing frames.
    ///
    /// Blocks until the device is either open or has failed to open.
    pub fn start(id: u64, config: CameraConfig) -> Result<Self> {
        let label = format!("Camera {}", config.device_id);
        let running = Arc::new(AtomicBool::new(true));
        let latest = Arc::new(Mutex::new(None));
        let (opened_tx, opened_rx) = sync_channel::<Result<()>>(1);

        let pump = {
            let running = Arc::clone(&running);
            let latest = Arc::clone(&latest);
            std::thread::Builder::new()
                .name(format!("camera-track-{}", id))
                .spawn(move || {
                    let camera = match Camera::open(config) {
                        Ok(camera) => {
                            let _ = opened_tx.send(Ok(()));
                            camera
                        }
                        Err(e) => {
                            let _ = opened_tx.send(Err(e));
                            return;
                        }
                    };
                    run_capture_loop(camera, &running, &latest);
                })?
        };

        match opened_rx.recv() {
            Ok(Ok(())) => {
                info!("[CAMERA] Track {} live ({})", id, label);
                Ok(Self {
                    id,
                    label,
                    running,
                    latest,
                    pump: Some(pump),
                })
            }
            Ok(Err(e)) => {
                let _ = pump.join();
                Err(e)
            }
            Err(_) => {
                let _ = pump.join();
                Err(MediaError::Camera(
                    "Capture thread exited before opening the device".to_string(),
                ))
            }
        }
    }
}

/// Captures at the device rate, keeping only the newest frame.
fn run_capture_loop(
    mut camera: Camera,
    running: &AtomicBool,
    latest: &Mutex<Option<RgbFrame>>,
) {
    let frame_interval = camera.config().frame_interval();

    while running.load(Ordering::Acquire) {
        let frame_start = Instant::now();

        match camera.capture_frame().and_then(|frame| frame_to_rgb(&frame)) {
            Ok(rgb) => {
                if let Ok(mut slot) = latest.lock() {
                    *slot = Some(rgb);
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_interval {
                    std::thread::sleep(frame_interval - elapsed);
                }
            }
            Err(e) => {
                debug!("[CAMERA] Frame read failed: {}", e);
                std::thread::sleep(READ_RETRY_DELAY);
            }
        }
    }

    drop(camera);
}

impl MediaTrack for CameraTrack {
    fn id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Video
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn state(&self) -> TrackState {
        if self.pump.is_some() {
            TrackState::Live
        } else {
            TrackState::Ended
        }
    }

    fn stop(&mut self) {
        let Some(pump) = self.pump.take() else {
            return;
        };

        self.running.store(false, Ordering::Release);
        if pump.join().is_err() {
            error!("[CAMERA] Capture thread of track {} panicked", self.id);
        }
        if let Ok(mut slot) = self.latest.lock() {
            *slot = None;
        }
        info!("[CAMERA] Track {} stopped", self.id);
    }

    fn take_latest_frame(&self) -> Option<RgbFrame> {
        self.latest.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Drop for CameraTrack {
    fn drop(&mut self) {
        self.stop();
    }
}
