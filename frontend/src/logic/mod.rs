// Main logic thread coordinator

mod camera_handler;
mod portrait_loader;
mod utils;

pub use utils::rgb_to_color_image;

use crate::events::{LogicCommand, LogicEvent};
use camera_handler::CameraWorker;
use media::{CurrentIntent, MediaDevices};
use portrait_loader::handle_load_portraits;
use std::sync::mpsc::{Receiver, Sender};
use tracing::info;

/// Main function of the logic thread.
/// Receives `LogicCommand`s and sends `LogicEvent`s back to the UI thread.
/// `intent` is the camera manager's latest token, used to skip outdated
/// acquisitions. Returns once the UI side drops its command sender.
pub fn run_logic_thread(
    cmd_rx: Receiver<LogicCommand>,
    evt_tx: Sender<LogicEvent>,
    devices: Box<dyn MediaDevices>,
    intent: CurrentIntent,
) {
    let mut camera = CameraWorker::new(devices, intent);

    // Main loop: blocking wait for commands
    for command in cmd_rx {
        match command {
            LogicCommand::AcquireCamera(request) => {
                camera.handle_acquire_camera(request, &evt_tx);
            }

            LogicCommand::LoadPortraits { portraits, size } => {
                handle_load_portraits(portraits, size, &evt_tx);
            }
        }
    }

    info!("[LOGIC] Command channel closed, logic thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use media::{
        CameraError, CameraManager, CameraStatus, MediaConstraints, MediaStream, MediaTrack,
        PortraitSize, TrackKind, TrackState,
    };
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::channel;
    use std::time::Duration;

    /// Holds the fake camera until stopped.
    struct HeldTrack {
        live: bool,
        held: Arc<AtomicUsize>,
    }

    impl MediaTrack for HeldTrack {
        fn id(&self) -> u64 {
            1
        }
        fn kind(&self) -> TrackKind {
            TrackKind::Video
        }
        fn label(&self) -> &str {
            "held"
        }
        fn state(&self) -> TrackState {
            if self.live {
                TrackState::Live
            } else {
                TrackState::Ended
            }
        }
        fn stop(&mut self) {
            if self.live {
                self.live = false;
                self.held.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }

    /// Single camera that refuses a second open while it is held, like V4L2.
    #[derive(Clone, Default)]
    struct ExclusiveCamera {
        unplugged: bool,
        held: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
        opened: Arc<AtomicUsize>,
    }

    impl ExclusiveCamera {
        fn unplugged() -> Self {
            Self {
                unplugged: true,
                ..Self::default()
            }
        }

        fn held(&self) -> usize {
            self.held.load(Ordering::SeqCst)
        }

        fn peak(&self) -> usize {
            self.peak.load(Ordering::SeqCst)
        }

        fn opened(&self) -> usize {
            self.opened.load(Ordering::SeqCst)
        }
    }

    impl MediaDevices for ExclusiveCamera {
        fn get_user_media(&self, _: &MediaConstraints) -> Result<MediaStream, CameraError> {
            if self.unplugged {
                return Err(CameraError::unavailable("no device"));
            }
            if self.held() > 0 {
                return Err(CameraError::unavailable("device busy"));
            }

            let now = self.held.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            let id = self.opened.fetch_add(1, Ordering::SeqCst) as u64 + 9;
            let track = HeldTrack {
                live: true,
                held: Arc::clone(&self.held),
            };
            Ok(MediaStream::new(id, vec![Box::new(track)]))
        }
    }

    fn run(
        commands: Vec<LogicCommand>,
        camera: &ExclusiveCamera,
        intent: CurrentIntent,
    ) -> Vec<LogicEvent> {
        let (cmd_tx, cmd_rx) = channel();
        let (evt_tx, evt_rx) = channel();
        for command in commands {
            cmd_tx.send(command).unwrap();
        }
        drop(cmd_tx);

        run_logic_thread(cmd_rx, evt_tx, Box::new(camera.clone()), intent);
        evt_rx.into_iter().collect()
    }

    fn acquired(events: &[LogicEvent]) -> Vec<(u64, bool)> {
        events
            .iter()
            .map(|event| match event {
                LogicEvent::CameraAcquired { token, result } => (*token, result.is_ok()),
                other => panic!("unexpected event {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_acquisition_reports_its_token() {
        let camera = ExclusiveCamera::default();
        let mut manager = CameraManager::default();
        let request = manager.set_enabled(true).unwrap();

        let events = run(
            vec![LogicCommand::AcquireCamera(request)],
            &camera,
            manager.current_intent(),
        );

        assert_eq!(events.len(), 1);
        match &events[0] {
            LogicEvent::CameraAcquired { token, result } => {
                assert_eq!(*token, request.token);
                assert_eq!(result.as_ref().map(|s| s.id()).ok(), Some(9));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_failed_open_is_reported() {
        let camera = ExclusiveCamera::unplugged();
        let mut manager = CameraManager::default();
        let request = manager.set_enabled(true).unwrap();

        let events = run(
            vec![LogicCommand::AcquireCamera(request)],
            &camera,
            manager.current_intent(),
        );

        assert_eq!(acquired(&events), vec![(request.token, false)]);
    }

    #[test]
    fn test_outdated_requests_are_answered_without_opening() {
        let camera = ExclusiveCamera::default();
        let mut manager = CameraManager::default();
        let first = manager.set_enabled(true).unwrap();
        manager.set_enabled(false);
        let second = manager.set_enabled(true).unwrap();

        let events = run(
            vec![
                LogicCommand::AcquireCamera(first),
                LogicCommand::AcquireCamera(second),
            ],
            &camera,
            manager.current_intent(),
        );

        // One reply per request, in order; only the newest touched the device.
        assert_eq!(
            acquired(&events),
            vec![(first.token, false), (second.token, true)]
        );
        assert_eq!(camera.opened(), 1);
    }

    #[test]
    fn test_reenable_waits_for_previous_stream_and_ends_live() {
        let camera = ExclusiveCamera::default();
        let mut manager = CameraManager::default();
        let (cmd_tx, cmd_rx) = channel();
        let (evt_tx, evt_rx) = channel();

        let worker = {
            let camera = camera.clone();
            let intent = manager.current_intent();
            std::thread::spawn(move || {
                run_logic_thread(cmd_rx, evt_tx, Box::new(camera), intent)
            })
        };

        let first = manager.set_enabled(true).unwrap();
        cmd_tx.send(LogicCommand::AcquireCamera(first)).unwrap();

        // First stream is opened and on its way before the user flips back.
        while camera.opened() == 0 {
            std::thread::sleep(Duration::from_millis(5));
        }
        manager.set_enabled(false);
        let second = manager.set_enabled(true).unwrap();
        cmd_tx.send(LogicCommand::AcquireCamera(second)).unwrap();

        while manager.status() == CameraStatus::Starting {
            match evt_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                LogicEvent::CameraAcquired { token, result } => {
                    manager.complete(token, result);
                }
                other => panic!("unexpected event {:?}", other),
            }
        }

        assert_eq!(manager.status(), CameraStatus::Live);
        assert!(manager.error().is_none());
        assert_eq!(camera.held(), 1);
        assert_eq!(camera.peak(), 1);

        drop(manager);
        assert_eq!(camera.held(), 0);

        drop(cmd_tx);
        worker.join().unwrap();
    }

    #[test]
    fn test_missing_portraits_fail_individually() {
        let dir = tempfile::TempDir::new().unwrap();
        let portraits: Vec<(usize, PathBuf)> = (0..3)
            .map(|i| (i, dir.path().join(format!("{}.jpg", i))))
            .collect();

        let events = run(
            vec![LogicCommand::LoadPortraits {
                portraits,
                size: PortraitSize::default(),
            }],
            &ExclusiveCamera::default(),
            CurrentIntent::default(),
        );

        let failed: Vec<usize> = events
            .iter()
            .filter_map(|event| match event {
                LogicEvent::PortraitFailed { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(failed, vec![0, 1, 2]);
    }
}
