use super::track::{MediaTrack, TrackKind};
use crate::video::RgbFrame;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const RELEASE_POLL: Duration = Duration::from_millis(10);

/// Handle owning a set of capture tracks.
pub struct MediaStream {
    id: u64,
    tracks: Vec<Box<dyn MediaTrack>>,
    released: Arc<AtomicBool>,
}

/// Observes, from any thread, whether a stream has given its hardware back.
///
/// Lets whoever hands a stream away find out when the new owner has stopped
/// or dropped it.
#[derive(Debug, Clone)]
pub struct ReleaseWatch {
    released: Arc<AtomicBool>,
}

impl ReleaseWatch {
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Blocks until the stream is released or `timeout` passes.
    /// Returns whether it was released.
    pub fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.is_released() {
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(RELEASE_POLL);
        }
        true
    }
}

impl MediaStream {
    pub fn new(id: u64, tracks: Vec<Box<dyn MediaTrack>>) -> Self {
        Self {
            id,
            tracks,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn release_watch(&self) -> ReleaseWatch {
        ReleaseWatch {
            released: Arc::clone(&self.released),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn tracks(&self) -> &[Box<dyn MediaTrack>] {
        &self.tracks
    }

    pub fn video_tracks(&self) -> impl Iterator<Item = &dyn MediaTrack> {
        self.tracks
            .iter()
            .map(|track| track.as_ref())
            .filter(|track| track.kind() == TrackKind::Video)
    }

    /// True while at least one track still holds hardware.
    pub fn is_active(&self) -> bool {
        self.tracks.iter().any(|track| track.is_live())
    }

    /// Stops every track. Returns how many were live.
    pub fn stop_all(&mut self) -> usize {
        let mut stopped = 0;
        for track in &mut self.tracks {
            if track.is_live() {
                debug!(
                    "[STREAM] Stopping {:?} track {} ({}) of stream {}",
                    track.kind(),
                    track.id(),
                    track.label(),
                    self.id
                );
                track.stop();
                stopped += 1;
            }
        }
        self.released.store(true, Ordering::Release);
        stopped
    }

    /// Newest frame from the first live video track.
    pub fn take_latest_frame(&self) -> Option<RgbFrame> {
        self.video_tracks()
            .filter(|track| track.is_live())
            .find_map(|track| track.take_latest_frame())
    }
}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("id", &self.id)
            .field("tracks", &self.tracks.len())
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for MediaStream {
    fn drop(&mut self) {
        if self.is_active() {
            warn!(
                "[STREAM] Stream {} dropped with live tracks, stopping them",
                self.id
            );
        }
        self.stop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::track::TrackState;
    use std::sync::atomic::AtomicUsize;

    struct CountingTrack {
        kind: TrackKind,
        live: bool,
        stops: Arc<AtomicUsize>,
    }

    impl MediaTrack for CountingTrack {
        fn id(&self) -> u64 {
            7
        }

        fn kind(&self) -> TrackKind {
            self.kind
        }

        fn label(&self) -> &str {
            "counting"
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
                self.stops.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn take_latest_frame(&self) -> Option<RgbFrame> {
            (self.kind == TrackKind::Video).then(|| RgbFrame::solid(1, 1, [1, 2, 3]))
        }
    }

    fn stream_with(kinds: &[TrackKind], stops: &Arc<AtomicUsize>) -> MediaStream {
        let tracks = kinds
            .iter()
            .map(|&kind| {
                Box::new(CountingTrack {
                    kind,
                    live: true,
                    stops: Arc::clone(stops),
                }) as Box<dyn MediaTrack>
            })
            .collect();
        MediaStream::new(1, tracks)
    }

    #[test]
    fn test_stop_all_stops_every_track_once() {
        let stops = Arc::new(AtomicUsize::new(0));
        let mut stream = stream_with(&[TrackKind::Video, TrackKind::Audio], &stops);

        assert_eq!(stream.stop_all(), 2);
        assert_eq!(stream.stop_all(), 0);
        assert!(!stream.is_active());
        assert_eq!(stops.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_stops_live_tracks() {
        let stops = Arc::new(AtomicUsize::new(0));
        drop(stream_with(&[TrackKind::Video], &stops));
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_watch_follows_stop_and_drop() {
        let stops = Arc::new(AtomicUsize::new(0));
        let mut stopped = stream_with(&[TrackKind::Video], &stops);
        let dropped = stream_with(&[TrackKind::Video], &stops);
        let stop_watch = stopped.release_watch();
        let drop_watch = dropped.release_watch();

        assert!(!stop_watch.is_released());
        assert!(!drop_watch.wait(Duration::from_millis(20)));

        stopped.stop_all();
        drop(dropped);

        assert!(stop_watch.is_released());
        assert!(drop_watch.wait(Duration::from_millis(20)));
    }

    #[test]
    fn test_frames_come_from_live_video_tracks_only() {
        let stops = Arc::new(AtomicUsize::new(0));
        let mut stream = stream_with(&[TrackKind::Audio, TrackKind::Video], &stops);

        assert_eq!(stream.video_tracks().count(), 1);
        assert!(stream.take_latest_frame().is_some());

        stream.stop_all();
        assert!(stream.take_latest_frame().is_none());
    }
}
