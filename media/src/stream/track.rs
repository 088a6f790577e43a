use crate::video::RgbFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
}

/// `Ended` is terminal: a stopped track never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    Live,
    Ended,
}

/// One hardware channel inside a stream.
pub trait MediaTrack: Send {
    fn id(&self) -> u64;

    fn kind(&self) -> TrackKind;

    /// Human readable device name.
    fn label(&self) -> &str;

    fn state(&self) -> TrackState;

    /// Releases the underlying hardware. Calling it again is a no-op.
    fn stop(&mut self);

    /// Most recent frame not yet handed out, if any. Video tracks only.
    fn take_latest_frame(&self) -> Option<RgbFrame> {
        None
    }

    fn is_live(&self) -> bool {
        self.state() == TrackState::Live
    }
}
