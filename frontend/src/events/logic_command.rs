use media::{AcquireRequest, PortraitSize};
use std::path::PathBuf;

/// Logic commands sent from UI thread to Logic thread
#[derive(Debug)]
pub enum LogicCommand {
    /// Open the camera; the result comes back tagged with the request's token
    AcquireCamera(AcquireRequest),

    /// Decode roster portraits, one event per entry
    LoadPortraits {
        portraits: Vec<(usize, PathBuf)>,
        size: PortraitSize,
    },
}
