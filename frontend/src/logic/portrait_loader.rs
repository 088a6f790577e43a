//! Portrait Loading
//!
//! Decodes roster portraits one by one and reports each result separately,
//! so tiles fill in as their image becomes ready.

use super::utils::rgb_to_color_image;
use crate::events::LogicEvent;
use media::{PortraitSize, load_portrait};
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

pub(super) fn handle_load_portraits(
    portraits: Vec<(usize, PathBuf)>,
    size: PortraitSize,
    evt_tx: &Sender<LogicEvent>,
) {
    debug!("[PORTRAIT] Loading {} portraits", portraits.len());

    for (index, path) in portraits {
        let event = match load_portrait(&path, size) {
            Ok(portrait) => LogicEvent::PortraitLoaded {
                index,
                avatar: rgb_to_color_image(&portrait.avatar),
                backdrop: rgb_to_color_image(&portrait.backdrop),
            },
            Err(e) => {
                warn!("[PORTRAIT] {} unavailable: {}", path.display(), e);
                LogicEvent::PortraitFailed {
                    index,
                    reason: e.to_string(),
                }
            }
        };

        if evt_tx.send(event).is_err() {
            return;
        }
    }
}
