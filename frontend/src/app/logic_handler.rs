//! Handles events from the background logic thread.

use super::state::App;
use crate::events::LogicEvent;
use crate::pages::call::PortraitSlot;
use egui::TextureOptions;
use tracing::{debug, warn};

impl App {
    /// Processes events from the logic thread
    /// Updates application state based on background operations
    pub(super) fn handle_logic_event(&mut self, ctx: &egui::Context, event: LogicEvent) {
        match event {
            LogicEvent::CameraAcquired { token, result } => {
                self.handle_camera_acquired(token, result);
            }

            LogicEvent::PortraitLoaded {
                index,
                avatar,
                backdrop,
            } => {
                let slot = PortraitSlot::Ready {
                    avatar: ctx.load_texture(
                        format!("portrait_{}", index),
                        avatar,
                        TextureOptions::LINEAR,
                    ),
                    backdrop: ctx.load_texture(
                        format!("backdrop_{}", index),
                        backdrop,
                        TextureOptions::LINEAR,
                    ),
                };
                self.set_portrait(index, slot);
            }

            LogicEvent::PortraitFailed { index, reason } => {
                debug!("[PORTRAIT] Tile {} falls back to initial: {}", index, reason);
                self.set_portrait(index, PortraitSlot::Failed);
            }
        }
    }

    fn set_portrait(&mut self, index: usize, slot: PortraitSlot) {
        if !self.call_state.set_portrait(index, slot) {
            warn!("[PORTRAIT] Result for unknown tile {}", index);
            return;
        }

        if self.call_state.portraits_settled()
            && self.call_state.all_portraits_failed()
            && let Some(dir) = &self.config.portraits_dir
        {
            warn!("[PORTRAIT] No portraits found under {}", dir.display());
            self.show_warning(format!(
                "No portraits found in {}, showing initials",
                dir.display()
            ));
        }
    }
}
