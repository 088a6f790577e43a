//! Call State Management
//!
//! GPU textures owned by the call page: the local camera frame and one
//! portrait slot per roster entry.

use egui::TextureHandle;

/// Load state of one roster portrait
pub enum PortraitSlot {
    Loading,
    Ready {
        avatar: TextureHandle,
        backdrop: TextureHandle,
    },
    /// Tile shows the participant's initial instead
    Failed,
}

impl PortraitSlot {
    fn is_settled(&self) -> bool {
        !matches!(self, PortraitSlot::Loading)
    }
}

pub struct CallState {
    pub local_texture: Option<TextureHandle>,
    portraits: Vec<PortraitSlot>,
}

impl CallState {
    /// Creates state with every portrait still loading
    pub fn new(participants: usize) -> Self {
        Self {
            local_texture: None,
            portraits: (0..participants).map(|_| PortraitSlot::Loading).collect(),
        }
    }

    pub fn portrait(&self, index: usize) -> Option<&PortraitSlot> {
        self.portraits.get(index)
    }

    /// Returns false when `index` is outside the roster.
    pub fn set_portrait(&mut self, index: usize, slot: PortraitSlot) -> bool {
        match self.portraits.get_mut(index) {
            Some(current) => {
                *current = slot;
                true
            }
            None => false,
        }
    }

    pub fn fail_all_portraits(&mut self) {
        for slot in &mut self.portraits {
            *slot = PortraitSlot::Failed;
        }
    }

    pub fn portraits_settled(&self) -> bool {
        self.portraits.iter().all(PortraitSlot::is_settled)
    }

    pub fn all_portraits_failed(&self) -> bool {
        !self.portraits.is_empty()
            && self
                .portraits
                .iter()
                .all(|slot| matches!(slot, PortraitSlot::Failed))
    }
}
