//! UI Command Handler
//!
//! Dispatches UI commands to the domain handlers in `handlers/`.

use super::state::App;
use crate::events::UiCommand;
use tracing::debug;

impl App {
    /// Dispatches UI commands to appropriate handlers
    /// This is the main entry point for all UI actions
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        debug!("[UI] Handling command: {:?}", command);
        match command {
            UiCommand::ToggleMic => self.handle_toggle_mic(),
            UiCommand::ToggleCamera => self.handle_toggle_camera(),
        }
    }
}
