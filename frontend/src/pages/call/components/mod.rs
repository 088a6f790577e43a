//! Call UI Components
//!
//! This module contains the UI components of the call page.
//! Each component is in its own file for better organization.

mod controls;
mod participant_grid;
mod video_placeholder;
mod video_tile;

pub use controls::render_controls;
pub use participant_grid::render_participant_grid;
pub use video_tile::render_video_tile;

use egui::Color32;

pub(super) const PAGE_BG: Color32 = Color32::from_rgb(0x20, 0x21, 0x24);
const PANEL_BG: Color32 = Color32::from_rgb(0x29, 0x2a, 0x2d);
const TILE_BG: Color32 = Color32::from_rgb(0x31, 0x32, 0x35);
const MUTED_TEXT: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
const SUBTLE_TEXT: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
const PANEL_RADIUS: f32 = 12.0;
