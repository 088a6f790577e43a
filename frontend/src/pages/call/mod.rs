//! Call Page
//!
//! Video tile and roster in the content area, control bar along the bottom.

mod components;
pub(crate) mod layout;
mod state;

pub use state::{CallState, PortraitSlot};

use crate::events::UiCommand;
use crate::models::{CallInfo, Participant};
use egui::{Frame, Margin};

/// Everything the call page reads, borrowed from the controller
pub struct CallView<'a> {
    pub call_info: &'a CallInfo,
    /// `HH:MM AM | code`
    pub clock: String,
    pub participants: &'a [Participant],
    pub mic_enabled: bool,
    pub camera_enabled: bool,
    pub camera_error: Option<&'a str>,
    pub state: &'a CallState,
}

pub struct Call;

impl Call {
    pub fn show(ctx: &egui::Context, view: &CallView) -> Option<UiCommand> {
        let mut command = None;

        egui::TopBottomPanel::bottom("control_bar")
            .frame(
                Frame::new()
                    .fill(components::PAGE_BG)
                    .inner_margin(Margin::symmetric(layout::BAR_MARGIN_X as i8, 10)),
            )
            .show(ctx, |ui| {
                command = components::render_controls(ui, view);
            });

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(components::PAGE_BG)
                    .inner_margin(Margin::same(layout::GAP as i8)),
            )
            .show(ctx, |ui| {
                let content = ui.available_rect_before_wrap();
                let (video_rect, roster_rect) = layout::split_content(content);

                components::render_video_tile(ui, video_rect, view);

                ui.scope_builder(egui::UiBuilder::new().max_rect(roster_rect), |ui| {
                    components::render_participant_grid(ui, view);
                });
            });

        command
    }
}
