//! Call Control Bar
//!
//! Clock and meeting code on the left, call controls in the middle, utility
//! buttons on the right. Only the microphone and camera toggles act; the rest
//! are decorative.

use super::MUTED_TEXT;
use crate::components::{Button, ButtonVariant};
use crate::events::UiCommand;
use crate::pages::call::CallView;
use crate::pages::call::layout::{BAR_MARGIN_X, is_wide};
use egui::{Color32, RichText, Vec2};

const OFF_ICON: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);
const SEPARATOR: Color32 = Color32::from_rgb(0x5f, 0x63, 0x68);

// Width of the center group, used to center it like a flex row would
const CENTER_GROUP_WIDTH: f32 = 8.0 * 46.0 + 9.0 * 10.0 + 20.0;

/// One button in the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ControlSpec {
    pub icon: &'static str,
    pub hover: &'static str,
    pub variant: ButtonVariant,
    pub icon_color: Color32,
    pub command: Option<UiCommand>,
}

impl ControlSpec {
    const fn decorative(icon: &'static str, hover: &'static str, variant: ButtonVariant) -> Self {
        Self {
            icon,
            hover,
            variant,
            icon_color: Color32::WHITE,
            command: None,
        }
    }
}

const CALL_ACTIONS: [ControlSpec; 5] = [
    ControlSpec::decorative("CC", "Turn on captions", ButtonVariant::On),
    ControlSpec::decorative("✋", "Raise hand", ButtonVariant::On),
    ControlSpec::decorative("🖥", "Present now", ButtonVariant::On),
    ControlSpec::decorative("😊", "Emoji reactions", ButtonVariant::On),
    ControlSpec::decorative("☰", "More options", ButtonVariant::On),
];

const LEAVE_CALL: ControlSpec =
    ControlSpec::decorative("📞", "Leave call", ButtonVariant::Danger);

const UTILITIES: [ControlSpec; 4] = [
    ControlSpec::decorative("ℹ", "Meeting details", ButtonVariant::Utility),
    ControlSpec::decorative("👥", "Show everyone", ButtonVariant::Utility),
    ControlSpec::decorative("💬", "Open chat", ButtonVariant::Utility),
    ControlSpec::decorative("✨", "Activities", ButtonVariant::Utility),
];

/// Gets the button config based on microphone state
fn microphone_button_config(mic_on: bool) -> ControlSpec {
    if mic_on {
        ControlSpec {
            icon: "🎤",
            hover: "Mute microphone",
            variant: ButtonVariant::On,
            icon_color: Color32::WHITE,
            command: Some(UiCommand::ToggleMic),
        }
    } else {
        ControlSpec {
            icon: "🔇",
            hover: "Unmute microphone",
            variant: ButtonVariant::Off,
            icon_color: OFF_ICON,
            command: Some(UiCommand::ToggleMic),
        }
    }
}

/// Gets the button config based on camera intent
fn camera_button_config(camera_on: bool) -> ControlSpec {
    if camera_on {
        ControlSpec {
            icon: "🎥",
            hover: "Turn off camera",
            variant: ButtonVariant::On,
            icon_color: Color32::WHITE,
            command: Some(UiCommand::ToggleCamera),
        }
    } else {
        ControlSpec {
            icon: "🎥",
            hover: "Turn on camera",
            variant: ButtonVariant::Off,
            icon_color: OFF_ICON,
            command: Some(UiCommand::ToggleCamera),
        }
    }
}

/// Renders the control bar and returns the command of a clicked toggle
pub fn render_controls(ui: &mut egui::Ui, view: &CallView) -> Option<UiCommand> {
    let mut command = None;
    let wide = is_wide(ui.available_width() + 2.0 * BAR_MARGIN_X);

    ui.horizontal_centered(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;
        let row_start = ui.cursor().min.x;
        let row_width = ui.available_width();

        // Left: time and meeting code (hidden on narrow windows)
        if wide {
            ui.label(RichText::new(&view.clock).size(14.0).color(MUTED_TEXT));
        }

        // Center: main controls
        let used = ui.cursor().min.x - row_start;
        let lead = ((row_width - CENTER_GROUP_WIDTH) / 2.0 - used).max(0.0);
        ui.add_space(lead);

        let toggles = [
            microphone_button_config(view.mic_enabled),
            camera_button_config(view.camera_enabled),
        ];
        for spec in toggles.iter().chain(CALL_ACTIONS.iter()) {
            if let Some(cmd) = render_control(ui, spec) {
                command = Some(cmd);
            }
        }

        render_separator(ui);
        render_control(ui, &LEAVE_CALL);

        // Right: utilities
        if wide {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for spec in UTILITIES.iter().rev() {
                    render_control(ui, spec);
                }
            });
        }
    });

    command
}

/// Renders one button; returns its command when clicked
fn render_control(ui: &mut egui::Ui, spec: &ControlSpec) -> Option<UiCommand> {
    let clicked = Button::new(spec.icon)
        .variant(spec.variant)
        .text_color(spec.icon_color)
        .hover_text(spec.hover)
        .show(ui)
        .clicked();

    if clicked { spec.command } else { None }
}

fn render_separator(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(2.0, 32.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, SEPARATOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microphone_button_config() {
        let on = microphone_button_config(true);
        assert_eq!(on.hover, "Mute microphone");
        assert_eq!(on.variant, ButtonVariant::On);

        let off = microphone_button_config(false);
        assert_eq!(off.hover, "Unmute microphone");
        assert_eq!(off.variant, ButtonVariant::Off);
        assert_eq!(off.command, Some(UiCommand::ToggleMic));
    }

    #[test]
    fn test_camera_button_config() {
        let on = camera_button_config(true);
        assert_eq!(on.hover, "Turn off camera");
        assert_eq!(on.command, Some(UiCommand::ToggleCamera));

        let off = camera_button_config(false);
        assert_eq!(off.hover, "Turn on camera");
        assert_eq!(off.variant, ButtonVariant::Off);
        assert_eq!(off.icon_color, OFF_ICON);
    }

    #[test]
    fn test_decorative_buttons_have_no_command() {
        assert!(
            CALL_ACTIONS
                .iter()
                .chain(UTILITIES.iter())
                .chain(std::iter::once(&LEAVE_CALL))
                .all(|spec| spec.command.is_none())
        );
    }

    #[test]
    fn test_button_labels() {
        let actions: Vec<&str> = CALL_ACTIONS.iter().map(|spec| spec.hover).collect();
        assert_eq!(
            actions,
            vec![
                "Turn on captions",
                "Raise hand",
                "Present now",
                "Emoji reactions",
                "More options"
            ]
        );

        let utilities: Vec<&str> = UTILITIES.iter().map(|spec| spec.hover).collect();
        assert_eq!(
            utilities,
            vec!["Meeting details", "Show everyone", "Open chat", "Activities"]
        );

        assert_eq!(LEAVE_CALL.variant, ButtonVariant::Danger);
    }
}
