//! Participant Grid Component
//!
//! One tile per roster entry: blurred portrait backdrop, round portrait and
//! name label. Entries whose portrait failed to load show their initial.

use super::video_placeholder::paint_name_badge;
use super::{MUTED_TEXT, PANEL_BG, PANEL_RADIUS, TILE_BG};
use crate::components::UserAvatar;
use crate::models::Participant;
use crate::pages::call::layout::{GAP, PARTICIPANT_TILE_HEIGHT, cover_uv, grid_columns};
use crate::pages::call::{CallView, PortraitSlot};
use egui::{Color32, Frame, Margin, Rect, RichText, Sense, Stroke, TextureHandle, pos2, vec2};

const AVATAR_SIZE: f32 = 48.0;
const AVATAR_BORDER: Stroke = Stroke {
    width: 2.0,
    color: Color32::from_rgb(0x9c, 0xa3, 0xaf),
};
const TILE_GAP: f32 = 8.0;

enum TileAvatar<'a> {
    Portrait {
        avatar: &'a TextureHandle,
        backdrop: &'a TextureHandle,
    },
    Initial(String),
    /// Still loading, plain tile
    Pending,
}

struct TileModel<'a> {
    name: &'a str,
    avatar: TileAvatar<'a>,
}

fn tile_models<'a>(view: &'a CallView<'a>) -> Vec<TileModel<'a>> {
    view.participants
        .iter()
        .enumerate()
        .map(|(index, participant)| TileModel {
            name: &participant.name,
            avatar: tile_avatar(participant, view.state.portrait(index)),
        })
        .collect()
}

fn tile_avatar<'a>(participant: &Participant, slot: Option<&'a PortraitSlot>) -> TileAvatar<'a> {
    match slot {
        Some(PortraitSlot::Ready { avatar, backdrop }) => TileAvatar::Portrait { avatar, backdrop },
        Some(PortraitSlot::Loading) => TileAvatar::Pending,
        Some(PortraitSlot::Failed) | None => TileAvatar::Initial(participant.initial()),
    }
}

fn heading(count: usize) -> String {
    format!("Participants ({})", count)
}

/// Renders the roster panel inside the current ui
pub fn render_participant_grid(ui: &mut egui::Ui, view: &CallView) {
    let tiles = tile_models(view);

    Frame::new()
        .fill(PANEL_BG)
        .corner_radius(PANEL_RADIUS)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());

            ui.label(
                RichText::new(heading(tiles.len()))
                    .size(14.0)
                    .color(MUTED_TEXT),
            );
            ui.add_space(GAP / 2.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let columns = grid_columns(ui.available_width());
                    let tile_width = (ui.available_width() - TILE_GAP * (columns - 1) as f32)
                        / columns as f32;

                    for row in tiles.chunks(columns) {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = TILE_GAP;
                            for tile in row {
                                let (rect, response) = ui.allocate_exact_size(
                                    vec2(tile_width, PARTICIPANT_TILE_HEIGHT),
                                    Sense::hover(),
                                );
                                paint_tile(ui, rect, tile);
                                response.on_hover_text(tile.name);
                            }
                        });
                        ui.add_space(TILE_GAP);
                    }
                });
        });
}

fn paint_tile(ui: &egui::Ui, rect: Rect, tile: &TileModel) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, TILE_BG);

    let avatar_rect = Rect::from_center_size(rect.center(), vec2(AVATAR_SIZE, AVATAR_SIZE));

    match &tile.avatar {
        TileAvatar::Portrait { avatar, backdrop } => {
            let uv = cover_uv(backdrop.size_vec2(), rect.size());
            painter.image(backdrop.id(), rect, uv, Color32::WHITE);
            painter.rect_filled(rect, 8.0, Color32::from_black_alpha(60));

            egui::Image::new((avatar.id(), avatar_rect.size()))
                .corner_radius(AVATAR_SIZE / 2.0)
                .paint_at(ui, avatar_rect);
            painter.circle_stroke(avatar_rect.center(), AVATAR_SIZE / 2.0, AVATAR_BORDER);
        }
        TileAvatar::Initial(initial) => {
            UserAvatar::new(AVATAR_SIZE / 2.0)
                .border(AVATAR_BORDER)
                .paint(&painter, avatar_rect.center(), initial);
        }
        TileAvatar::Pending => {}
    }

    paint_name_badge(
        &painter,
        pos2(rect.min.x + 6.0, rect.max.y - 6.0),
        tile.name,
        12.0,
        vec2(8.0, 2.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CallInfo, DEFAULT_ROSTER, roster_from_names};
    use crate::pages::call::CallState;

    fn roster() -> Vec<Participant> {
        let names: Vec<String> = DEFAULT_ROSTER.iter().map(|n| n.to_string()).collect();
        roster_from_names(&names)
    }

    fn view<'a>(
        info: &'a CallInfo,
        participants: &'a [Participant],
        state: &'a CallState,
    ) -> CallView<'a> {
        CallView {
            call_info: info,
            clock: String::new(),
            participants,
            mic_enabled: true,
            camera_enabled: false,
            camera_error: None,
            state,
        }
    }

    #[test]
    fn test_one_tile_per_participant_with_name() {
        let info = CallInfo::new("User", "abc");
        let participants = roster();
        let state = CallState::new(participants.len());

        let v = view(&info, &participants, &state);
        let tiles = tile_models(&v);

        assert_eq!(tiles.len(), 14);
        for (tile, participant) in tiles.iter().zip(&participants) {
            assert_eq!(tile.name, participant.name);
            assert!(matches!(tile.avatar, TileAvatar::Pending));
        }
    }

    #[test]
    fn test_failed_portraits_fall_back_to_initial() {
        let info = CallInfo::new("User", "abc");
        let participants = roster();
        let mut state = CallState::new(participants.len());
        state.set_portrait(1, PortraitSlot::Failed);
        state.set_portrait(13, PortraitSlot::Failed);

        let v = view(&info, &participants, &state);
        let tiles = tile_models(&v);

        assert!(matches!(&tiles[1].avatar, TileAvatar::Initial(i) if i == "J"));
        assert!(matches!(&tiles[13].avatar, TileAvatar::Initial(i) if i == "C"));
        assert!(matches!(tiles[0].avatar, TileAvatar::Pending));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let info = CallInfo::new("User", "abc");
        let participants = roster();
        let mut state = CallState::new(participants.len());
        state.fail_all_portraits();

        let v = view(&info, &participants, &state);
        let first: Vec<String> = initials(&tile_models(&v));
        let second: Vec<String> = initials(&tile_models(&v));

        assert_eq!(first, second);
        assert_eq!(first[0], "J");
        assert_eq!(first[2], "L");
    }

    fn initials(tiles: &[TileModel]) -> Vec<String> {
        tiles
            .iter()
            .map(|tile| match &tile.avatar {
                TileAvatar::Initial(initial) => initial.clone(),
                _ => String::new(),
            })
            .collect()
    }

    #[test]
    fn test_heading_counts_roster() {
        assert_eq!(heading(14), "Participants (14)");
    }
}
