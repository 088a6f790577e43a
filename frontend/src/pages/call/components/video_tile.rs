//! Local Video Tile
//!
//! Live camera frame, the "starting" placeholder, or the camera-off avatar,
//! with the error overlay on top when the last acquisition failed.

use super::video_placeholder::{paint_name_badge, paint_placeholder};
use super::{MUTED_TEXT, PANEL_BG, PANEL_RADIUS, SUBTLE_TEXT};
use crate::components::UserAvatar;
use crate::pages::call::CallView;
use crate::pages::call::layout::cover_uv;
use egui::{Align2, Color32, FontId, Painter, Rect, TextureHandle, pos2, vec2};

const ALERT_YELLOW: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
const AVATAR_FILL: Color32 = Color32::from_rgb(0x3c, 0x40, 0x43);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileBody {
    /// Camera on, no frame yet
    Starting,
    Live,
    /// `caption` shows "Camera is off"; hidden while an error is displayed
    Off { caption: bool },
}

struct VideoTileModel<'a> {
    body: TileBody,
    texture: Option<&'a TextureHandle>,
    badge: Option<String>,
    error: Option<&'a str>,
}

fn video_tile_model<'a>(view: &'a CallView<'a>) -> VideoTileModel<'a> {
    let showing_video = view.camera_enabled && view.camera_error.is_none();
    let texture = view.state.local_texture.as_ref();

    let body = match (showing_video, texture) {
        (true, Some(_)) => TileBody::Live,
        (true, None) => TileBody::Starting,
        (false, _) => TileBody::Off {
            caption: view.camera_error.is_none(),
        },
    };

    VideoTileModel {
        body,
        texture: texture.filter(|_| body == TileBody::Live),
        badge: showing_video.then(|| format!("{} (You)", view.call_info.user_name)),
        error: view.camera_error,
    }
}

/// Paints the local video tile into `rect`
pub fn render_video_tile(ui: &mut egui::Ui, rect: Rect, view: &CallView) {
    let model = video_tile_model(view);
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, PANEL_RADIUS, PANEL_BG);

    match (model.body, model.texture) {
        (TileBody::Live, Some(texture)) => {
            let uv = cover_uv(texture.size_vec2(), rect.size());
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        (TileBody::Off { caption }, _) => {
            paint_camera_off(&painter, rect, &view.call_info.user_name, caption);
        }
        _ => paint_placeholder(&painter, rect, "Camera Starting..."),
    }

    if let Some(badge) = &model.badge {
        paint_name_badge(
            &painter,
            pos2(rect.min.x + 12.0, rect.max.y - 12.0),
            badge,
            14.0,
            vec2(10.0, 6.0),
        );
    }

    if let Some(message) = model.error {
        paint_error_overlay(&painter, rect, message);
    }
}

fn paint_camera_off(painter: &Painter, rect: Rect, user_name: &str, caption: bool) {
    let radius = (rect.height() * 0.15).clamp(32.0, 64.0);
    let center = rect.center() - vec2(0.0, radius * 0.5);

    UserAvatar::new(radius)
        .colors(AVATAR_FILL, SUBTLE_TEXT)
        .paint(painter, center, "👤");

    let name_pos = pos2(center.x, center.y + radius + 20.0);
    painter.text(
        name_pos,
        Align2::CENTER_CENTER,
        user_name,
        FontId::proportional(18.0),
        MUTED_TEXT,
    );

    if caption {
        painter.text(
            name_pos + vec2(0.0, 24.0),
            Align2::CENTER_CENTER,
            "Camera is off",
            FontId::proportional(14.0),
            SUBTLE_TEXT,
        );
    }
}

fn paint_error_overlay(painter: &Painter, rect: Rect, message: &str) {
    painter.rect_filled(rect, PANEL_RADIUS, Color32::from_black_alpha(190));

    let center = rect.center();
    painter.text(
        center - vec2(0.0, 56.0),
        Align2::CENTER_CENTER,
        "⚠",
        FontId::proportional(56.0),
        ALERT_YELLOW,
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        "Camera Error",
        FontId::proportional(20.0),
        Color32::WHITE,
    );

    let wrap_width = (rect.width() - 32.0).max(80.0);
    let galley = painter.layout(
        message.to_string(),
        FontId::proportional(14.0),
        MUTED_TEXT,
        wrap_width,
    );
    let top_left = pos2(center.x - galley.size().x / 2.0, center.y + 20.0);
    painter.galley(top_left, galley, MUTED_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CallInfo;
    use crate::pages::call::CallState;

    fn view<'a>(
        info: &'a CallInfo,
        state: &'a CallState,
        camera_enabled: bool,
        camera_error: Option<&'a str>,
    ) -> CallView<'a> {
        CallView {
            call_info: info,
            clock: String::new(),
            participants: &[],
            mic_enabled: true,
            camera_enabled,
            camera_error,
            state,
        }
    }

    #[test]
    fn test_enabled_without_frame_is_starting_with_badge() {
        let info = CallInfo::new("User", "abc");
        let state = CallState::new(0);
        let v = view(&info, &state, true, None);

        let model = video_tile_model(&v);

        assert_eq!(model.body, TileBody::Starting);
        assert_eq!(model.badge.as_deref(), Some("User (You)"));
        assert!(model.error.is_none());
    }

    #[test]
    fn test_disabled_shows_caption() {
        let info = CallInfo::new("User", "abc");
        let state = CallState::new(0);
        let v = view(&info, &state, false, None);

        let model = video_tile_model(&v);

        assert_eq!(model.body, TileBody::Off { caption: true });
        assert!(model.badge.is_none());
    }

    #[test]
    fn test_error_hides_caption_and_badge() {
        let info = CallInfo::new("User", "abc");
        let state = CallState::new(0);
        let v = view(&info, &state, false, Some("Camera not available"));

        let model = video_tile_model(&v);

        assert_eq!(model.body, TileBody::Off { caption: false });
        assert!(model.badge.is_none());
        assert_eq!(model.error, Some("Camera not available"));
    }
}
