//! Video Placeholder Component
//!
//! Text helpers painted on top of video and roster tiles.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, vec2};

/// Centered grey message over an empty tile
pub(super) fn paint_placeholder(painter: &Painter, rect: Rect, text: &str) {
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(20.0),
        Color32::GRAY,
    );
}

/// Name label on a translucent black box, anchored at its bottom-left corner
pub(super) fn paint_name_badge(
    painter: &Painter,
    bottom_left: Pos2,
    text: &str,
    font_size: f32,
    padding: egui::Vec2,
) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        FontId::proportional(font_size),
        Color32::WHITE,
    );

    let size = galley.size() + padding * 2.0;
    let badge = Rect::from_min_size(bottom_left - vec2(0.0, size.y), size);

    painter.rect_filled(badge, 4.0, Color32::from_black_alpha(170));
    painter.galley(badge.min + padding, galley, Color32::WHITE);
}
