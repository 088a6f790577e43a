//! Call page geometry.

use egui::{Rect, Vec2, pos2, vec2};

/// From this window width on the video tile and the roster sit side by side.
pub const WIDE_BREAKPOINT: f32 = 768.0;

/// The roster grid switches to two columns at this panel width.
pub const GRID_TWO_COLUMN_MIN: f32 = 400.0;

/// Content panel inset from the window edges.
pub const GAP: f32 = 12.0;

/// Horizontal inset of the control bar.
pub const BAR_MARGIN_X: f32 = 16.0;

/// Height of a roster tile.
pub const PARTICIPANT_TILE_HEIGHT: f32 = 112.0;

const MIN_ROSTER_HEIGHT: f32 = 240.0;

pub fn is_wide(window_width: f32) -> bool {
    window_width >= WIDE_BREAKPOINT
}

/// Splits the content area into the video tile and the roster panel.
/// `area` spans the window width minus [`GAP`] on each side.
///
/// Wide: 3:1 columns. Narrow: 16:9 video on top, roster below.
pub fn split_content(area: Rect) -> (Rect, Rect) {
    if is_wide(area.width() + 2.0 * GAP) {
        let video_width = (area.width() - GAP) * 0.75;
        let video = Rect::from_min_size(area.min, vec2(video_width, area.height()));
        let roster = Rect::from_min_max(pos2(video.max.x + GAP, area.min.y), area.max);
        (video, roster)
    } else {
        let video_height = (area.width() * 9.0 / 16.0)
            .min(area.height() - MIN_ROSTER_HEIGHT - GAP)
            .max(0.0);
        let video = Rect::from_min_size(area.min, vec2(area.width(), video_height));
        let roster = Rect::from_min_max(pos2(area.min.x, video.max.y + GAP), area.max);
        (video, roster)
    }
}

pub fn grid_columns(panel_width: f32) -> usize {
    if panel_width >= GRID_TWO_COLUMN_MIN { 2 } else { 1 }
}

/// Texture coordinates that crop an `image` to fill `target` without
/// distortion, keeping the center.
pub fn cover_uv(image: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let image_ratio = image.x / image.y;
    let target_ratio = target.x / target.y;

    if image_ratio > target_ratio {
        let visible = target_ratio / image_ratio;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
    } else {
        let visible = image_ratio / target_ratio;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: f32, height: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(width, height))
    }

    #[test]
    fn test_wide_layout_is_three_to_one() {
        let (video, roster) = split_content(area(1212.0, 600.0));

        assert_eq!(video.width(), 900.0);
        assert_eq!(roster.width(), 300.0);
        assert_eq!(video.height(), roster.height());
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let (video, roster) = split_content(area(640.0, 900.0));

        assert_eq!(video.width(), 640.0);
        assert_eq!(video.height(), 360.0);
        assert_eq!(roster.min.y, 372.0);
        assert_eq!(roster.width(), 640.0);
    }

    #[test]
    fn test_narrow_layout_keeps_room_for_roster() {
        let (video, roster) = split_content(area(700.0, 500.0));
        assert!(roster.height() >= 240.0);
        assert!(video.height() < 700.0 * 9.0 / 16.0);
    }

    #[test]
    fn test_breakpoint_follows_window_width() {
        let at_breakpoint = WIDE_BREAKPOINT - 2.0 * GAP;
        let (video, _) = split_content(area(at_breakpoint, 600.0));
        assert!(video.width() < at_breakpoint);

        let (video, _) = split_content(area(at_breakpoint - 1.0, 600.0));
        assert_eq!(video.width(), at_breakpoint - 1.0);
    }

    #[test]
    fn test_window_just_above_breakpoint_is_side_by_side() {
        // 780 px window, content inset by the gap on both sides
        let (video, roster) = split_content(area(780.0 - 2.0 * GAP, 600.0));
        assert_eq!(video.min.y, roster.min.y);
        assert!(roster.min.x > video.max.x);
    }

    #[test]
    fn test_is_wide() {
        assert!(is_wide(768.0));
        assert!(!is_wide(767.0));
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(300.0), 1);
        assert_eq!(grid_columns(399.9), 1);
        assert_eq!(grid_columns(400.0), 2);
    }

    #[test]
    fn test_cover_uv_crops_wide_image_horizontally() {
        let uv = cover_uv(vec2(1600.0, 900.0), vec2(900.0, 900.0));
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
        assert!((uv.width() - 0.5625).abs() < 1e-5);
        assert!((uv.center().x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_cover_uv_crops_tall_image_vertically() {
        let uv = cover_uv(vec2(100.0, 200.0), vec2(200.0, 100.0));
        assert_eq!(uv.min.x, 0.0);
        assert!((uv.height() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_cover_uv_degenerate_sizes() {
        let uv = cover_uv(vec2(0.0, 0.0), vec2(10.0, 10.0));
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }
}
