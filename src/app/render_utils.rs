use eframe::egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::scene::{ConnectorCategory, MarkerStyle};

pub(super) fn marker_color(style: MarkerStyle) -> Color32 {
    match style {
        MarkerStyle::User => Color32::from_rgb(0x1f, 0x78, 0xb4),
        MarkerStyle::Other => Color32::from_rgb(0x33, 0xa0, 0x2c),
    }
}

pub(super) fn connector_color(category: ConnectorCategory) -> Color32 {
    match category {
        ConnectorCategory::Subscribed => Color32::from_rgb(0xff, 0x00, 0x00),
        ConnectorCategory::Other => Color32::from_rgb(0x00, 0xff, 0x00),
    }
}

/// Darkens `color` with distance; `depth` is 0 at the nearest point and 1 at
/// the farthest.
pub(super) fn shade(color: Color32, depth: f32) -> Color32 {
    let light = 1.0 - depth.clamp(0.0, 1.0) * 0.55;
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * light) as u8,
        (color.g() as f32 * light) as u8,
        (color.b() as f32 * light) as u8,
        color.a(),
    )
}

pub(super) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(12, 14, 18));
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn to_glam(value: Vec2) -> glam::Vec2 {
    glam::Vec2::new(value.x, value.y)
}

pub(super) fn to_screen(rect: Rect, pixel: glam::Vec2) -> Pos2 {
    rect.min + Vec2::new(pixel.x, pixel.y)
}
