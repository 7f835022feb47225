use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, vec2};

use crate::scene::EntitySummary;
use crate::social::EntityId;

use super::super::ViewModel;
use super::super::render_utils::{
    circle_visible, connector_color, draw_background, marker_color, shade, to_screen, with_alpha,
};

struct ProjectedMarker {
    id: EntityId,
    center: Pos2,
    radius: f32,
    depth: f32,
    color: Color32,
}

impl ViewModel {
    pub(in crate::app) fn draw_scene(&mut self, ui: &mut Ui) {
        if self.scene_dirty {
            self.rebuild_scene();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        draw_background(&painter, rect);

        self.camera.set_viewport(rect.width(), rect.height());
        self.handle_scene_zoom(ui, &response);
        self.handle_scene_orbit(&response);
        if self.camera.update() || response.dragged() {
            ui.ctx().request_repaint();
        }

        if self.registry.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No entities to show. Check the data source or the entity count.",
                FontId::proportional(14.0),
                Color32::from_gray(200),
            );
            return;
        }

        let view_projection = self.camera.view_projection();

        let mut markers = self
            .registry
            .entities()
            .filter_map(|entity| {
                let marker = entity.marker();
                let (pixel, depth) = self.camera.project(&view_projection, marker.center)?;
                Some(ProjectedMarker {
                    id: entity.id(),
                    center: to_screen(rect, pixel),
                    radius: self
                        .camera
                        .projected_radius(marker.radius, depth)
                        .clamp(1.5, 60.0),
                    depth,
                    color: marker_color(marker.style),
                })
            })
            .filter(|marker| circle_visible(rect, marker.center, marker.radius))
            .collect::<Vec<_>>();

        let (nearest, farthest) = markers.iter().fold((f32::MAX, f32::MIN), |(lo, hi), marker| {
            (lo.min(marker.depth), hi.max(marker.depth))
        });
        let depth_span = (farthest - nearest).max(f32::EPSILON);

        for connector in self.registry.connectors() {
            let Some((start, _)) = self.camera.project(&view_projection, connector.start) else {
                continue;
            };
            let Some((end, _)) = self.camera.project(&view_projection, connector.end) else {
                continue;
            };
            let touches_selection = self
                .selected
                .is_some_and(|id| connector.source == id || connector.target == id);
            let (width, alpha) = if touches_selection { (2.2_f32, 255_u8) } else { (1.0, 150) };
            painter.line_segment(
                [to_screen(rect, start), to_screen(rect, end)],
                Stroke::new(width, with_alpha(connector_color(connector.category), alpha)),
            );
        }

        markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let hovered = response
            .hover_pos()
            .and_then(|pointer| self.entity_at(rect, pointer));

        let selected_color = Color32::from_rgb(245, 206, 93);
        for marker in &markers {
            let depth = (marker.depth - nearest) / depth_span;
            let is_selected = self.selected == Some(marker.id);
            let is_hovered = hovered == Some(marker.id);

            let color = if is_hovered {
                Color32::from_rgb(255, 164, 101)
            } else {
                shade(marker.color, depth)
            };
            painter.circle_filled(marker.center, marker.radius, color);

            if is_selected {
                painter.circle_stroke(
                    marker.center,
                    marker.radius + 3.0,
                    Stroke::new(2.0, selected_color),
                );
            }
        }

        if let Some(panel_text) =
            hovered.and_then(|id| EntitySummary::hover_label(&self.registry, id))
        {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });

            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                panel_text,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        self.handle_scene_click(rect, &response);
    }
}
