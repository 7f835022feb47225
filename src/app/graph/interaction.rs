use eframe::egui::{self, Pos2, Rect, Ui};

use crate::scene::{pick, pointer_to_ndc};
use crate::social::EntityId;

use super::super::ViewModel;
use super::super::render_utils::to_glam;

impl ViewModel {
    pub(in crate::app) fn handle_scene_zoom(&mut self, ui: &Ui, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let zoom_factor = (1.0 - (scroll * 0.0018)).clamp(0.85, 1.15);
        self.camera.zoom_by(zoom_factor);
    }

    pub(in crate::app) fn handle_scene_orbit(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary) {
            self.camera.rotate_by_pixels(to_glam(response.drag_delta()));
        }
    }

    pub(in crate::app) fn entity_at(&self, rect: Rect, pointer: Pos2) -> Option<EntityId> {
        let ndc = pointer_to_ndc(
            to_glam(pointer.to_vec2()),
            to_glam(rect.min.to_vec2()),
            to_glam(rect.size()),
        )?;
        pick(ndc, &self.camera, &self.registry)
    }

    /// A click on an entity selects it; a click on empty space keeps the
    /// current selection.
    pub(in crate::app) fn handle_scene_click(&mut self, rect: Rect, response: &egui::Response) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };

        if let Some(id) = self.entity_at(rect, pointer) {
            self.set_selected(Some(id));
        }
    }
}
