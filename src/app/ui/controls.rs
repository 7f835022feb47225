use eframe::egui::{self, RichText, Ui};

use crate::scene::{ConnectorCategory, LayoutStrategy, MarkerStyle};

use super::super::ViewModel;
use super::super::render_utils::{connector_color, marker_color};

const LAYOUT_OPTIONS: [&str; 2] = ["0", "1"];

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Layout");
        ui.add_space(6.0);

        let radius = self.settings.radius;
        let mut selector_value = self.settings.layout.selector_value();
        egui::ComboBox::from_id_salt("layout_switch")
            .selected_text(self.settings.layout.label())
            .show_ui(ui, |ui| {
                for value in LAYOUT_OPTIONS {
                    let label = LayoutStrategy::from_selector_value(value, radius).label();
                    ui.selectable_value(&mut selector_value, value, label);
                }
            });
        self.set_layout(LayoutStrategy::from_selector_value(selector_value, radius));

        if ui
            .button("Re-run layout")
            .on_hover_text("Clear the scene and place every entity again")
            .clicked()
        {
            self.scene_dirty = true;
        }

        ui.separator();
        ui.label(RichText::new("Entities in scene").strong());
        let max_count = self.dataset.entities.len().max(self.settings.count).max(1);
        let mut count = self.settings.count;
        let response = ui.add(egui::Slider::new(&mut count, 0..=max_count).text("entities"));
        if response.changed() {
            self.set_count(count);
        }
        ui.small("Relationships are drawn only when both ends are in the scene.");

        ui.separator();
        ui.label(RichText::new("Legend").strong());
        Self::legend_row(ui, marker_color(MarkerStyle::User), "User");
        Self::legend_row(ui, marker_color(MarkerStyle::Other), "Other entity");
        Self::legend_row(
            ui,
            connector_color(ConnectorCategory::Subscribed),
            "Subscribed",
        );
        Self::legend_row(ui, connector_color(ConnectorCategory::Other), "Other relationship");

        ui.separator();
        ui.label(format!("Camera distance: {:.1}", self.camera.distance()));
        ui.small("Drag to orbit, scroll to zoom, click an entity to inspect it.");
    }

    fn legend_row(ui: &mut Ui, color: egui::Color32, label: &str) {
        ui.horizontal(|ui| {
            let (rect, _response) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 5.0, color);
            ui.label(label);
        });
    }
}
