use eframe::egui::{self, Grid, RichText, Ui};

use crate::scene::EntitySummary;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Entity Details");
        ui.add_space(6.0);

        if self.selected.is_none() {
            ui.label("Click an entity in the scene to inspect it.");
            return;
        }

        let Some(summary) = self.selected_summary().cloned() else {
            ui.label("Selected entity is no longer in the scene.");
            return;
        };

        Self::draw_summary(ui, &summary);

        ui.add_space(8.0);
        if ui.button("Clear selection").clicked() {
            self.set_selected(None);
        }
    }

    fn draw_summary(ui: &mut Ui, summary: &EntitySummary) {
        Grid::new("entity_attributes")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in summary.attribute_rows() {
                    ui.label(RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });

        ui.separator();
        ui.label(RichText::new(format!("Relationships ({})", summary.relationships.len())).strong());
        if summary.relationships.is_empty() {
            ui.label("No relationships within the current scene.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("relationships_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for row in &summary.relationships {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{}:", row.relationship_type)).strong());
                        ui.label(row.target_name.as_str());
                    });
                }
            });
    }
}
