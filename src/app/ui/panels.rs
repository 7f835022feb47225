use eframe::egui::{self, Align, Context, Layout};
use tracing::info;

use crate::scene::{EntitySummary, LayoutStrategy, OrbitCamera, SceneRegistry};
use crate::social::{DataSource, Dataset, EntityId};

use super::super::{SummaryCache, ViewModel, ViewSettings};

impl ViewModel {
    pub(in crate::app) fn new(dataset: Dataset, settings: ViewSettings) -> Self {
        Self {
            dataset,
            registry: SceneRegistry::new(),
            camera: OrbitCamera::new(),
            settings,
            scene_dirty: true,
            selected: None,
            summary_cache: None,
        }
    }

    /// Fresh model for a reloaded dataset that keeps layout, count and camera.
    pub(in crate::app) fn reloaded(&self, dataset: Dataset) -> Self {
        let mut model = Self::new(dataset, self.settings);
        model.camera = self.camera.clone();
        model.selected = self.selected;
        model
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &DataSource,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        if self.scene_dirty {
            self.rebuild_scene();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("social-graph-3d");
                    ui.separator();
                    ui.label(format!("source: {}", source.describe()));
                    ui.label(format!("entities loaded: {}", self.dataset.entities.len()));
                    ui.label(format!(
                        "relationships loaded: {}",
                        self.dataset.relationships.len()
                    ));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload data"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.scene_stats_text());
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading social graph...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_scene(ui);
            }
        });
    }

    pub(in crate::app) fn rebuild_scene(&mut self) {
        self.registry.rebuild(
            self.settings.layout,
            &self.dataset,
            self.settings.count,
            &mut rand::thread_rng(),
        );
        self.scene_dirty = false;

        if let Some(selected) = self.selected
            && !self.registry.contains(selected)
        {
            self.selected = None;
        }

        info!(
            layout = self.settings.layout.label(),
            entities = self.registry.len(),
            connectors = self.registry.connectors().len(),
            "scene ready"
        );
    }

    pub(in crate::app) fn set_layout(&mut self, layout: LayoutStrategy) {
        if self.settings.layout != layout {
            self.settings.layout = layout;
            self.scene_dirty = true;
        }
    }

    pub(in crate::app) fn set_count(&mut self, count: usize) {
        if self.settings.count != count {
            self.settings.count = count;
            self.scene_dirty = true;
        }
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<EntityId>) {
        self.selected = selected;
    }

    pub(in crate::app) fn selected_summary(&mut self) -> Option<&EntitySummary> {
        let id = self.selected?;
        let revision = self.registry.revision();

        let stale = self
            .summary_cache
            .as_ref()
            .is_none_or(|cache| cache.id != id || cache.revision != revision);
        if stale {
            self.summary_cache = Some(SummaryCache {
                id,
                revision,
                summary: EntitySummary::for_entity(&self.registry, id),
            });
        }

        self.summary_cache
            .as_ref()
            .and_then(|cache| cache.summary.as_ref())
    }

    fn scene_stats_text(&self) -> String {
        format!(
            "scene: {} entities / {} connectors",
            self.registry.len(),
            self.registry.connectors().len()
        )
    }
}
