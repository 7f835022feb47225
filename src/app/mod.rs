use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};
use tracing::{error, info};

use crate::config::ViewerConfig;
use crate::scene::{EntitySummary, LayoutStrategy, OrbitCamera, SceneRegistry};
use crate::social::{DataSource, Dataset, EntityId, fetch_dataset};

mod graph;
mod render_utils;
mod ui;

pub struct GraphViewerApp {
    source: DataSource,
    state: AppState,
    reload_rx: Option<Receiver<Dataset>>,
}

enum AppState {
    Loading {
        rx: Receiver<Dataset>,
        view: ViewSettings,
    },
    Ready(Box<ViewModel>),
}

/// User choices that survive a reload.
#[derive(Clone, Copy, Debug)]
struct ViewSettings {
    layout: LayoutStrategy,
    radius: f32,
    count: usize,
}

struct ViewModel {
    dataset: Dataset,
    registry: SceneRegistry,
    camera: OrbitCamera,
    settings: ViewSettings,
    scene_dirty: bool,
    selected: Option<EntityId>,
    summary_cache: Option<SummaryCache>,
}

struct SummaryCache {
    id: EntityId,
    revision: u64,
    summary: Option<EntitySummary>,
}

impl GraphViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        let view = ViewSettings {
            layout: config.layout,
            radius: config.radius,
            count: config.count,
        };
        let state = Self::start_load(&config.source, view);
        Self {
            source: config.source,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(source: DataSource) -> Receiver<Dataset> {
        let (tx, rx) = mpsc::channel();

        info!(source = %source.describe(), "loading dataset");
        thread::spawn(move || {
            let _ = tx.send(fetch_dataset(&source));
        });

        rx
    }

    fn start_load(source: &DataSource, view: ViewSettings) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source.clone()),
            view,
        }
    }
}

impl eframe::App for GraphViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx, view } => {
                match rx.try_recv() {
                    Ok(dataset) => {
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(dataset, *view))));
                    }
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        error!("dataset loader exited without a result");
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(
                            Dataset::default(),
                            *view,
                        ))));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading social graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
                ctx.request_repaint();
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.source, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.source.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(dataset) => {
                            transition =
                                Some(AppState::Ready(Box::new(model.reloaded(dataset))));
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            error!("dataset reload worker exited without a result");
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
