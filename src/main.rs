mod app;
mod config;
mod scene;
mod social;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Args;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = Args::parse().into_config();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "social-graph-3d",
        options,
        Box::new(move |cc| Ok(Box::new(app::GraphViewerApp::new(cc, config)))),
    )
}
