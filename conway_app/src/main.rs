// main.rs - Game of Life window: grid editing, pan/zoom and timed stepping
// on top of the `conway` simulation core

use eframe::egui;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;

mod app;
mod config;
mod history;
mod input;
mod patterns;
mod scheduler;
mod ui;

use app::GameOfLife;
use config::{DEFAULT_LOG_FILTER, GRID_HEIGHT, GRID_WIDTH, WINDOW_SIZE};

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Grid(#[from] conway::Error),

    #[error(transparent)]
    Window(#[from] eframe::Error),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

fn main() -> Result<(), Error> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter),
    )?;

    let app = GameOfLife::new(GRID_WIDTH, GRID_HEIGHT)?;
    info!(width = GRID_WIDTH, height = GRID_HEIGHT, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}
