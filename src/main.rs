// main.rs - Parses configuration, installs logging and opens the window

use clap::Parser;
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use toroidal_life::ui::LifeApp;
use toroidal_life::{Config, LifeError};

fn main() -> Result<(), LifeError> {
    init_tracing();

    let config = Config::parse();
    if let Err(err) = config.validate() {
        error!(%err, "rejecting configuration");
        return Err(err.into());
    }
    info!(
        columns = config.columns,
        rows = config.rows,
        updates_per_second = config.updates_per_second,
        "starting Game of Life"
    );

    let app = LifeApp::new(&config, StdRng::from_entropy())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game of Life")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
