//! Gomoku GUI
//!
//! Play against the computer. The config path is taken from the first
//! argument, then `GOMOKU_CONFIG`, then `gomoku.toml`.

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::GameConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "gomoku.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=info")),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GOMOKU_CONFIG").ok())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);
    let config = GameConfig::load_or_default(&path)?;
    tracing::info!(difficulty = %config.difficulty, seed = ?config.seed, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )?;
    Ok(())
}
