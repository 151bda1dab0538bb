#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod curve;
mod views;

use app::{LrcApp, View};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lrc-ui")]
#[command(about = "Interactive views of the series LRC circuit studies", long_about = None)]
struct Args {
    /// Scenario file (YAML or JSON); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Study shown at startup
    #[arg(long, value_enum, default_value_t = View::Resonance)]
    view: View,
}

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let app = match LrcApp::from_config(args.config.as_deref(), args.view) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("failed to load scenario: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("LRC Circuit Studies"),
        ..Default::default()
    };

    eframe::run_native(
        "LRC Circuit Studies",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
