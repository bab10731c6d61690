#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{PageConfig, UiState};
use tracing_subscriber::EnvFilter;

/// Personal portfolio with a mouse-reactive robot
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio page")]
struct Args {
    /// JSON file overriding page thresholds and timers
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("loading page config from {}", path.display()))?,
        None => PageConfig::default(),
    };
    let state = UiState::new(config).context("building initial page state")?;

    tracing::info!("🎨 Portfolio Website Loaded Successfully!");
    tracing::info!("🤖 Try moving your mouse to see the robot follow!");
    tracing::info!("🎮 Try the Konami Code for a surprise: ↑↑↓↓←→←→BA");

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(state)
        .launch(app::App);

    Ok(())
}
