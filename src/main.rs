//! Subway CLI - interactive network manager

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use subway::{AppConfig, ConsoleView, Controller, ScreenRegistry, SubwayMap};

#[derive(Parser)]
#[command(name = "subway")]
#[command(about = "Interactive console for managing subway stations, lines and routes")]
#[command(version)]
struct Cli {}

fn main() {
    // Initialize tracing (stderr keeps the menus on stdout clean)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let registry = ScreenRegistry::standard().context("Failed to build the screen registry")?;

    let map = if config.seed {
        SubwayMap::seeded().context("Failed to load the built-in subway data")?
    } else {
        SubwayMap::new()
    };
    info!(
        stations = map.stations().len(),
        lines = map.lines().len(),
        "Starting subway console"
    );

    let mut controller = Controller::new(&registry, &config, ConsoleView::stdio(), map)?;
    controller.run()?;
    Ok(())
}
