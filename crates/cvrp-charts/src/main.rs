// File: crates/cvrp-charts/src/main.rs
// Summary: Renders cost, time and log-time charts for the CVRP solver variants and shows them in a window.

mod summary;
mod window;

use anyhow::{Context, Result};
use chart_core::{cvrp_results, dataset, BenchmarkData, ChartRenderer, RenderOptions};
use log::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: optional dataset file (.json/.csv); the recorded results otherwise
    let data = match std::env::args().nth(1) {
        Some(path) => load_dataset(&path)?,
        None => cvrp_results(),
    };

    for line in summary::summarize(&data) {
        info!("{line}");
    }

    let renderer = ChartRenderer::new(RenderOptions::default());
    let mut presenter = window::WindowPresenter::new(renderer.options());
    renderer
        .render(&data, &mut presenter)
        .context("failed to render benchmark charts")?;
    info!("window closed");
    Ok(())
}

fn load_dataset(path: &str) -> Result<BenchmarkData> {
    info!("Using input file: {path}");
    dataset::load(path).with_context(|| format!("failed to load dataset '{path}'"))
}
