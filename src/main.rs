//! hud — live frame-diagnostics readout for the host process.
//!
//! Run with:  `RUST_LOG=info hud`

mod readout;

use anyhow::Result;
use hud_system::ProcessSource;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("hud v{} starting", env!("CARGO_PKG_VERSION"));

    let config = hud_config::load(hud_config::default_path())?;

    // Standalone runs have no graphics backend to report; an engine
    // embedding the overlay supplies its own StatsSource instead.
    let source = ProcessSource::new("none", "host process")?;
    let mut frames = hud_system::spawn_overlay(config.refresh_ms, source);

    while let Some(frame) = frames.recv().await {
        readout::print(&frame, &config.sections);
    }

    Ok(())
}
