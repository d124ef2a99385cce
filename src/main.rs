//! # SBUS Bridge
//!
//! Demo entry point: streams neutral SBUS frames to the configured serial
//! device until Ctrl+C.
//!
//! A real deployment embeds the library and feeds the channel store from an
//! input source; this binary is a smoke utility for verifying the wire path
//! (a receiver should report all sticks centered while it runs).

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber;

mod config;
mod error;
mod sbus;
mod channels;
mod serial;
mod transmitter;

use channels::ChannelStore;
use config::Config;
use transmitter::SbusTransmitter;

/// Configuration file consulted when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("SBUS Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => match Config::load(DEFAULT_CONFIG_PATH) {
            Ok(config) => config,
            Err(_) => {
                info!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    info!(
        "Transmitting to {} every {} ms",
        config.serial.port, config.transmitter.update_rate_ms
    );

    // All axes start at neutral; without an input source attached this
    // streams centered-stick frames.
    let store = Arc::new(ChannelStore::new());
    let mut tx = SbusTransmitter::new(config, Arc::clone(&store));

    tx.start()?;
    info!("Press Ctrl+C to exit");

    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl+C, shutting down...");

    tx.stop().await?;
    Ok(())
}
