//! rampart turn bot - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Turn-based tower-defense bot speaking the engine's stdio protocol.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via RAMPART_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    rampart_bot::logging::init_logging();

    info!("Starting rampart v{}", env!("CARGO_PKG_VERSION"));

    // Config path: CLI arg > RAMPART_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("RAMPART_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    let config = rampart_bot::AppConfig::load(&config_path)?;

    let mut app = rampart_bot::Application::new(config);
    app.run()?;

    Ok(())
}
