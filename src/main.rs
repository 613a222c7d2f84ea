//! Page Forge
//!
//! Entity page configuration resolver for application builders.
//!
//! This is the main entry point for the `pageforge` command.

use anyhow::Result;
use clap::Parser;
use pageforge_cli::{Cli, load_config, log_directive, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(&config, cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting {} v{}", pageforge_cli::NAME, pageforge_cli::VERSION);

    let mut stdout = std::io::stdout().lock();
    run(&cli, &config, &mut stdout).await
}
