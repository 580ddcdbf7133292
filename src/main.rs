//! kumactl - Main entry point

use clap::Parser;
use log::{debug, info};

use kumactl::{commands, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting kumactl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: address={:?}, port={}, timeout={}s, batch={}, command={:?}",
        cli.address, cli.port, cli.timeout, cli.batch, cli.command
    );

    if let Err(e) = commands::run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
