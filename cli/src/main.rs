//! Exoplanet catalog reconciliation
//!
//! Compares the rows of the remote catalog updated since a date with a local
//! catalog snapshot and prints what would have to change locally.
//!
//! Usage:
//!   exorecon --since 2016-01-01 --catalog systems.json --output changes.json

use anyhow::Result;
use clap::Parser;
use exorecon_cli::{run, write_output, Args};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Reconciling remote rows updated since {}", args.since);
    let changes = run(&args).await?;
    info!(
        systems = changes.len(),
        deltas = changes.delta_count(),
        "Change-set ready"
    );

    write_output(&changes, args.output.as_deref()).await
}
