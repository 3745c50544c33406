//! Argument handling and orchestration for the `exorecon` binary.
//!
//! One run loads a local catalog snapshot, fetches the remote rows updated
//! since a cutoff date, reconciles them and writes the change-set as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use exorecon_diff::{ChangeSetBuilder, ReconcileConfig, DEFAULT_REFERENCE_BASE};
use exorecon_fetch::{
    CatalogFetcher, FetchConfig, DEFAULT_CATALOG_URL, DEFAULT_LAST_UPDATED_COLUMN,
};
use exorecon_types::{ChangeSet, LocalCatalog};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "exorecon")]
#[command(about = "Reconcile a local exoplanet catalog against the remote CSV export")]
pub struct Args {
    /// Only consider remote rows updated on or after this date (YYYY-MM-DD)
    #[arg(short, long)]
    pub since: String,

    /// Path to the local catalog snapshot (JSON)
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// URL of the remote CSV export
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    pub source_url: String,

    /// Base URL for provenance links
    #[arg(long, default_value = DEFAULT_REFERENCE_BASE)]
    pub reference_base: String,

    /// Zero-based index of the "last updated" column in the export
    #[arg(long, default_value_t = DEFAULT_LAST_UPDATED_COLUMN)]
    pub last_updated_column: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Write the change-set here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            catalog_url: self.source_url.clone(),
            last_updated_column: self.last_updated_column,
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn reconcile_config(&self) -> ReconcileConfig {
        ReconcileConfig {
            reference_base_url: self.reference_base.clone(),
        }
    }
}

/// Reads a catalog snapshot from disk.
pub async fn load_catalog(path: &Path) -> Result<LocalCatalog> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = LocalCatalog::from_json(&json)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

    let (systems, stars, planets) = catalog.counts();
    info!(systems, stars, planets, "Loaded local catalog");
    Ok(catalog)
}

/// Runs one reconciliation and returns the resulting change-set.
pub async fn run(args: &Args) -> Result<ChangeSet> {
    let catalog = load_catalog(&args.catalog).await?;

    let fetcher = CatalogFetcher::new(args.fetch_config()).context("Failed to build HTTP client")?;
    let rows = fetcher
        .fetch_updated_since(&args.since)
        .await
        .context("Failed to fetch remote catalog")?;

    ChangeSetBuilder::new(args.reconcile_config())
        .reconcile(&rows, &catalog)
        .context("Failed to reconcile catalogs")
}

/// Serializes the change-set as pretty JSON to `output`, or stdout when unset.
pub async fn write_output(changes: &ChangeSet, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(changes).context("Failed to serialize change-set")?;
    match output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote change-set to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
