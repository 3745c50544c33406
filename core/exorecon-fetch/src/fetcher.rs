//! HTTP download and CSV filtering.

use crate::error::{FetchError, FetchResult};
use chrono::NaiveDate;
use exorecon_types::{parse_catalog_date, RemoteRow};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Public CSV export of the remote catalog.
pub const DEFAULT_CATALOG_URL: &str = "http://exoplanet.eu/catalog/csv";

/// Position of the "last updated" column in the export.
pub const DEFAULT_LAST_UPDATED_COLUMN: usize = 24;

/// Configuration for the fetch adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL of the CSV export.
    pub catalog_url: String,
    /// Zero-based index of the column holding each row's update date.
    pub last_updated_column: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            last_updated_column: DEFAULT_LAST_UPDATED_COLUMN,
            timeout_secs: 60,
        }
    }
}

/// Downloads remote rows updated since a cutoff date.
pub struct CatalogFetcher {
    config: FetchConfig,
    client: Client,
}

impl CatalogFetcher {
    /// Creates a fetcher with its own HTTP client.
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetches every row whose "last updated" date is on or after `cutoff`
    /// (`YYYY-MM-DD`). Rows keep the order of the export.
    pub async fn fetch_updated_since(&self, cutoff: &str) -> FetchResult<Vec<RemoteRow>> {
        let cutoff = parse_catalog_date(cutoff)?;

        debug!("Fetching remote catalog from {}", self.config.catalog_url);
        let body = self
            .client
            .get(&self.config.catalog_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows = parse_updated_rows(&body, cutoff, self.config.last_updated_column)?;
        info!(
            rows = rows.len(),
            %cutoff,
            "Fetched updated rows from remote catalog"
        );
        Ok(rows)
    }
}

/// Parses a CSV export and keeps rows updated on or after `cutoff`.
///
/// The first line is the header; every kept row becomes a [`RemoteRow`] keyed
/// by it. Rows of a different width than the header are a CSV error, and a
/// blank or malformed date in the `last_updated_column` is a date error.
pub fn parse_updated_rows(
    csv_text: &str,
    cutoff: NaiveDate,
    last_updated_column: usize,
) -> FetchResult<Vec<RemoteRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    let mut scanned = 0usize;
    for record in reader.records() {
        let record = record?;
        scanned += 1;

        let updated = record
            .get(last_updated_column)
            .ok_or(FetchError::MissingColumn {
                index: last_updated_column,
                width: record.len(),
            })?;
        if parse_catalog_date(updated)? < cutoff {
            continue;
        }
        rows.push(RemoteRow::from_pairs(headers.iter().zip(record.iter())));
    }

    debug!(scanned, kept = rows.len(), "Filtered remote catalog rows");
    Ok(rows)
}
