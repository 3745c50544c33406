//! Fetch error types.

use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching the remote catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("date error: {0}")]
    Date(#[from] exorecon_types::Error),

    /// The configured "last updated" column is outside a row.
    #[error("last-updated column {index} missing from a row of {width} fields")]
    MissingColumn { index: usize, width: usize },
}
