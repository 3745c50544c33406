//! Fetch adapter for the remote exoplanet catalog.
//!
//! Downloads the catalog's CSV export and keeps the rows updated on or after a
//! cutoff date, each keyed by the CSV header. Every failure (network, HTTP
//! status, malformed CSV, unparseable date) is returned to the caller; no row
//! is silently skipped.
//!
//! # Example
//!
//! ```
//! use exorecon_fetch::parse_updated_rows;
//! use exorecon_types::parse_catalog_date;
//!
//! let csv = "# name,star_name,updated\nKepler-1 b,Kepler-1,2016-03-01\n";
//! let cutoff = parse_catalog_date("2016-01-01").unwrap();
//! let rows = parse_updated_rows(csv, cutoff, 2).unwrap();
//! assert_eq!(rows[0].planet_name(), "Kepler-1 b");
//! ```

mod error;
mod fetcher;

pub use error::{FetchError, FetchResult};
pub use fetcher::{
    parse_updated_rows, CatalogFetcher, FetchConfig, DEFAULT_CATALOG_URL,
    DEFAULT_LAST_UPDATED_COLUMN,
};
