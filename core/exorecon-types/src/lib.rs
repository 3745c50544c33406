//! Core type definitions for exoplanet catalog reconciliation.
//!
//! This crate defines the data shared by every stage of a reconciliation run:
//! - Remote rows ([`RemoteRow`], one row of the tabular catalog)
//! - Local tree ([`LocalCatalog`], systems holding stars holding planets)
//! - Attribute identifiers ([`Attribute`])
//! - Change-sets ([`ChangeSet`], built from [`EntityChangeRecord`]s and
//!   [`AttributeDelta`]s)
//!
//! Matching, comparison and fetching live in their own crates; nothing here
//! performs I/O.

mod attribute;
mod catalog;
mod change;
mod date;
mod remote;

pub use attribute::Attribute;
pub use catalog::{AttributeNode, CatalogNode, LocalCatalog, Planet, Star, System};
pub use change::{
    AttributeDelta, ChangeSet, EntityChangeRecord, Measurement, StarChanges, SystemChanges,
};
pub use date::{convert_date_format, parse_catalog_date};
pub use remote::{split_aliases, RemoteRow, ALIAS_SEPARATOR};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
