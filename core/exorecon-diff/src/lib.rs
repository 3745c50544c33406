//! Reconciliation engine for the remote and local exoplanet catalogs.
//!
//! # Components
//!
//! - **Mapping**: fixed local attribute ⇄ remote column tables and value
//!   synonyms
//! - **Equivalence**: decides whether two raw values state the same fact
//! - **Alias**: name matching between rows and local nodes
//! - **Provenance**: error bars and the source link attached to each change
//! - **Builder**: walks the local tree per remote row and assembles the
//!   [`ChangeSet`](exorecon_types::ChangeSet)
//!
//! # Example
//!
//! ```
//! use exorecon_diff::ChangeSetBuilder;
//! use exorecon_types::{Attribute, LocalCatalog, RemoteRow, Star, System};
//!
//! let catalog = LocalCatalog::new(vec![System::new("Kepler-1")
//!     .with_attribute(Attribute::RightAscension, "10 00 00")
//!     .with_star(Star::new("Kepler-1"))]);
//! let row = RemoteRow::from_pairs([
//!     ("# name", "Kepler-1 b"),
//!     ("star_name", "Kepler-1"),
//!     ("ra", "150.0"),
//! ]);
//!
//! let changes = ChangeSetBuilder::default().reconcile(&[row], &catalog).unwrap();
//! // 150 degrees is exactly 10h, so nothing differs.
//! assert!(changes.is_empty());
//! ```

pub mod alias;
mod builder;
pub mod equivalence;
mod error;
pub mod mapping;
pub mod provenance;

pub use alias::{has_matching_name, new_aliases};
pub use builder::{ChangeSetBuilder, ReconcileConfig, DEFAULT_REFERENCE_BASE};
pub use equivalence::same_value;
pub use error::{DiffError, DiffResult};
pub use mapping::{EntityKind, FieldMapping, ValueSynonym};
pub use provenance::{local_error_bars, provenance_link, remote_error_bars};
