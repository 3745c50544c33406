//! Error types for the diff layer.

use exorecon_coords::CoordError;
use exorecon_types::Attribute;
use thiserror::Error;

/// Result type for diff operations.
pub type DiffResult<T> = Result<T, DiffError>;

/// Errors that can occur while diffing the catalogs.
///
/// Ordinary mismatches are never errors; these only surface when one of the
/// catalogs holds malformed coordinate data.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Malformed coordinate data met while comparing values.
    #[error("coordinate error: {0}")]
    Coordinate(#[from] CoordError),

    /// Malformed coordinate data on a specific entity.
    #[error("malformed {attribute} on {entity:?}: {source}")]
    MalformedAttribute {
        entity: String,
        attribute: Attribute,
        #[source]
        source: CoordError,
    },
}

impl DiffError {
    pub(crate) fn on_entity(self, entity: &str, attribute: Attribute) -> Self {
        match self {
            DiffError::Coordinate(source) => DiffError::MalformedAttribute {
                entity: entity.to_string(),
                attribute,
                source,
            },
            other => other,
        }
    }
}
