//! Coordinate codec error types.

use thiserror::Error;

/// Result type for coordinate operations.
pub type CoordResult<T> = Result<T, CoordError>;

/// Errors raised on malformed coordinate data.
#[derive(Debug, Error, PartialEq)]
pub enum CoordError {
    /// The two sexagesimal strings have a different number of fields.
    #[error("sexagesimal field count mismatch: {left:?} has {left_fields}, {right:?} has {right_fields}")]
    FieldCountMismatch {
        left: String,
        right: String,
        left_fields: usize,
        right_fields: usize,
    },

    /// A sexagesimal field is not a number.
    #[error("invalid sexagesimal component {component:?} in {value:?}")]
    InvalidComponent { value: String, component: String },

    /// A decimal degree value is not a finite number.
    #[error("invalid degree value: {0:?}")]
    InvalidDegrees(String),
}
