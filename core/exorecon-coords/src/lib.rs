//! Coordinate codec for catalog reconciliation.
//!
//! The remote catalog stores right ascension and declination as decimal
//! degrees; the local catalog stores them as sexagesimal strings
//! (`"HH MM SS.s"` and `"±DD MM SS"`). This crate converts the former into the
//! latter and compares two sexagesimal strings field by field.
//!
//! # Example
//!
//! ```
//! use exorecon_coords::{compare_sexagesimal, degrees_to_right_ascension};
//!
//! let ra = degrees_to_right_ascension(150.0);
//! assert_eq!(ra, "10 00 00.0");
//! assert!(compare_sexagesimal("10 00 00", &ra).unwrap());
//! ```

mod error;
mod sexagesimal;

pub use error::{CoordError, CoordResult};
pub use sexagesimal::{
    compare_sexagesimal, degrees_to_declination, degrees_to_right_ascension, parse_degrees,
};
