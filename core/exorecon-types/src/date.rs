//! Catalog date helpers.

use crate::{Error, Result};
use chrono::NaiveDate;

/// Date format used by the remote catalog and by cutoff arguments.
const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_catalog_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, CATALOG_DATE_FORMAT).map_err(|source| Error::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Converts `YYYY-MM-DD` into the local catalog's `YY/MM/DD` form.
pub fn convert_date_format(input: &str) -> Result<String> {
    Ok(parse_catalog_date(input)?.format("%y/%m/%d").to_string())
}
