//! Error bars and source attribution for change records.

use exorecon_types::{Attribute, CatalogNode, Measurement, RemoteRow};

/// `(error_minus, error_plus)`; each side is independently optional.
pub type ErrorBars = (Option<String>, Option<String>);

/// Error bars of a local attribute. Both sides are `None` when the attribute
/// is missing.
pub fn local_error_bars<N: CatalogNode + ?Sized>(node: &N, attribute: Attribute) -> ErrorBars {
    match node.attribute(attribute) {
        Some(attr) => (attr.error_minus.clone(), attr.error_plus.clone()),
        None => (None, None),
    }
}

/// Error bars of a remote column, read from `<column>_error_min` and
/// `<column>_error_max`. Missing or blank columns yield `None`.
pub fn remote_error_bars(row: &RemoteRow, column: &str) -> ErrorBars {
    let read = |suffix: &str| {
        let value = row.get(&format!("{column}{suffix}"));
        (!value.is_empty()).then(|| value.to_string())
    };
    (read("_error_min"), read("_error_max"))
}

/// The local side of a delta: the attribute text (if present) plus its error
/// bars.
pub fn local_measurement<N: CatalogNode + ?Sized>(node: &N, attribute: Attribute) -> Measurement {
    let (minus, plus) = local_error_bars(node, attribute);
    Measurement::new(minus, node.text(attribute).map(str::to_string), plus)
}

/// The remote side of a delta. `value` is passed separately because it may
/// have been converted (coordinates) or translated (synonyms) from the raw
/// column.
pub fn remote_measurement(row: &RemoteRow, column: &str, value: impl Into<String>) -> Measurement {
    let (minus, plus) = remote_error_bars(row, column);
    Measurement::new(minus, Some(value.into()), plus)
}

/// Builds the link to a remote record: `base` + lowercased name with spaces
/// turned into underscores, percent-encoded, plus a trailing slash.
///
/// Path separators inside the name are kept as-is.
pub fn provenance_link(base: &str, primary_name: &str) -> String {
    let slug = primary_name.to_lowercase().replace(' ', "_");
    let encoded: Vec<String> = slug
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{base}{}/", encoded.join("/"))
}
