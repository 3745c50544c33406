//! Rows of the remote tabular catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column holding the planet's primary name.
const PLANET_NAME: &str = "# name";
/// Column holding the planet's comma-separated alternate names.
const PLANET_ALIASES: &str = "alternate_names";
/// Column holding the host star's primary name.
const STAR_NAME: &str = "star_name";
/// Column holding the host star's comma-separated alternate names.
const STAR_ALIASES: &str = "star_alternate_names";

/// Separator used by the remote catalog inside alias columns.
pub const ALIAS_SEPARATOR: &str = ", ";

/// One row of the remote catalog, keyed by column name.
///
/// Columns missing from the row read as the empty string, the same as a
/// column that is present but blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteRow {
    fields: HashMap<String, String>,
}

impl RemoteRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a column, `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the row has the column at all, blank or not.
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// The planet's primary name.
    pub fn planet_name(&self) -> &str {
        self.get(PLANET_NAME)
    }

    /// The raw, unsplit planet alias column.
    pub fn planet_alternate_names(&self) -> &str {
        self.get(PLANET_ALIASES)
    }

    /// The host star's primary name.
    pub fn star_name(&self) -> &str {
        self.get(STAR_NAME)
    }

    /// The raw, unsplit star alias column.
    pub fn star_alternate_names(&self) -> &str {
        self.get(STAR_ALIASES)
    }

    /// Every name the row knows the planet by: its aliases, then the primary
    /// name.
    pub fn planet_aliases(&self) -> Vec<String> {
        let mut names = split_aliases(self.planet_alternate_names());
        names.push(self.planet_name().to_string());
        names
    }

    /// Every name the row knows the host star by: its aliases, then the
    /// primary name.
    pub fn star_aliases(&self) -> Vec<String> {
        let mut names = split_aliases(self.star_alternate_names());
        names.push(self.star_name().to_string());
        names
    }
}

/// Splits an alias column on `", "`. A blank column yields no names.
pub fn split_aliases(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(ALIAS_SEPARATOR).map(str::to_string).collect()
}
