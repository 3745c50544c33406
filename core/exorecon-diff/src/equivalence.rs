//! Decides whether a local and a remote value state the same fact.

use crate::error::DiffResult;
use crate::mapping::remote_synonym;
use exorecon_coords::compare_sexagesimal;
use exorecon_types::Attribute;

/// Returns true if `local` (from the local catalog) and `remote` (from the
/// remote catalog) are equivalent for `attribute`.
///
/// Rules, first match wins:
/// 1. both sides empty (local absent or blank, remote blank) → equal
/// 2. exactly one side empty → different
/// 3. both parse as numbers → exact numeric equality
/// 4. coordinate attributes → field-wise sexagesimal comparison
/// 5. local value with a known synonym → remote must be that synonym
/// 6. exact match, or case-insensitive match ignoring whitespace
///
/// Only rule 4 can fail, and only on malformed coordinate strings.
pub fn same_value(attribute: Attribute, local: Option<&str>, remote: &str) -> DiffResult<bool> {
    let local = local.unwrap_or("");
    if local.is_empty() || remote.is_empty() {
        return Ok(local.is_empty() && remote.is_empty());
    }

    if let (Some(l), Some(r)) = (parse_number(local), parse_number(remote)) {
        return Ok(l == r);
    }

    if attribute.is_coordinate() {
        return Ok(compare_sexagesimal(local, remote)?);
    }

    if let Some(synonym) = remote_synonym(local) {
        return Ok(remote == synonym);
    }

    Ok(local == remote || normalize(local) == normalize(remote))
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
