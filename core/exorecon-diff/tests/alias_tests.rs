use exorecon_diff::{has_matching_name, new_aliases};
use exorecon_types::{CatalogNode, Planet, Star};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ── has_matching_name ────────────────────────────────────────────

#[test]
fn matches_primary_name() {
    let star = Star::new("Kepler-1");
    assert!(has_matching_name(&star, &names(&["KOI-1", "Kepler-1"])));
}

#[test]
fn matches_alias() {
    let star = Star::new("Kepler-1").with_alias("TrES-2");
    assert!(has_matching_name(&star, &names(&["TrES-2"])));
}

#[test]
fn matching_is_case_sensitive() {
    let planet = Planet::new("Kepler-1 b");
    assert!(!has_matching_name(&planet, &names(&["kepler-1 b"])));
}

#[test]
fn no_candidates_never_match() {
    let planet = Planet::new("Kepler-1 b");
    assert!(!has_matching_name(&planet, &[]));
}

// ── new_aliases ──────────────────────────────────────────────────

#[test]
fn new_aliases_keep_input_order() {
    let star = Star::new("Kepler-1");
    let found = new_aliases(&star, &names(&["KOI-1", "K1", "Kepler-1"]));
    assert_eq!(found, names(&["KOI-1", "K1"]));
}

#[test]
fn new_aliases_skip_every_known_name() {
    let star = Star::new("Kepler-1").with_alias("KOI-1");
    let found = new_aliases(&star, &names(&["KOI-1", "K1"]));
    assert_eq!(found, names(&["K1"]));
}

proptest! {
    #[test]
    fn no_candidates_yield_no_aliases(primary in "[A-Za-z0-9 -]{1,12}", alias in "[A-Za-z0-9 -]{1,12}") {
        let planet = Planet::new(primary).with_alias(alias);
        prop_assert!(new_aliases(&planet, &[]).is_empty());
    }

    #[test]
    fn known_names_yield_no_aliases(primary in "[A-Za-z0-9 -]{1,12}", alias in "[A-Za-z0-9 -]{1,12}") {
        let planet = Planet::new(primary).with_alias(alias);
        let known = planet.names().to_vec();
        prop_assert!(new_aliases(&planet, &known).is_empty());
        prop_assert!(has_matching_name(&planet, &known));
    }
}
