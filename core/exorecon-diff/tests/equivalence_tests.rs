use exorecon_diff::{same_value, DiffError};
use exorecon_types::Attribute;
use proptest::prelude::*;

fn same(attr: Attribute, local: Option<&str>, remote: &str) -> bool {
    same_value(attr, local, remote).unwrap()
}

// ── Empty values ─────────────────────────────────────────────────

#[test]
fn absent_local_and_blank_remote_are_equal() {
    assert!(same(Attribute::Mass, None, ""));
}

#[test]
fn blank_local_and_blank_remote_are_equal() {
    assert!(same(Attribute::Mass, Some(""), ""));
}

#[test]
fn absent_local_differs_from_value() {
    assert!(!same(Attribute::Mass, None, "1.0"));
}

#[test]
fn value_differs_from_blank_remote() {
    assert!(!same(Attribute::Mass, Some("1.0"), ""));
}

// ── Numbers ──────────────────────────────────────────────────────

#[test]
fn numbers_compare_numerically() {
    assert!(same(Attribute::Mass, Some("1.0"), "1"));
    assert!(same(Attribute::Period, Some("3.50"), "3.5"));
    assert!(same(Attribute::Eccentricity, Some("1e-2"), "0.01"));
}

#[test]
fn numbers_have_no_epsilon() {
    assert!(!same(Attribute::Mass, Some("1.0"), "1.0000001"));
}

#[test]
fn numbers_ignore_surrounding_whitespace() {
    assert!(same(Attribute::Radius, Some(" 2 "), "2"));
}

#[test]
fn number_against_text_falls_through_to_string_rule() {
    assert!(!same(Attribute::DiscoveryYear, Some("2009"), "unknown"));
}

// ── Coordinates ──────────────────────────────────────────────────

#[test]
fn right_ascension_compares_field_wise() {
    assert!(same(Attribute::RightAscension, Some("10 00 00"), "10 00 00.0"));
    assert!(!same(Attribute::RightAscension, Some("10 00 00"), "10 00 01.5"));
}

#[test]
fn declination_compares_field_wise() {
    assert!(same(Attribute::Declination, Some("-12 30 45"), "-12 30 45"));
    assert!(same(Attribute::Declination, Some("+05 00 00"), "05 00 00"));
}

#[test]
fn coordinate_rule_only_applies_to_coordinates() {
    assert!(!same(Attribute::Distance, Some("10 00 00"), "10 00 00.0"));
}

#[test]
fn coordinate_field_count_mismatch_is_an_error() {
    let err = same_value(Attribute::RightAscension, Some("10 00"), "10 00 00.0").unwrap_err();
    assert!(matches!(err, DiffError::Coordinate(_)));
}

// ── Synonyms ─────────────────────────────────────────────────────

#[test]
fn synonyms_are_equal() {
    assert!(same(Attribute::DiscoveryMethod, Some("RV"), "Radial Velocity"));
    assert!(same(Attribute::DiscoveryMethod, Some("transit"), "Primary Transit"));
}

#[test]
fn synonym_key_requires_exact_synonym() {
    assert!(!same(Attribute::DiscoveryMethod, Some("RV"), "rv"));
    assert!(!same(Attribute::DiscoveryMethod, Some("transit"), "Transit"));
}

#[test]
fn synonym_lookup_is_directional() {
    // The remote spelling on the local side is just a string.
    assert!(same(Attribute::DiscoveryMethod, Some("Radial Velocity"), "radial velocity"));
    assert!(!same(Attribute::DiscoveryMethod, Some("Radial Velocity"), "RV"));
}

// ── Strings ──────────────────────────────────────────────────────

#[test]
fn strings_match_exactly() {
    assert!(same(Attribute::DiscoveryMethod, Some("imaging"), "imaging"));
}

#[test]
fn strings_match_ignoring_case_and_whitespace() {
    assert!(same(Attribute::SpectralType, Some("G2 V"), "g2v"));
    assert!(same(Attribute::DiscoveryMethod, Some("imaging"), "Imaging"));
}

#[test]
fn different_strings_differ() {
    assert!(!same(Attribute::SpectralType, Some("K0"), "G8"));
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn numeric_strings_match_iff_numbers_match(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let result = same_value(Attribute::Mass, Some(&a.to_string()), &b.to_string()).unwrap();
        prop_assert_eq!(result, a == b);
    }

    #[test]
    fn numeric_string_matches_itself(a in -1.0e6f64..1.0e6) {
        let s = a.to_string();
        prop_assert!(same_value(Attribute::Period, Some(&s), &s).unwrap());
    }

    #[test]
    fn string_matches_itself(s in "[a-zA-Z ]{1,20}") {
        // "nan" and friends parse as numbers and never equal themselves.
        prop_assume!(s.trim().parse::<f64>().is_err());
        prop_assert!(same_value(Attribute::SpectralType, Some(&s), &s).unwrap());
    }
}
