use exorecon_types::{Attribute, AttributeDelta, ChangeSet, EntityChangeRecord, Measurement};
use pretty_assertions::assert_eq;

fn delta(local: &str, remote: &str) -> AttributeDelta {
    AttributeDelta::new(Measurement::value(local), Measurement::value(remote))
}

fn record_with(attr: Attribute, local: &str, remote: &str) -> EntityChangeRecord {
    let mut record = EntityChangeRecord::new();
    record.insert(attr, delta(local, remote));
    record
}

// ── Measurement ──────────────────────────────────────────────────

#[test]
fn absent_measurement() {
    let m = Measurement::absent();
    assert!(m.is_absent());
    assert!(!m.has_error_bars());
}

#[test]
fn measurement_with_one_error_bar() {
    let m = Measurement::new(None, Some("1.0".into()), Some("0.2".into()));
    assert!(!m.is_absent());
    assert!(m.has_error_bars());
}

// ── EntityChangeRecord ───────────────────────────────────────────

#[test]
fn new_record_is_empty() {
    let record = EntityChangeRecord::new();
    assert!(record.is_empty());
    assert!(!record.has_changes());
}

#[test]
fn reference_alone_is_not_a_change() {
    let record = EntityChangeRecord {
        reference: Some("http://example.org/x/".into()),
        ..Default::default()
    };
    assert!(!record.has_changes());
    assert!(!record.is_empty());
}

#[test]
fn new_names_count_as_change() {
    let record = EntityChangeRecord {
        new_names: Some("A, B".into()),
        ..Default::default()
    };
    assert!(record.has_changes());
}

#[test]
fn merge_unions_attributes_with_later_winning() {
    let mut first = record_with(Attribute::Mass, "1", "2");
    first.insert(Attribute::Radius, delta("3", "4"));
    let second = record_with(Attribute::Mass, "1", "5");

    first.merge(second);

    assert_eq!(first.attributes.len(), 2);
    assert_eq!(first.get(Attribute::Mass).unwrap().remote.value.as_deref(), Some("5"));
    assert_eq!(first.get(Attribute::Radius).unwrap().remote.value.as_deref(), Some("4"));
}

#[test]
fn merge_keeps_reserved_fields_not_overwritten() {
    let mut first = EntityChangeRecord {
        new_names: Some("A".into()),
        is_new: Some(false),
        ..Default::default()
    };
    first.merge(EntityChangeRecord {
        reference: Some("link".into()),
        ..Default::default()
    });
    assert_eq!(first.new_names.as_deref(), Some("A"));
    assert_eq!(first.is_new, Some(false));
    assert_eq!(first.reference.as_deref(), Some("link"));
}

// ── ChangeSet ────────────────────────────────────────────────────

#[test]
fn planet_write_creates_parent_slots() {
    let mut changes = ChangeSet::new();
    changes.merge_planet("Sys", "Star", "b", record_with(Attribute::Period, "1", "2"));

    let system = changes.system("Sys").unwrap();
    assert!(system.attributes.is_empty());
    let star = changes.star("Sys", "Star").unwrap();
    assert!(star.attributes.is_empty());
    assert!(changes.planet("Sys", "Star", "b").is_some());
}

#[test]
fn two_system_writes_share_one_entry() {
    let mut changes = ChangeSet::new();
    changes.merge_system("Sys", record_with(Attribute::Distance, "10", "11"));
    changes.merge_system("Sys", record_with(Attribute::RightAscension, "01 00 00", "02 00 00.0"));

    assert_eq!(changes.len(), 1);
    let attrs = &changes.system("Sys").unwrap().attributes.attributes;
    assert_eq!(attrs.len(), 2);
}

#[test]
fn star_write_after_planet_write_reuses_slot() {
    let mut changes = ChangeSet::new();
    changes.merge_planet("Sys", "Star", "b", record_with(Attribute::Period, "1", "2"));
    changes.merge_star("Sys", "Star", record_with(Attribute::Mass, "1", "2"));

    let star = changes.star("Sys", "Star").unwrap();
    assert_eq!(star.planets.len(), 1);
    assert!(star.attributes.get(Attribute::Mass).is_some());
}

#[test]
fn merging_change_sets_applies_later_wins() {
    let mut left = ChangeSet::new();
    left.merge_star("Sys", "Star", record_with(Attribute::Mass, "1", "2"));
    let mut right = ChangeSet::new();
    right.merge_star("Sys", "Star", record_with(Attribute::Mass, "1", "3"));
    right.merge_planet("Sys", "Star", "c", record_with(Attribute::Radius, "1", "2"));
    right.merge_system("Other", record_with(Attribute::Distance, "1", "2"));

    left.merge(right);

    assert_eq!(left.len(), 2);
    let mass = left.star("Sys", "Star").unwrap().attributes.get(Attribute::Mass).unwrap();
    assert_eq!(mass.remote.value.as_deref(), Some("3"));
    assert!(left.planet("Sys", "Star", "c").is_some());
    assert_eq!(left.delta_count(), 3);
}

#[test]
fn empty_change_set_serializes_as_empty_object() {
    assert_eq!(serde_json::to_string(&ChangeSet::new()).unwrap(), "{}");
}

#[test]
fn serialized_shape_is_nested_by_name() {
    let mut changes = ChangeSet::new();
    let mut record = record_with(Attribute::Mass, "1", "2");
    record.is_new = Some(true);
    changes.merge_planet("Sys", "Star", "b", record);

    let json = serde_json::to_value(&changes).unwrap();
    let planet = &json["Sys"]["stars"]["Star"]["planets"]["b"];
    assert_eq!(planet["new"], serde_json::json!(true));
    assert_eq!(planet["attributes"]["mass"]["remote"]["value"], serde_json::json!("2"));
    assert!(planet["attributes"]["mass"]["local"].get("error_minus").is_none());
}

#[test]
fn change_set_json_roundtrip() {
    let mut changes = ChangeSet::new();
    changes.merge_system("Sys", record_with(Attribute::Distance, "1", "2"));
    let json = serde_json::to_string(&changes).unwrap();
    let parsed: ChangeSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, changes);
}
