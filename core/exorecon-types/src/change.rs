//! The change-set produced by a reconciliation run.
//!
//! A [`ChangeSet`] is nested the same way as the local catalog:
//! system → star → planet. Each level holds an [`EntityChangeRecord`] listing
//! per-attribute [`AttributeDelta`]s plus a few reserved fields (new aliases,
//! provenance link, new-entity flag).
//!
//! Writes into an existing slot merge rather than replace: attribute deltas
//! are unioned with the later write winning per key, and container slots are
//! created on first touch.

use crate::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// One side of a delta: a value with its optional asymmetric error bars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_minus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_plus: Option<String>,
}

impl Measurement {
    pub fn new(
        error_minus: Option<String>,
        value: Option<String>,
        error_plus: Option<String>,
    ) -> Self {
        Self {
            error_minus,
            value,
            error_plus,
        }
    }

    /// No value and no error bars.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A bare value without error bars.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn has_error_bars(&self) -> bool {
        self.error_minus.is_some() || self.error_plus.is_some()
    }
}

/// The before/after state of one attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDelta {
    /// What the local catalog currently holds.
    pub local: Measurement,
    /// What the remote catalog proposes.
    pub remote: Measurement,
}

impl AttributeDelta {
    pub fn new(local: Measurement, remote: Measurement) -> Self {
        Self { local, remote }
    }
}

/// All changes detected for a single system, star or planet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChangeRecord {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<Attribute, AttributeDelta>,
    /// Remote aliases the local entity does not know yet, joined by `", "`.
    #[serde(default, rename = "new_names", skip_serializing_if = "Option::is_none")]
    pub new_names: Option<String>,
    /// Link to the remote record backing these changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// `Some(true)` for an entity found only in the remote catalog,
    /// `Some(false)` for a matched entity, `None` where the flag does not apply.
    #[serde(default, rename = "new", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl EntityChangeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a delta for one attribute, replacing any earlier one.
    pub fn insert(&mut self, attribute: Attribute, delta: AttributeDelta) {
        self.attributes.insert(attribute, delta);
    }

    pub fn get(&self, attribute: Attribute) -> Option<&AttributeDelta> {
        self.attributes.get(&attribute)
    }

    /// True when the record carries a real change: an attribute delta or a
    /// new alias. The reference link and flags alone do not count.
    pub fn has_changes(&self) -> bool {
        !self.attributes.is_empty() || self.new_names.is_some()
    }

    /// True when nothing at all has been recorded.
    pub fn is_empty(&self) -> bool {
        !self.has_changes() && self.reference.is_none() && self.is_new.is_none()
    }

    /// Merges a later record into this one. Attribute deltas are unioned with
    /// `other` winning per key; reserved fields set in `other` overwrite ours.
    pub fn merge(&mut self, other: EntityChangeRecord) {
        self.attributes.extend(other.attributes);
        if other.new_names.is_some() {
            self.new_names = other.new_names;
        }
        if other.reference.is_some() {
            self.reference = other.reference;
        }
        if other.is_new.is_some() {
            self.is_new = other.is_new;
        }
    }
}

/// Changes for one star and its planets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarChanges {
    pub attributes: EntityChangeRecord,
    #[serde(default)]
    pub planets: BTreeMap<String, EntityChangeRecord>,
}

impl StarChanges {
    pub fn planet(&self, name: &str) -> Option<&EntityChangeRecord> {
        self.planets.get(name)
    }

    fn merge_planet(&mut self, planet: String, record: EntityChangeRecord) {
        match self.planets.entry(planet) {
            Entry::Occupied(mut slot) => slot.get_mut().merge(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    fn merge(&mut self, other: StarChanges) {
        self.attributes.merge(other.attributes);
        for (planet, record) in other.planets {
            self.merge_planet(planet, record);
        }
    }
}

/// Changes for one system and its stars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemChanges {
    pub attributes: EntityChangeRecord,
    #[serde(default)]
    pub stars: BTreeMap<String, StarChanges>,
}

impl SystemChanges {
    pub fn star(&self, name: &str) -> Option<&StarChanges> {
        self.stars.get(name)
    }

    fn star_entry(&mut self, star: &str) -> &mut StarChanges {
        self.stars.entry(star.to_string()).or_default()
    }

    fn merge(&mut self, other: SystemChanges) {
        self.attributes.merge(other.attributes);
        for (star, changes) in other.stars {
            self.star_entry(&star).merge(changes);
        }
    }
}

/// The full result of one reconciliation run, keyed by system name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    systems: BTreeMap<String, SystemChanges>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(&self, name: &str) -> Option<&SystemChanges> {
        self.systems.get(name)
    }

    /// Shortcut for `system(..).star(..)`.
    pub fn star(&self, system: &str, star: &str) -> Option<&StarChanges> {
        self.system(system).and_then(|s| s.star(star))
    }

    /// Shortcut for `system(..).star(..).planet(..)`.
    pub fn planet(&self, system: &str, star: &str, planet: &str) -> Option<&EntityChangeRecord> {
        self.star(system, star).and_then(|s| s.planet(planet))
    }

    pub fn systems(&self) -> impl Iterator<Item = (&String, &SystemChanges)> {
        self.systems.iter()
    }

    /// Number of systems touched.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    fn system_entry(&mut self, system: &str) -> &mut SystemChanges {
        self.systems.entry(system.to_string()).or_default()
    }

    /// Merges a system-level record.
    pub fn merge_system(&mut self, system: &str, record: EntityChangeRecord) {
        self.system_entry(system).attributes.merge(record);
    }

    /// Merges a star-level record, creating the system slot if needed.
    pub fn merge_star(&mut self, system: &str, star: &str, record: EntityChangeRecord) {
        self.system_entry(system).star_entry(star).attributes.merge(record);
    }

    /// Merges a planet-level record, creating the system and star slots if
    /// needed.
    pub fn merge_planet(
        &mut self,
        system: &str,
        star: &str,
        planet: &str,
        record: EntityChangeRecord,
    ) {
        self.system_entry(system)
            .star_entry(star)
            .merge_planet(planet.to_string(), record);
    }

    /// Merges another change-set into this one; `other` is treated as the
    /// later write.
    pub fn merge(&mut self, other: ChangeSet) {
        for (system, changes) in other.systems {
            self.system_entry(&system).merge(changes);
        }
    }

    /// Total number of attribute deltas across every level.
    pub fn delta_count(&self) -> usize {
        self.systems
            .values()
            .map(|system| {
                system.attributes.attributes.len()
                    + system
                        .stars
                        .values()
                        .map(|star| {
                            star.attributes.attributes.len()
                                + star
                                    .planets
                                    .values()
                                    .map(|p| p.attributes.len())
                                    .sum::<usize>()
                        })
                        .sum::<usize>()
            })
            .sum()
    }
}
