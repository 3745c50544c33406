//! Change-set assembly: matches remote rows against the local tree and records
//! every discrepancy.
//!
//! Each row is checked against every star of every system (no early exit), so
//! a row whose star aliases are ambiguous is applied to every star it matches.
//! For a matched star the builder emits, in order: a system record, a star
//! record, one record per matched planet, or a new-planet record when no planet
//! under the star matched. Records land in the [`ChangeSet`] through its merge
//! operations, so a later write to the same slot wins per attribute.

use crate::alias::{has_matching_name, new_aliases};
use crate::equivalence::same_value;
use crate::error::DiffResult;
use crate::mapping::{local_synonym, EntityKind, FieldMapping};
use crate::provenance::{local_measurement, provenance_link, remote_measurement};
use exorecon_coords::{degrees_to_declination, degrees_to_right_ascension, parse_degrees};
use exorecon_types::{
    Attribute, AttributeDelta, CatalogNode, ChangeSet, EntityChangeRecord, LocalCatalog,
    Measurement, Planet, RemoteRow, Star, System, ALIAS_SEPARATOR,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default base for provenance links.
pub const DEFAULT_REFERENCE_BASE: &str = "http://exoplanet.eu/catalog/";

/// Configuration for the change-set builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Prefix of every provenance link; should end with `/`.
    pub reference_base_url: String,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            reference_base_url: DEFAULT_REFERENCE_BASE.to_string(),
        }
    }
}

/// Builds a [`ChangeSet`] from a batch of remote rows and a local snapshot.
#[derive(Debug, Clone, Default)]
pub struct ChangeSetBuilder {
    config: ReconcileConfig,
}

/// Per-row context shared by every record built from that row.
struct RowContext<'a> {
    row: &'a RemoteRow,
    star_aliases: Vec<String>,
    planet_aliases: Vec<String>,
    reference: String,
}

impl ChangeSetBuilder {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Reconciles a whole batch, rows in order.
    pub fn reconcile(&self, rows: &[RemoteRow], catalog: &LocalCatalog) -> DiffResult<ChangeSet> {
        let mut changes = ChangeSet::new();
        for row in rows {
            self.reconcile_row(row, catalog, &mut changes)?;
        }
        info!(
            rows = rows.len(),
            systems = changes.len(),
            deltas = changes.delta_count(),
            "Reconciliation complete"
        );
        Ok(changes)
    }

    /// Reconciles one row into an existing change-set.
    pub fn reconcile_row(
        &self,
        row: &RemoteRow,
        catalog: &LocalCatalog,
        changes: &mut ChangeSet,
    ) -> DiffResult<()> {
        let ctx = RowContext {
            row,
            star_aliases: row.star_aliases(),
            planet_aliases: row.planet_aliases(),
            reference: provenance_link(&self.config.reference_base_url, row.planet_name()),
        };

        for system in &catalog.systems {
            for star in &system.stars {
                if !has_matching_name(star, &ctx.star_aliases) {
                    continue;
                }
                debug!(
                    planet = row.planet_name(),
                    system = system.primary_name(),
                    star = star.primary_name(),
                    "Row matched star"
                );
                self.apply_star_match(&ctx, system, star, changes)?;
            }
        }
        Ok(())
    }

    fn apply_star_match(
        &self,
        ctx: &RowContext<'_>,
        system: &System,
        star: &Star,
        changes: &mut ChangeSet,
    ) -> DiffResult<()> {
        let system_name = system.primary_name();
        let star_name = star.primary_name();

        if let Some(record) = system_record(ctx, system)? {
            changes.merge_system(system_name, record);
        }
        if let Some(record) = star_record(ctx, star)? {
            changes.merge_star(system_name, star_name, record);
        }

        let mut found_planet = false;
        for planet in &star.planets {
            if !has_matching_name(planet, &ctx.planet_aliases) {
                continue;
            }
            found_planet = true;
            if let Some(record) = planet_record(ctx, planet)? {
                changes.merge_planet(system_name, star_name, planet.primary_name(), record);
            }
        }

        if !found_planet {
            if let Some(record) = new_planet_record(ctx) {
                debug!(
                    planet = ctx.row.planet_name(),
                    star = star_name,
                    "No local planet matched; recording as new"
                );
                changes.merge_planet(system_name, star_name, ctx.row.planet_name(), record);
            }
        }
        Ok(())
    }
}

fn system_record(ctx: &RowContext<'_>, system: &System) -> DiffResult<Option<EntityChangeRecord>> {
    let mut record = compare_fields(system, ctx.row, EntityKind::System.fields())?;
    if !record.has_changes() {
        return Ok(None);
    }
    record.reference = Some(ctx.reference.clone());
    Ok(Some(record))
}

fn star_record(ctx: &RowContext<'_>, star: &Star) -> DiffResult<Option<EntityChangeRecord>> {
    let record = compare_fields(star, ctx.row, EntityKind::Star.fields())?;
    Ok(finish_matched(ctx, record, new_aliases(star, &ctx.star_aliases)))
}

fn planet_record(ctx: &RowContext<'_>, planet: &Planet) -> DiffResult<Option<EntityChangeRecord>> {
    let record = compare_fields(planet, ctx.row, EntityKind::Planet.fields())?;
    Ok(finish_matched(ctx, record, new_aliases(planet, &ctx.planet_aliases)))
}

/// Adds aliases, flag and link to a matched star or planet record; `None` if
/// nothing changed.
fn finish_matched(
    ctx: &RowContext<'_>,
    mut record: EntityChangeRecord,
    aliases: Vec<String>,
) -> Option<EntityChangeRecord> {
    if !aliases.is_empty() {
        record.new_names = Some(aliases.join(ALIAS_SEPARATOR));
    }
    if !record.has_changes() {
        return None;
    }
    record.is_new = Some(false);
    record.reference = Some(ctx.reference.clone());
    Some(record)
}

/// Record for a planet the local catalog does not have yet. Every non-blank
/// mapped column becomes a delta with an absent local side.
fn new_planet_record(ctx: &RowContext<'_>) -> Option<EntityChangeRecord> {
    let mut record = EntityChangeRecord::new();
    for mapping in EntityKind::Planet.fields() {
        let raw = ctx.row.get(mapping.column);
        if raw.is_empty() {
            continue;
        }
        let value = local_synonym(raw).unwrap_or(raw);
        record.insert(
            mapping.attribute,
            AttributeDelta::new(
                Measurement::absent(),
                remote_measurement(ctx.row, mapping.column, value),
            ),
        );
    }
    if record.attributes.is_empty() {
        return None;
    }

    let raw_aliases = ctx.row.planet_alternate_names();
    if !raw_aliases.is_empty() {
        record.new_names = Some(raw_aliases.to_string());
    }
    record.is_new = Some(true);
    record.reference = Some(ctx.reference.clone());
    Some(record)
}

/// Compares every mapped attribute of `node` with the row. Blank remote
/// columns are skipped: the remote catalog has nothing to propose there.
fn compare_fields<N: CatalogNode>(
    node: &N,
    row: &RemoteRow,
    fields: &[FieldMapping],
) -> DiffResult<EntityChangeRecord> {
    let mut record = EntityChangeRecord::new();
    for mapping in fields {
        let raw = row.get(mapping.column);
        if raw.is_empty() {
            continue;
        }
        let attribute = mapping.attribute;
        let remote = remote_value(attribute, raw)
            .map_err(|e| e.on_entity(row.planet_name(), attribute))?;
        let equal = same_value(attribute, node.text(attribute), &remote)
            .map_err(|e| e.on_entity(node.primary_name(), attribute))?;
        if equal {
            continue;
        }
        record.insert(
            attribute,
            AttributeDelta::new(
                local_measurement(node, attribute),
                remote_measurement(row, mapping.column, remote),
            ),
        );
    }
    Ok(record)
}

/// Converts a raw remote value into the local representation. Only
/// coordinates differ: the remote catalog stores them in decimal degrees.
fn remote_value(attribute: Attribute, raw: &str) -> DiffResult<String> {
    Ok(match attribute {
        Attribute::RightAscension => degrees_to_right_ascension(parse_degrees(raw)?),
        Attribute::Declination => degrees_to_declination(parse_degrees(raw)?),
        _ => raw.to_string(),
    })
}
