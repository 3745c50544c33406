//! Static correspondence between local attributes and remote columns.
//!
//! This is the single boundary where local [`Attribute`] identifiers are
//! translated to remote column names. The tables are hand-curated for exactly
//! one pair of catalogs and are iterated in declaration order.

use exorecon_types::Attribute;

/// One local attribute and the remote column carrying the same quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub attribute: Attribute,
    pub column: &'static str,
}

impl FieldMapping {
    const fn new(attribute: Attribute, column: &'static str) -> Self {
        Self { attribute, column }
    }
}

/// The three node kinds of the local catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    System,
    Star,
    Planet,
}

impl EntityKind {
    /// The mapping table for this kind.
    pub fn fields(self) -> &'static [FieldMapping] {
        match self {
            EntityKind::System => SYSTEM_FIELDS,
            EntityKind::Star => STAR_FIELDS,
            EntityKind::Planet => PLANET_FIELDS,
        }
    }

    /// The remote column mapped to `attribute` for this kind, if any.
    pub fn column_for(self, attribute: Attribute) -> Option<&'static str> {
        self.fields()
            .iter()
            .find(|m| m.attribute == attribute)
            .map(|m| m.column)
    }
}

pub static SYSTEM_FIELDS: &[FieldMapping] = &[
    FieldMapping::new(Attribute::RightAscension, "ra"),
    FieldMapping::new(Attribute::Declination, "dec"),
    FieldMapping::new(Attribute::Distance, "star_distance"),
];

pub static STAR_FIELDS: &[FieldMapping] = &[
    FieldMapping::new(Attribute::Mass, "star_mass"),
    FieldMapping::new(Attribute::Radius, "star_radius"),
    FieldMapping::new(Attribute::MagI, "mag_i"),
    FieldMapping::new(Attribute::MagV, "mag_v"),
    FieldMapping::new(Attribute::MagJ, "mag_j"),
    FieldMapping::new(Attribute::MagH, "mag_h"),
    FieldMapping::new(Attribute::MagK, "mag_k"),
    FieldMapping::new(Attribute::Metallicity, "star_metallicity"),
    FieldMapping::new(Attribute::SpectralType, "star_sp_type"),
    FieldMapping::new(Attribute::Temperature, "star_teff"),
    FieldMapping::new(Attribute::Age, "star_age"),
];

pub static PLANET_FIELDS: &[FieldMapping] = &[
    FieldMapping::new(Attribute::Mass, "mass"),
    FieldMapping::new(Attribute::Radius, "radius"),
    FieldMapping::new(Attribute::Period, "orbital_period"),
    FieldMapping::new(Attribute::SemiMajorAxis, "semi_major_axis"),
    FieldMapping::new(Attribute::Eccentricity, "eccentricity"),
    FieldMapping::new(Attribute::Periastron, "omega"),
    FieldMapping::new(Attribute::PeriastronTime, "tperi"),
    FieldMapping::new(Attribute::DiscoveryMethod, "detection_type"),
    FieldMapping::new(Attribute::DiscoveryYear, "discovered"),
    FieldMapping::new(Attribute::Inclination, "inclination"),
    FieldMapping::new(Attribute::TransitTime, "tzero_tr"),
    FieldMapping::new(Attribute::Temperature, "temp_calculated"),
    FieldMapping::new(Attribute::ImpactParameter, "impact_parameter"),
];

/// A pair of values that differ lexically between the catalogs but mean the
/// same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSynonym {
    pub local: &'static str,
    pub remote: &'static str,
}

pub static VALUE_SYNONYMS: &[ValueSynonym] = &[
    ValueSynonym {
        local: "transit",
        remote: "Primary Transit",
    },
    ValueSynonym {
        local: "RV",
        remote: "Radial Velocity",
    },
];

/// The remote spelling of a local value, if the value has a synonym.
pub fn remote_synonym(local: &str) -> Option<&'static str> {
    VALUE_SYNONYMS
        .iter()
        .find(|s| s.local == local)
        .map(|s| s.remote)
}

/// The local spelling of a remote value, if the value has a synonym.
pub fn local_synonym(remote: &str) -> Option<&'static str> {
    VALUE_SYNONYMS
        .iter()
        .find(|s| s.remote == remote)
        .map(|s| s.local)
}
