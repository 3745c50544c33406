//! Enumerated attribute identifiers of the local catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named attribute of a local catalog node.
///
/// The serialized form is the tag name used by the local catalog, so a
/// change-set keyed by `Attribute` reads the same as the catalog itself.
/// Some identifiers (`Mass`, `Radius`, `Temperature`) are shared between
/// stars and planets; which kinds use which attributes is decided by the
/// field mapping table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "rightascension")]
    RightAscension,
    #[serde(rename = "declination")]
    Declination,
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "mass")]
    Mass,
    #[serde(rename = "radius")]
    Radius,
    #[serde(rename = "magI")]
    MagI,
    #[serde(rename = "magV")]
    MagV,
    #[serde(rename = "magJ")]
    MagJ,
    #[serde(rename = "magH")]
    MagH,
    #[serde(rename = "magK")]
    MagK,
    #[serde(rename = "metallicity")]
    Metallicity,
    #[serde(rename = "spectraltype")]
    SpectralType,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "period")]
    Period,
    #[serde(rename = "semimajoraxis")]
    SemiMajorAxis,
    #[serde(rename = "eccentricity")]
    Eccentricity,
    #[serde(rename = "periastron")]
    Periastron,
    #[serde(rename = "periastrontime")]
    PeriastronTime,
    #[serde(rename = "discoverymethod")]
    DiscoveryMethod,
    #[serde(rename = "discoveryyear")]
    DiscoveryYear,
    #[serde(rename = "inclination")]
    Inclination,
    #[serde(rename = "transittime")]
    TransitTime,
    #[serde(rename = "impactparameter")]
    ImpactParameter,
}

impl Attribute {
    /// Every attribute identifier, in declaration order.
    pub const ALL: [Attribute; 24] = [
        Attribute::RightAscension,
        Attribute::Declination,
        Attribute::Distance,
        Attribute::Mass,
        Attribute::Radius,
        Attribute::MagI,
        Attribute::MagV,
        Attribute::MagJ,
        Attribute::MagH,
        Attribute::MagK,
        Attribute::Metallicity,
        Attribute::SpectralType,
        Attribute::Temperature,
        Attribute::Age,
        Attribute::Period,
        Attribute::SemiMajorAxis,
        Attribute::Eccentricity,
        Attribute::Periastron,
        Attribute::PeriastronTime,
        Attribute::DiscoveryMethod,
        Attribute::DiscoveryYear,
        Attribute::Inclination,
        Attribute::TransitTime,
        Attribute::ImpactParameter,
    ];

    /// Returns the local catalog tag name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Attribute::RightAscension => "rightascension",
            Attribute::Declination => "declination",
            Attribute::Distance => "distance",
            Attribute::Mass => "mass",
            Attribute::Radius => "radius",
            Attribute::MagI => "magI",
            Attribute::MagV => "magV",
            Attribute::MagJ => "magJ",
            Attribute::MagH => "magH",
            Attribute::MagK => "magK",
            Attribute::Metallicity => "metallicity",
            Attribute::SpectralType => "spectraltype",
            Attribute::Temperature => "temperature",
            Attribute::Age => "age",
            Attribute::Period => "period",
            Attribute::SemiMajorAxis => "semimajoraxis",
            Attribute::Eccentricity => "eccentricity",
            Attribute::Periastron => "periastron",
            Attribute::PeriastronTime => "periastrontime",
            Attribute::DiscoveryMethod => "discoverymethod",
            Attribute::DiscoveryYear => "discoveryyear",
            Attribute::Inclination => "inclination",
            Attribute::TransitTime => "transittime",
            Attribute::ImpactParameter => "impactparameter",
        }
    }

    /// Returns true for right ascension and declination, whose local values
    /// are sexagesimal strings rather than plain numbers.
    pub const fn is_coordinate(&self) -> bool {
        matches!(self, Attribute::RightAscension | Attribute::Declination)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| format!("unknown attribute: {s}"))
    }
}
