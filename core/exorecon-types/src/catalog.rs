//! The local hierarchical catalog.
//!
//! A read-only tree of systems, stars and planets. Each node carries one or
//! more names (the first is the primary name) and a set of attributes keyed by
//! [`Attribute`]. Parsing the catalog's native format is the caller's job; the
//! serde derives here only cover snapshots that were already converted.

use crate::Attribute;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The value of one attribute on a local node, with its optional error bars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeNode {
    /// Text content. Empty when the node exists but carries no text.
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "errorminus", skip_serializing_if = "Option::is_none")]
    pub error_minus: Option<String>,
    #[serde(default, rename = "errorplus", skip_serializing_if = "Option::is_none")]
    pub error_plus: Option<String>,
}

impl AttributeNode {
    /// A node with text and no error bars.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error_minus: None,
            error_plus: None,
        }
    }

    /// A node with text and both error bars.
    pub fn with_errors(
        text: impl Into<String>,
        error_minus: impl Into<String>,
        error_plus: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            error_minus: Some(error_minus.into()),
            error_plus: Some(error_plus.into()),
        }
    }
}

/// Read access shared by every node kind of the local catalog.
pub trait CatalogNode {
    /// All known names, primary name first.
    fn names(&self) -> &[String];

    /// All attributes present on this node.
    fn attributes(&self) -> &BTreeMap<Attribute, AttributeNode>;

    /// The primary name, or `""` for a node without any name.
    fn primary_name(&self) -> &str {
        self.names().first().map(String::as_str).unwrap_or("")
    }

    /// The attribute node, if present.
    fn attribute(&self, attribute: Attribute) -> Option<&AttributeNode> {
        self.attributes().get(&attribute)
    }

    /// The attribute's text, if the attribute is present.
    fn text(&self, attribute: Attribute) -> Option<&str> {
        self.attribute(attribute).map(|node| node.text.as_str())
    }
}

macro_rules! catalog_node {
    ($ty:ident) => {
        impl $ty {
            /// Creates a node with the given primary name.
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    names: vec![name.into()],
                    ..Default::default()
                }
            }

            /// Adds an alternate name.
            #[must_use]
            pub fn with_alias(mut self, name: impl Into<String>) -> Self {
                self.names.push(name.into());
                self
            }

            /// Sets an attribute value without error bars.
            #[must_use]
            pub fn with_attribute(mut self, attribute: Attribute, text: impl Into<String>) -> Self {
                self.attributes.insert(attribute, AttributeNode::new(text));
                self
            }

            /// Sets an attribute node, error bars included.
            #[must_use]
            pub fn with_node(mut self, attribute: Attribute, node: AttributeNode) -> Self {
                self.attributes.insert(attribute, node);
                self
            }
        }

        impl CatalogNode for $ty {
            fn names(&self) -> &[String] {
                &self.names
            }

            fn attributes(&self) -> &BTreeMap<Attribute, AttributeNode> {
                &self.attributes
            }
        }
    };
}

/// Reads an attribute map, dropping tags that are not an [`Attribute`].
fn known_attributes<'de, D>(deserializer: D) -> Result<BTreeMap<Attribute, AttributeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, AttributeNode>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(tag, node)| tag.parse::<Attribute>().ok().map(|attr| (attr, node)))
        .collect())
}

/// A planet, the leaf of the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub names: Vec<String>,
    #[serde(
        default,
        deserialize_with = "known_attributes",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub attributes: BTreeMap<Attribute, AttributeNode>,
}

/// A star and the planets orbiting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub names: Vec<String>,
    #[serde(
        default,
        deserialize_with = "known_attributes",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub attributes: BTreeMap<Attribute, AttributeNode>,
    #[serde(default)]
    pub planets: Vec<Planet>,
}

/// A planetary system and its stars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub names: Vec<String>,
    #[serde(
        default,
        deserialize_with = "known_attributes",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub attributes: BTreeMap<Attribute, AttributeNode>,
    #[serde(default)]
    pub stars: Vec<Star>,
}

catalog_node!(Planet);
catalog_node!(Star);
catalog_node!(System);

impl Star {
    /// Adds a planet.
    #[must_use]
    pub fn with_planet(mut self, planet: Planet) -> Self {
        self.planets.push(planet);
        self
    }
}

impl System {
    /// Adds a star.
    #[must_use]
    pub fn with_star(mut self, star: Star) -> Self {
        self.stars.push(star);
        self
    }
}

/// A snapshot of the whole local catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalCatalog {
    #[serde(default)]
    pub systems: Vec<System>,
}

impl LocalCatalog {
    pub fn new(systems: Vec<System>) -> Self {
        Self { systems }
    }

    /// Loads a snapshot from its JSON form.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of systems, stars and planets in the snapshot.
    pub fn counts(&self) -> (usize, usize, usize) {
        let stars = self.systems.iter().map(|s| s.stars.len()).sum();
        let planets = self
            .systems
            .iter()
            .flat_map(|s| &s.stars)
            .map(|star| star.planets.len())
            .sum();
        (self.systems.len(), stars, planets)
    }
}
