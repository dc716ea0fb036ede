//! Catalog loading and lookup.
//!
//! The attribute catalog is scraped from the Tomcat documentation and shipped
//! as one JSON document with `connectors` sections, `valves`, and the scraped
//! `tomcatVersion`. This module deserializes that document, applies the valve
//! inheritance preprocessor once, and answers the two lookups the session
//! needs: the flattened attribute list for a connector, and a valve by name.
//!
//! Strict mode is the default, as unknown keys in a hand-edited catalog are
//! almost always typos: they are collected with `serde_ignored` and reported
//! together, each with the offending path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TomfigError;
use crate::inherit::merge_inherited;
use crate::types::{AttributeSpec, ConnectorKind, Section, ValveKind};

/// A parsed attribute catalog. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "tomcatVersion", default, skip_serializing_if = "Option::is_none")]
    pub tomcat_version: Option<String>,
    #[serde(default)]
    pub connectors: Vec<Section>,
    #[serde(default)]
    pub valves: Vec<ValveKind>,
}

impl Catalog {
    /// Build a catalog from already-typed parts. Applies the valve
    /// inheritance preprocessor, like the JSON constructors.
    pub fn new(connectors: Vec<Section>, valves: Vec<ValveKind>) -> Self {
        Catalog {
            tomcat_version: None,
            connectors,
            valves: merge_inherited(valves),
        }
    }

    /// Parse a catalog from a JSON string, rejecting unknown keys.
    pub fn from_json(content: &str) -> Result<Self, TomfigError> {
        parse(content, Path::new("<catalog>"), true)
    }

    /// Parse a catalog from a JSON string, ignoring unknown keys.
    pub fn from_json_lenient(content: &str) -> Result<Self, TomfigError> {
        parse(content, Path::new("<catalog>"), false)
    }

    /// Load a catalog from a JSON file, rejecting unknown keys.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TomfigError> {
        let path = path.as_ref();
        let content = read(path)?;
        parse(&content, path, true)
    }

    /// Load a catalog from a JSON file, ignoring unknown keys.
    pub fn from_path_lenient(path: impl AsRef<Path>) -> Result<Self, TomfigError> {
        let path = path.as_ref();
        let content = read(path)?;
        parse(&content, path, false)
    }

    /// Flatten the sections relevant to `connector` into one attribute list,
    /// stamping each attribute with its section name.
    ///
    /// A section is relevant if any of the connector's matchers accepts its
    /// name. Section order (and attribute order within a section) is
    /// preserved; it is the display order.
    pub fn parameters_for(&self, connector: &ConnectorKind) -> Vec<AttributeSpec> {
        self.connectors
            .iter()
            .filter(|section| {
                connector
                    .section_matchers
                    .iter()
                    .any(|m| m.matches(&section.name))
            })
            .flat_map(|section| {
                section.attributes.iter().map(|attribute| {
                    let mut attribute = attribute.clone();
                    attribute.section = section.name.clone();
                    attribute
                })
            })
            .collect()
    }

    /// Look up a valve by exact name. Returns `None` unless exactly one valve
    /// matches.
    pub fn valve(&self, name: &str) -> Option<&ValveKind> {
        let mut matching = self.valves.iter().filter(|v| v.name == name);
        match (matching.next(), matching.next()) {
            (Some(valve), None) => Some(valve),
            _ => None,
        }
    }
}

fn read(path: &Path) -> Result<String, TomfigError> {
    std::fs::read_to_string(path).map_err(|e| TomfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse(content: &str, path: &Path, strict: bool) -> Result<Catalog, TomfigError> {
    let mut catalog = if strict {
        let mut unknown_keys: Vec<String> = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let catalog: Catalog =
            serde_ignored::deserialize(&mut deserializer, |ignored_path| {
                unknown_keys.push(ignored_path.to_string());
            })
            .map_err(|e| TomfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !unknown_keys.is_empty() {
            return Err(TomfigError::UnknownKeys(
                unknown_keys
                    .into_iter()
                    .map(|key| TomfigError::UnknownKey {
                        key,
                        path: path.to_path_buf(),
                    })
                    .collect(),
            ));
        }
        catalog
    } else {
        serde_json::from_str(content).map_err(|e| TomfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    catalog.valves = merge_inherited(catalog.valves);
    Ok(catalog)
}
