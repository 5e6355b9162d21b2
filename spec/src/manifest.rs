//! Declaration manifests.
//!
//! A manifest describes an ontology as data, in TOML or JSON:
//!
//! ```toml
//! [ontology]
//! base_iri = "http://example.org/drums#"
//! prefix = "drums"
//!
//! [[entity]]
//! name = "Drumhead"
//! parent = "Thing"
//! comments = ["Generic drumhead class"]
//! version_info = "0.1"
//! ```
//!
//! Entities are expanded and registered in file order, so a parent must
//! appear before its children.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DeclError;
use crate::expand::expand_entity;
use crate::model::{AttributeMap, Literal};
use crate::registry::Ontology;

/// Ontology-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyHeader {
    /// Base IRI for entity names.
    pub base_iri: String,
    /// Prefix used in Turtle and JSON-LD output.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Ontology label.
    #[serde(default)]
    pub label: Option<String>,
    /// Ontology version.
    #[serde(default)]
    pub version: Option<String>,
}

fn default_prefix() -> String {
    "ont".to_owned()
}

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A list.
    Many(Vec<Literal>),
    /// A single value.
    One(Literal),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<Literal> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

/// One `[[entity]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEntry {
    /// Local name.
    pub name: String,
    /// Local name of the parent.
    pub parent: String,
    /// Attribute keys in manifest spelling.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, OneOrMany>,
}

impl EntityEntry {
    /// Validates the raw attributes into an [`AttributeMap`].
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys, malformed expressions, or values of
    /// the wrong shape.
    pub fn attribute_map(&self) -> Result<AttributeMap, DeclError> {
        let mut map = AttributeMap::new();
        for (key, value) in &self.attributes {
            map.insert_raw(key, value.clone().into_vec())?;
        }
        Ok(map)
    }
}

/// A parsed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Ontology header.
    pub ontology: OntologyHeader,
    /// Entities in declaration order.
    #[serde(default, rename = "entity")]
    pub entities: Vec<EntityEntry>,
}

impl Manifest {
    /// Parses a TOML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`DeclError::Toml`] on malformed input.
    pub fn from_toml_str(s: &str) -> Result<Self, DeclError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a JSON manifest.
    ///
    /// Available with the `json` feature.
    ///
    /// # Errors
    ///
    /// Returns [`DeclError::Json`] on malformed input.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, DeclError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a manifest, choosing the format from the file extension.
    /// `.json` is only recognized with the `json` feature.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    pub fn from_path(path: &Path) -> Result<Self, DeclError> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, DeclError> = match format.as_deref() {
            Some("toml") => Self::from_toml_str,
            #[cfg(feature = "json")]
            Some("json") => Self::from_json_str,
            _ => {
                return Err(DeclError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        let text = std::fs::read_to_string(path).map_err(|source| DeclError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = parse(&text)?;
        info!(
            path = %path.display(),
            entities = manifest.entities.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Expands every entity and registers it, in file order.
    ///
    /// # Errors
    ///
    /// Returns the first attribute or registry error encountered.
    pub fn into_ontology(self) -> Result<Ontology, DeclError> {
        let header = self.ontology;
        let mut ontology = Ontology::new(header.base_iri)?.with_prefix(header.prefix)?;
        if let Some(label) = header.label {
            ontology = ontology.with_label(label);
        }
        if let Some(version) = header.version {
            ontology = ontology.with_version(version);
        }
        for entry in &self.entities {
            let attributes = entry.attribute_map()?;
            ontology.declare(expand_entity(&entry.name, &entry.parent, &attributes))?;
        }
        Ok(ontology)
    }
}
