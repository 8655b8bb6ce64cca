//! Catalog of documented software entities.
//!
//! A catalog is an ordered list of [`EntityDescriptor`]s, each describing one
//! class or structure together with its fields and methods. Catalogs are plain
//! YAML data; the catalog of the reference project ships with the crate and is
//! available through [`Catalog::builtin`].
//!
//! ```yaml
//! entities:
//!   - kind: class
//!     name: Foo
//!     summary: A thing.
//!     fields:
//!       - code: int x
//!         description: the x
//!     methods: []
//! ```
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source of the built-in catalog.
pub const BUILTIN_CATALOG: &str = include_str!("../../catalog/modules.yaml");

/// Kind of a described entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Structure,
}

/// One field or method line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDescriptor {
    /// Signature or snippet, rendered in the monospace font.
    #[serde(default)]
    pub code: String,
    /// Optional prose explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemDescriptor {
    pub fn new(code: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            code: code.into(),
            description: description.map(str::to_string),
        }
    }

    /// The code token with surrounding whitespace removed.
    pub fn code_text(&self) -> &str {
        self.code.trim()
    }

    /// The description with surrounding whitespace removed; `None` when absent or blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// True when the item carries neither code nor description.
    pub fn is_blank(&self) -> bool {
        self.code_text().is_empty() && self.description_text().is_none()
    }
}

/// One described module (class or structure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub fields: Vec<ItemDescriptor>,
    #[serde(default)]
    pub methods: Vec<ItemDescriptor>,
}

impl EntityDescriptor {
    pub fn new(kind: EntityKind, name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            summary: summary.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_field(mut self, code: &str, description: Option<&str>) -> Self {
        self.fields.push(ItemDescriptor::new(code, description));
        self
    }

    pub fn with_method(mut self, code: &str, description: Option<&str>) -> Self {
        self.methods.push(ItemDescriptor::new(code, description));
        self
    }
}

/// How strictly [`Catalog::validate`] treats degenerate entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Blank items are reported and rendered as marker plus punctuation.
    #[default]
    Lenient,
    /// Blank items are rejected.
    Strict,
}

/// Ordered, immutable sequence of entity descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    entities: Vec<EntityDescriptor>,
}

impl Catalog {
    pub fn new(entities: Vec<EntityDescriptor>) -> Self {
        Self { entities }
    }

    /// Parse the catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Catalog(e.to_string()))
    }

    /// Read and parse a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            entities = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    /// Iterate entities with their 1-based ordinals.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &EntityDescriptor)> {
        self.entities.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Check every entity against `policy`.
    ///
    /// A blank entity name is always an error. Items with neither code nor
    /// description are an error under [`ValidationPolicy::Strict`] and a
    /// warning otherwise.
    pub fn validate(&self, policy: ValidationPolicy) -> Result<()> {
        for (ordinal, entity) in self.numbered() {
            if entity.name.trim().is_empty() {
                return Err(Error::InvalidEntity {
                    index: ordinal,
                    name: entity.name.clone(),
                    reason: "entity name is empty".to_string(),
                });
            }

            let lists = [("fields", &entity.fields), ("methods", &entity.methods)];
            for (list_name, items) in lists {
                for (pos, item) in items.iter().enumerate() {
                    if !item.is_blank() {
                        continue;
                    }
                    match policy {
                        ValidationPolicy::Strict => {
                            return Err(Error::InvalidEntity {
                                index: ordinal,
                                name: entity.name.clone(),
                                reason: format!(
                                    "item {} of {} has neither code nor description",
                                    pos + 1,
                                    list_name
                                ),
                            });
                        },
                        ValidationPolicy::Lenient => {
                            tracing::warn!(
                                entity = %entity.name,
                                list = list_name,
                                item = pos + 1,
                                "blank item will render as marker and punctuation only"
                            );
                        },
                    }
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<EntityDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = EntityDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
