//! Connector templates and the first-use ordered template map.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{ConnectError, ConnectResult};
use crate::key::{ConnectorKey, KeySource};
use crate::variable::{INDEX_PLACEHOLDER, VariableConnection};

/// How a template's variable names relate to its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateShape {
    /// Variable names are used as-is by every instance.
    Plain,
    /// Variable names carry the index placeholder, filled per instance.
    Indexed,
}

/// A reusable, immutable list of variable pairs shared by every instance
/// pair of one connector key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorTemplate {
    #[serde(rename = "id")]
    key: ConnectorKey,
    #[serde(skip)]
    shape: TemplateShape,
    #[serde(skip)]
    source: KeySource,
    connections: Vec<VariableConnection>,
}

impl ConnectorTemplate {
    pub fn key(&self) -> &ConnectorKey {
        &self.key
    }

    pub fn shape(&self) -> TemplateShape {
        self.shape
    }

    pub fn connections(&self) -> &[VariableConnection] {
        &self.connections
    }

    /// Type pair and suffix the template was created for.
    pub fn source(&self) -> &KeySource {
        &self.source
    }
}

/// Whether a lookup created a template or reused a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateEntry {
    Created,
    Reused,
}

/// Template map keyed by connector key, iterated in first-use order.
#[derive(Debug, Clone, Default)]
pub struct TemplateMap {
    /// Templates in first-use order.
    templates: Vec<ConnectorTemplate>,
    /// Reverse lookup: key -> position in `templates`.
    index: HashMap<ConnectorKey, usize>,
}

impl TemplateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, key: &ConnectorKey) -> Option<&ConnectorTemplate> {
        self.index.get(key).map(|&i| &self.templates[i])
    }

    pub fn contains(&self, key: &ConnectorKey) -> bool {
        self.index.contains_key(key)
    }

    /// All templates in first-use order.
    pub fn as_slice(&self) -> &[ConnectorTemplate] {
        &self.templates
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectorTemplate> {
        self.templates.iter()
    }

    /// Return the template stored under the key of `source`, computing it
    /// with `make` on first occurrence only.
    ///
    /// A stored template created for another source or shape is rejected
    /// without calling `make`. Indexed templates must carry the index
    /// placeholder.
    pub(crate) fn get_or_create<F>(
        &mut self,
        source: &KeySource,
        shape: TemplateShape,
        make: F,
    ) -> ConnectResult<TemplateEntry>
    where
        F: FnOnce() -> Vec<VariableConnection>,
    {
        let key = source.key();
        if let Some(&i) = self.index.get(&key) {
            let stored = &self.templates[i];
            if stored.source != *source {
                return Err(ConnectError::InconsistentTemplate {
                    reason: format!("created for {}, requested for {source}", stored.source),
                    key,
                });
            }
            if stored.shape != shape {
                return Err(ConnectError::InconsistentTemplate {
                    reason: format!("stored as {:?}, requested as {shape:?}", stored.shape),
                    key,
                });
            }
            return Ok(TemplateEntry::Reused);
        }

        let connections = make();
        if shape == TemplateShape::Indexed && !connections.iter().any(|c| c.is_indexed()) {
            return Err(ConnectError::MissingPlaceholder {
                key,
                placeholder: INDEX_PLACEHOLDER,
            });
        }

        self.index.insert(key.clone(), self.templates.len());
        self.templates.push(ConnectorTemplate {
            key,
            shape,
            source: source.clone(),
            connections,
        });
        Ok(TemplateEntry::Created)
    }

    /// Check that `connections` matches the list stored under `key`.
    pub(crate) fn verify(
        &self,
        key: &ConnectorKey,
        connections: &[VariableConnection],
    ) -> ConnectResult<()> {
        let stored = self
            .get(key)
            .ok_or_else(|| ConnectError::DanglingConnector { key: key.clone() })?;
        if stored.connections != connections {
            return Err(ConnectError::InconsistentTemplate {
                key: key.clone(),
                reason: format!(
                    "stored {} pair(s), requested {} pair(s) with different names",
                    stored.connections.len(),
                    connections.len()
                ),
            });
        }
        Ok(())
    }

    /// Position of each key, for consistency checks.
    pub(crate) fn positions(&self) -> &HashMap<ConnectorKey, usize> {
        &self.index
    }
}
