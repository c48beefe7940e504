//! Ordered attribute lists.
//!
//! An attribute list addresses one model instance on one end of a wire.
//! Order is significant: it is preserved verbatim in the exported artifacts.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Checked constructor: the key must not be empty.
    pub fn try_new(key: impl Into<String>, value: impl Into<String>) -> CoreResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(CoreError::EmptyIdentifier {
                what: "attribute key",
            });
        }
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    /// Origin-side model identifier.
    pub fn id1(id: impl Into<String>) -> Self {
        Self::new("id1", id)
    }

    /// Destination-side model identifier.
    pub fn id2(id: impl Into<String>) -> Self {
        Self::new("id2", id)
    }

    /// Origin-side index, used by indexed connections.
    pub fn index1(index: u32) -> Self {
        Self::new("index1", index.to_string())
    }

    /// Origin-side name, used to disambiguate network elements.
    pub fn name1(name: impl Into<String>) -> Self {
        Self::new("name1", name)
    }

    /// Destination-side name, used to disambiguate network elements.
    pub fn name2(name: impl Into<String>) -> Self {
        Self::new("name2", name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered attribute list.
///
/// Built once when a model instance is created, then only read or
/// concatenated into fresh lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this list with `attr` appended.
    pub fn with(&self, attr: Attribute) -> Self {
        let mut items = self.0.clone();
        items.push(attr);
        Self(items)
    }

    /// Return a new list holding `self` followed by `other`.
    pub fn concat(&self, other: &Attributes) -> Self {
        let mut items = Vec::with_capacity(self.0.len() + other.0.len());
        items.extend_from_slice(&self.0);
        items.extend_from_slice(&other.0);
        Self(items)
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.0
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(items: Vec<Attribute>) -> Self {
        Self(items)
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{attr}")?;
        }
        write!(f, "]")
    }
}
