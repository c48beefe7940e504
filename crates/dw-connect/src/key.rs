//! Connector key derivation.

use core::fmt;

use dw_core::Side;
use serde::{Deserialize, Serialize};

/// Separator between key components.
pub const KEY_SEPARATOR: char = '|';

/// Disambiguator appended to a key when one type pair needs several wirings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectorSuffix {
    None,
    Side(Side),
    /// Numbered slot, rendered as `N<n>`.
    Ordinal(u32),
    Custom(String),
}

impl ConnectorSuffix {
    /// Rendered suffix, `None` when no suffix applies.
    pub fn render(&self) -> Option<String> {
        match self {
            ConnectorSuffix::None => None,
            ConnectorSuffix::Side(side) => Some(side.as_str().to_string()),
            ConnectorSuffix::Ordinal(n) => Some(ordinal_token(*n)),
            ConnectorSuffix::Custom(s) => Some(s.clone()),
        }
    }
}

/// Fixed token pattern for numbered slots.
pub fn ordinal_token(n: u32) -> String {
    format!("N{n}")
}

/// Deduplication key of a connector template.
///
/// Same origin type, destination type and suffix always give the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorKey(String);

impl ConnectorKey {
    pub fn new(origin_type: &str, destination_type: &str, suffix: &ConnectorSuffix) -> Self {
        let mut key = String::with_capacity(origin_type.len() + destination_type.len() + 8);
        key.push_str(origin_type);
        key.push(KEY_SEPARATOR);
        key.push_str(destination_type);
        if let Some(s) = suffix.render() {
            key.push(KEY_SEPARATOR);
            key.push_str(&s);
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Type pair and suffix a connector key is rendered from.
///
/// Distinct sources can render to the same key text (`Side(One)` and
/// `Custom("ONE")`), so templates remember the source they were created for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySource {
    pub origin_type: String,
    pub destination_type: String,
    pub suffix: ConnectorSuffix,
}

impl KeySource {
    pub fn new(
        origin_type: impl Into<String>,
        destination_type: impl Into<String>,
        suffix: ConnectorSuffix,
    ) -> Self {
        Self {
            origin_type: origin_type.into(),
            destination_type: destination_type.into(),
            suffix,
        }
    }

    pub fn key(&self) -> ConnectorKey {
        ConnectorKey::new(&self.origin_type, &self.destination_type, &self.suffix)
    }
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin_type, self.destination_type)?;
        match &self.suffix {
            ConnectorSuffix::None => Ok(()),
            ConnectorSuffix::Side(side) => write!(f, " (side {side})"),
            ConnectorSuffix::Ordinal(n) => write!(f, " (slot {n})"),
            ConnectorSuffix::Custom(s) => write!(f, " (group '{s}')"),
        }
    }
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ConnectorKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ConnectorKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
