//! Variable pairs carried by connector templates.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Token an indexed connector places in variable names; replaced per instance.
pub const INDEX_PLACEHOLDER: &str = "@INDEX@";

/// One wire: a variable on the origin model and one on the destination model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableConnection {
    #[serde(rename = "var1")]
    pub origin: String,
    #[serde(rename = "var2")]
    pub destination: String,
}

impl VariableConnection {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Whether either side carries the index placeholder.
    pub fn is_indexed(&self) -> bool {
        self.origin.contains(INDEX_PLACEHOLDER) || self.destination.contains(INDEX_PLACEHOLDER)
    }

    /// Copy with the index placeholder replaced on both sides.
    pub fn with_index(&self, index: u32) -> Self {
        Self {
            origin: substitute_index(&self.origin, index),
            destination: substitute_index(&self.destination, index),
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for VariableConnection {
    fn from((origin, destination): (A, B)) -> Self {
        Self::new(origin, destination)
    }
}

impl fmt::Display for VariableConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Replace every index placeholder in `name` with `index`.
pub fn substitute_index(name: &str, index: u32) -> String {
    name.replace(INDEX_PLACEHOLDER, &index.to_string())
}

/// Build a variable list from `(origin, destination)` pairs.
pub fn pairs<I, A, B>(items: I) -> Vec<VariableConnection>
where
    I: IntoIterator<Item = (A, B)>,
    A: Into<String>,
    B: Into<String>,
{
    items.into_iter().map(VariableConnection::from).collect()
}
