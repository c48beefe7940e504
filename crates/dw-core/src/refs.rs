//! References a model uses to name the other end of a wire.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a connection request points at before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRef {
    /// Network element identifier (bus, branch, generator...).
    Static(String),
    /// Identifier of an already-built dynamic model.
    Dynamic(String),
}

impl TargetRef {
    pub fn id(&self) -> &str {
        match self {
            TargetRef::Static(id) | TargetRef::Dynamic(id) => id,
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetRef::Static(id) => write!(f, "static '{id}'"),
            TargetRef::Dynamic(id) => write!(f, "dynamic model '{id}'"),
        }
    }
}

/// One of the two sides of a two-terminal element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn number(self) -> u32 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    pub fn from_number(value: u32) -> Result<Self, CoreError> {
        match value {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            _ => Err(CoreError::InvalidSide { value }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::One => "ONE",
            Side::Two => "TWO",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONE" => Ok(Side::One),
            "TWO" => Ok(Side::Two),
            _ => Err(CoreError::InvalidSideName {
                value: s.to_string(),
            }),
        }
    }
}

/// Terminal of a network element; `side` is set for two-terminal elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalRef {
    pub equipment: String,
    pub side: Option<Side>,
}

impl TerminalRef {
    pub fn new(equipment: impl Into<String>) -> Self {
        Self {
            equipment: equipment.into(),
            side: None,
        }
    }

    pub fn with_side(equipment: impl Into<String>, side: Side) -> Self {
        Self {
            equipment: equipment.into(),
            side: Some(side),
        }
    }
}

impl fmt::Display for TerminalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Some(side) => write!(f, "{} (side {})", self.equipment, side),
            None => f.write_str(&self.equipment),
        }
    }
}
