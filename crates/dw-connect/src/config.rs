//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConnectResult;

/// What happens when a request reuses an existing connector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCheck {
    /// Keep the stored template; the variable function is not called again.
    #[default]
    FirstWins,
    /// Call the variable function again and fail if its output differs.
    Verify,
}

/// Knobs for one `ConnectionRegistry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub template_check: TemplateCheck,
    /// Reject targets whose destination attribute list is empty.
    pub require_to_attributes: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            template_check: TemplateCheck::FirstWins,
            require_to_attributes: true,
        }
    }
}

impl RegistryConfig {
    /// Strict profile for reference runs: reused templates are re-checked.
    pub fn verifying() -> Self {
        Self {
            template_check: TemplateCheck::Verify,
            ..Self::default()
        }
    }

    pub fn from_json_str(content: &str) -> ConnectResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
