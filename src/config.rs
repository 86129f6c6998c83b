use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Global configuration for the component decorator pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformConfig {
    /// Skips the single-export module check.
    pub is_testing: bool,
    /// Name of the component-defining class decorator.
    pub decorator_name: String,
    /// Class decorators stripped by the caller before the pass runs.
    /// The component decorator itself is never stripped here.
    pub decorators_to_remove: Vec<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            is_testing: false,
            decorator_name: "Component".to_string(),
            decorators_to_remove: vec![],
        }
    }
}

impl TransformConfig {
    pub fn testing() -> Self {
        TransformConfig {
            is_testing: true,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
