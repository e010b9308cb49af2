//! Configuration types for Form

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};

/// Form configuration
///
/// ```yaml
/// name: signup
/// enable_trace: true
/// live_by_default: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form name, used in log output
    pub name: String,

    /// Attach a `PassTrace` to every `ValidationResult`
    pub enable_trace: bool,

    /// Subscribe every field to live revalidation when the form is built
    pub live_by_default: bool,
}

impl FormConfig {
    /// Create a new form configuration
    pub fn new() -> Self {
        Self {
            name: "form".to_string(),
            enable_trace: false,
            live_by_default: false,
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SdkError::ConfigParse(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SdkError::ConfigParse(e.to_string()))
    }

    /// Set the form name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable pass tracing
    pub fn enable_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }

    /// Enable live revalidation for every field
    pub fn live_by_default(mut self, enable: bool) -> Self {
        self.live_by_default = enable;
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}
