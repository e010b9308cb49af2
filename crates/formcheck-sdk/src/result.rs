//! Validation pass results

use formcheck_core::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field's reported failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assertion: Option<String>,
    message: String,
}

impl FieldError {
    pub fn new(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            label: None,
            assertion: None,
            message: message.into(),
        }
    }

    /// Display name of the field
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Name of the assertion that failed
    pub fn with_assertion(mut self, assertion: impl Into<String>) -> Self {
        self.assertion = Some(assertion.into());
        self
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn assertion(&self) -> Option<&str> {
        self.assertion.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.label.as_deref().unwrap_or(&self.field_id);
        write!(f, "{}: {}", name, self.message)
    }
}

/// Outcome of one validation pass
///
/// `success()` is true exactly when `errors()` is empty. Errors and values
/// follow field registration order. Only produced by a pass, so it is
/// serializable but not deserializable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    success: bool,
    errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<(String, Value)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace: Option<PassTrace>,
}

impl ValidationResult {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
            values: Vec::new(),
            trace: None,
        }
    }

    pub(crate) fn with_values(mut self, values: Vec<(String, Value)>) -> Self {
        self.values = values;
        self
    }

    pub(crate) fn with_trace(mut self, trace: Option<PassTrace>) -> Self {
        self.trace = trace;
        self
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn has_errors(&self) -> bool {
        !self.success
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error reported for a field, if any
    pub fn error_for(&self, field_id: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field_id == field_id)
    }

    /// Values read during the pass; skipped fields are absent
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    pub fn value(&self, field_id: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, value)| value)
    }

    /// Per-field trace, present when tracing is enabled on the form
    pub fn trace(&self) -> Option<&PassTrace> {
        self.trace.as_ref()
    }
}

/// Per-field record of a traced pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTrace {
    pub fields: Vec<FieldTrace>,
}

impl PassTrace {
    pub fn field(&self, field_id: &str) -> Option<&FieldTrace> {
        self.fields.iter().find(|t| t.field_id == field_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTrace {
    pub field_id: String,
    pub status: TraceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TraceStatus {
    /// A field condition was false
    Skipped { condition: String },
    Passed { assertions_run: usize },
    Failed {
        assertion: String,
        assertions_run: usize,
    },
}
