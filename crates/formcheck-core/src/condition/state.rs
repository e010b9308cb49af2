//! Form state snapshot handed to conditions

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// External state supplied by the caller for one pass
pub type Context = HashMap<String, Value>;

/// What a field contributed to the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOutcome {
    /// Every applicable assertion passed
    Valid,
    /// An assertion failed
    Invalid,
    /// A field condition was false; not applicable this pass
    Skipped,
}

/// Snapshot of the form as seen by a condition
///
/// During a full pass the snapshot grows in registration order, so a
/// condition sees the values and outcomes of fields registered before the
/// field it gates. During single-field revalidation it holds the current
/// values of applicable earlier fields and their last recorded outcomes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<String, Value>,
    outcomes: HashMap<String, FieldOutcome>,
    context: Context,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: Context) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    /// Value read from a field earlier in this pass
    pub fn value(&self, field_id: &str) -> Option<&Value> {
        self.values.get(field_id)
    }

    /// Outcome of a field evaluated earlier in this pass
    pub fn outcome(&self, field_id: &str) -> Option<FieldOutcome> {
        self.outcomes.get(field_id).copied()
    }

    /// Caller-supplied external state
    pub fn context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// Truthiness of a context entry; missing keys are false
    pub fn flag(&self, key: &str) -> bool {
        self.context(key).map(Value::is_truthy).unwrap_or(false)
    }

    pub fn record_value(&mut self, field_id: impl Into<String>, value: Value) {
        self.values.insert(field_id.into(), value);
    }

    pub fn record_outcome(&mut self, field_id: impl Into<String>, outcome: FieldOutcome) {
        self.outcomes.insert(field_id.into(), outcome);
    }

    /// Consume the snapshot, keeping only the recorded outcomes
    pub fn into_outcomes(self) -> HashMap<String, FieldOutcome> {
        self.outcomes
    }
}
