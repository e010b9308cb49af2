//! Form implementation and the validation pass

use super::live::LiveState;
use super::trace_builder::TraceBuilder;
use crate::builder::FormBuilder;
use crate::config::FormConfig;
use crate::error::{Result, SdkError};
use crate::field::{FieldEvaluation, FieldSlot};
use crate::result::{FieldError, ValidationResult};
use formcheck_core::{Context, FieldOutcome, FormState};
use std::cell::RefCell;
use std::collections::HashMap;

/// A validated form
///
/// The field list is fixed once built. Values are re-read from their
/// sources on every pass. `Form` does no locking: calls must be serialized
/// by the caller, typically by confining the form to one UI thread.
pub struct Form {
    pub(super) config: FormConfig,
    pub(super) fields: Vec<Box<dyn FieldSlot>>,
    pub(super) live: HashMap<String, LiveState>,
    pub(super) next_token: u64,
    /// Outcome of each field's latest evaluation, seen by conditions during
    /// single-field revalidation
    pub(super) outcomes: RefCell<HashMap<String, FieldOutcome>>,
}

impl Form {
    /// Create a builder
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    pub(crate) fn new(config: FormConfig, fields: Vec<Box<dyn FieldSlot>>) -> Self {
        let mut form = Self {
            config,
            fields,
            live: HashMap::new(),
            next_token: 0,
            outcomes: RefCell::new(HashMap::new()),
        };
        if form.config.live_by_default {
            let ids: Vec<String> = form.fields.iter().map(|f| f.id().to_string()).collect();
            for id in ids {
                form.subscribe(id);
            }
        }
        form
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Field ids in registration order
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.id()).collect()
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.position(field_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(super) fn position(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == field_id)
    }

    pub(super) fn require(&self, field_id: &str) -> Result<usize> {
        self.position(field_id)
            .ok_or_else(|| SdkError::NotFound(field_id.to_string()))
    }

    /// Run a full pass with no external context
    pub fn validate(&self) -> Result<ValidationResult> {
        self.validate_with(&Context::new())
    }

    /// Run a full pass over every field in registration order
    ///
    /// Fails only when a value source is unavailable; no partial result is
    /// produced in that case.
    pub fn validate_with(&self, context: &Context) -> Result<ValidationResult> {
        let mut state = FormState::with_context(context.clone());
        let mut trace = TraceBuilder::new(self.config.enable_trace);
        let mut errors = Vec::new();
        let mut values = Vec::new();

        for field in &self.fields {
            let id = field.id();
            match field.evaluate(&state)? {
                FieldEvaluation::Skipped { condition } => {
                    tracing::debug!(form = %self.config.name, field = %id, condition = %condition, "field skipped");
                    state.record_outcome(id, FieldOutcome::Skipped);
                    trace.skipped(id, &condition);
                }
                FieldEvaluation::Evaluated {
                    value,
                    error,
                    assertions_run,
                } => {
                    state.record_value(id, value.clone());
                    values.push((id.to_string(), value));
                    match error {
                        Some(error) => {
                            let assertion = error.assertion().unwrap_or_default();
                            tracing::debug!(form = %self.config.name, field = %id, assertion = %assertion, "field failed");
                            state.record_outcome(id, FieldOutcome::Invalid);
                            trace.failed(id, assertion, assertions_run);
                            errors.push(error);
                        }
                        None => {
                            tracing::debug!(form = %self.config.name, field = %id, assertions_run, "field passed");
                            state.record_outcome(id, FieldOutcome::Valid);
                            trace.passed(id, assertions_run);
                        }
                    }
                }
            }
        }

        tracing::info!(
            form = %self.config.name,
            fields = self.fields.len(),
            errors = errors.len(),
            "validation pass complete"
        );
        *self.outcomes.borrow_mut() = state.into_outcomes();

        Ok(ValidationResult::new(errors)
            .with_values(values)
            .with_trace(trace.finish()))
    }

    /// Revalidate one field with no external context
    pub fn validate_field(&self, field_id: &str) -> Result<Option<FieldError>> {
        self.validate_field_with(field_id, &Context::new())
    }

    /// Revalidate one field in isolation
    ///
    /// No other field's assertions run. Conditions see the caller's context
    /// and, for each earlier field whose own conditions hold, its current
    /// value and last recorded outcome. An earlier field whose source is
    /// unavailable contributes no value; only the target's own source can
    /// fail the call.
    pub fn validate_field_with(&self, field_id: &str, context: &Context) -> Result<Option<FieldError>> {
        let index = self.require(field_id)?;
        let state = self.earlier_state(index, context);

        let (outcome, error) = match self.fields[index].evaluate(&state)? {
            FieldEvaluation::Skipped { condition } => {
                tracing::debug!(form = %self.config.name, field = %field_id, condition = %condition, "field skipped");
                (FieldOutcome::Skipped, None)
            }
            FieldEvaluation::Evaluated { error: Some(error), .. } => (FieldOutcome::Invalid, Some(error)),
            FieldEvaluation::Evaluated { error: None, .. } => (FieldOutcome::Valid, None),
        };
        self.outcomes.borrow_mut().insert(field_id.to_string(), outcome);
        Ok(error)
    }

    /// Snapshot of the fields registered before `index`, gated the same way
    /// a full pass gates them
    fn earlier_state(&self, index: usize, context: &Context) -> FormState {
        let outcomes = self.outcomes.borrow();
        let mut state = FormState::with_context(context.clone());

        for earlier in &self.fields[..index] {
            let id = earlier.id();
            if earlier.skipped_by(&state).is_some() {
                state.record_outcome(id, FieldOutcome::Skipped);
                continue;
            }
            if let Some(outcome) = outcomes.get(id) {
                state.record_outcome(id, *outcome);
            }
            match earlier.read_value() {
                Ok(value) => state.record_value(id, value),
                Err(e) => {
                    tracing::debug!(form = %self.config.name, field = %id, error = %e, "earlier value unavailable, left unset");
                }
            }
        }
        state
    }

    /// Push a pass result to every field's display callback, in registration
    /// order; fields without an error receive `None`.
    pub fn present(&self, result: &ValidationResult) {
        for field in &self.fields {
            field.present(result.error_for(field.id()));
        }
    }

    /// Validate, present the result, and run `on_success` if it passed
    pub fn submit<F>(&self, on_success: F) -> Result<ValidationResult>
    where
        F: FnOnce(&ValidationResult),
    {
        let result = self.validate()?;
        self.present(&result);
        if result.success() {
            on_success(&result);
        } else {
            tracing::debug!(form = %self.config.name, errors = result.errors().len(), "submit blocked");
        }
        Ok(result)
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("config", &self.config)
            .field("fields", &self.field_ids())
            .field("live", &self.live.len())
            .finish()
    }
}
