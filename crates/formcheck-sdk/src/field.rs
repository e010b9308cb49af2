//! Fields and the per-field builder
//!
//! A field binds an id to a value source, an ordered list of assertions and
//! zero or more conditions. Evaluation follows a fixed order:
//!
//! 1. Field conditions, AND-ed, stopping at the first false one. A false
//!    condition makes the field not applicable for the pass.
//! 2. Read the value from the source.
//! 3. Assertions in registration order; assertions whose own conditions are
//!    false are skipped. The first failing assertion produces the field's
//!    single error and ends evaluation.

use crate::error::{Result, SdkError};
use crate::result::FieldError;
use crate::source::ValueSource;
use formcheck_core::{Assertion, Condition, CoreError, FormState, Value, Verdict};
use std::rc::Rc;

pub(crate) type ErrorCallback = Box<dyn Fn(&str, Option<&FieldError>)>;

pub(crate) struct AssertionEntry<T> {
    assertion: Box<dyn Assertion<T>>,
    conditions: Vec<Rc<dyn Condition>>,
    description: Option<String>,
}

impl<T> AssertionEntry<T> {
    fn applies(&self, state: &FormState) -> bool {
        self.conditions.iter().all(|c| c.holds(state))
    }
}

/// Result of evaluating one field
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldEvaluation {
    Skipped {
        condition: String,
    },
    Evaluated {
        value: Value,
        error: Option<FieldError>,
        assertions_run: usize,
    },
}

pub(crate) struct Field<T> {
    id: String,
    label: Option<String>,
    source: Box<dyn ValueSource<T>>,
    assertions: Vec<AssertionEntry<T>>,
    conditions: Vec<Box<dyn Condition>>,
    on_error: Option<ErrorCallback>,
}

impl<T> Field<T> {
    fn read(&self) -> Result<T> {
        self.source.read().map_err(|e| {
            tracing::warn!(field = %self.id, reason = %e.reason, "value source unavailable");
            SdkError::Unavailable {
                field: self.id.clone(),
                reason: e.reason,
            }
        })
    }

    fn error(&self, assertion: &str, message: String) -> FieldError {
        let error = FieldError::new(&self.id, message).with_assertion(assertion);
        match &self.label {
            Some(label) => error.with_label(label),
            None => error,
        }
    }
}

/// Type-erased view of a field, so one form can hold fields of any value type
pub(crate) trait FieldSlot {
    fn id(&self) -> &str;

    /// Name of the first field condition that is false, if any
    fn skipped_by(&self, state: &FormState) -> Option<String>;

    fn evaluate(&self, state: &FormState) -> Result<FieldEvaluation>;

    /// Current value without running conditions or assertions
    fn read_value(&self) -> Result<Value>;

    /// Push an error (or its absence) to the display callback
    fn present(&self, error: Option<&FieldError>);
}

impl<T> FieldSlot for Field<T>
where
    T: Into<Value>,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn skipped_by(&self, state: &FormState) -> Option<String> {
        self.conditions
            .iter()
            .find(|c| !c.holds(state))
            .map(|c| c.name().to_string())
    }

    fn evaluate(&self, state: &FormState) -> Result<FieldEvaluation> {
        if let Some(condition) = self.skipped_by(state) {
            return Ok(FieldEvaluation::Skipped { condition });
        }

        let value = self.read()?;
        let mut assertions_run = 0;
        let mut error = None;

        for entry in &self.assertions {
            if !entry.applies(state) {
                continue;
            }
            assertions_run += 1;
            if let Verdict::Fail(message) = entry.assertion.verdict(&value) {
                let message = entry.description.clone().unwrap_or(message);
                error = Some(self.error(entry.assertion.name(), message));
                break;
            }
        }

        Ok(FieldEvaluation::Evaluated {
            value: value.into(),
            error,
            assertions_run,
        })
    }

    fn read_value(&self) -> Result<Value> {
        self.read().map(Into::into)
    }

    fn present(&self, error: Option<&FieldError>) {
        if let Some(callback) = &self.on_error {
            callback(&self.id, error);
        }
    }
}

/// Configuration surface for one field
///
/// Obtained from `FormBuilder::field`; everything configured here is frozen
/// once the form is built.
pub struct FieldBuilder<T> {
    id: String,
    label: Option<String>,
    assertions: Vec<AssertionEntry<T>>,
    conditions: Vec<Box<dyn Condition>>,
    block_conditions: Vec<Rc<dyn Condition>>,
    on_error: Option<ErrorCallback>,
    config_error: Option<CoreError>,
}

impl<T> FieldBuilder<T> {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            assertions: Vec::new(),
            conditions: Vec::new(),
            block_conditions: Vec::new(),
            on_error: None,
            config_error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name carried on this field's errors
    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Attach an assertion after the ones already attached
    ///
    /// A configuration error reported by the assertion is surfaced when the
    /// form is built.
    pub fn assert<A>(&mut self, assertion: A) -> AssertionHandle<'_, T>
    where
        A: Assertion<T> + 'static,
    {
        if let Err(e) = assertion.check_config() {
            tracing::debug!(field = %self.id, error = %e, "assertion configuration rejected");
            self.config_error.get_or_insert(e);
        }

        let index = self.assertions.len();
        self.assertions.push(AssertionEntry {
            assertion: Box::new(assertion),
            conditions: self.block_conditions.clone(),
            description: None,
        });
        AssertionHandle {
            entry: &mut self.assertions[index],
        }
    }

    /// Gate the whole field; every condition must hold for it to apply
    pub fn conditional(&mut self, condition: impl Condition + 'static) -> &mut Self {
        self.conditions.push(Box::new(condition));
        self
    }

    /// Gate every assertion attached inside `configure`
    pub fn conditional_block<F>(&mut self, condition: impl Condition + 'static, configure: F) -> &mut Self
    where
        F: FnOnce(&mut FieldBuilder<T>),
    {
        self.block_conditions.push(Rc::new(condition));
        configure(self);
        self.block_conditions.pop();
        self
    }

    /// Display callback, invoked with the field's error or `None`
    pub fn on_error(&mut self, callback: impl Fn(&str, Option<&FieldError>) + 'static) -> &mut Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    pub(crate) fn build(self, source: Box<dyn ValueSource<T>>) -> std::result::Result<Field<T>, CoreError> {
        if let Some(e) = self.config_error {
            return Err(e);
        }
        Ok(Field {
            id: self.id,
            label: self.label,
            source,
            assertions: self.assertions,
            conditions: self.conditions,
            on_error: self.on_error,
        })
    }
}

/// Per-assertion configuration, returned by `FieldBuilder::assert`
pub struct AssertionHandle<'a, T> {
    entry: &'a mut AssertionEntry<T>,
}

impl<'a, T> AssertionHandle<'a, T> {
    /// Replace the assertion's failure message
    pub fn description(self, description: impl Into<String>) -> Self {
        self.entry.description = Some(description.into());
        self
    }

    /// Gate this assertion only
    pub fn when(self, condition: impl Condition + 'static) -> Self {
        self.entry.conditions.push(Rc::new(condition));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Binding;
    use formcheck_core::assertion::{Email, IsNotEmpty, Length};
    use formcheck_core::When;

    fn text_field(value: &str, configure: impl FnOnce(&mut FieldBuilder<String>)) -> Field<String> {
        let mut builder = FieldBuilder::new("text");
        configure(&mut builder);
        builder
            .build(Box::new(Binding::new(value.to_string())))
            .unwrap()
    }

    #[test]
    fn test_no_assertions_passes() {
        let field = text_field("", |_| {});
        let evaluation = field.evaluate(&FormState::new()).unwrap();
        assert_eq!(
            evaluation,
            FieldEvaluation::Evaluated {
                value: Value::from(""),
                error: None,
                assertions_run: 0,
            }
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let field = text_field("", |f| {
            f.assert(IsNotEmpty);
            f.assert(Email);
        });
        match field.evaluate(&FormState::new()).unwrap() {
            FieldEvaluation::Evaluated {
                error: Some(error),
                assertions_run,
                ..
            } => {
                assert_eq!(error.message(), "cannot be empty");
                assert_eq!(error.assertion(), Some("is_not_empty"));
                assert_eq!(assertions_run, 1);
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_description_override_and_label() {
        let field = text_field("abc", |f| {
            f.label("Code");
            f.assert(Length::new().exactly(5)).description("codes have five characters");
        });
        match field.evaluate(&FormState::new()).unwrap() {
            FieldEvaluation::Evaluated {
                error: Some(error), ..
            } => {
                assert_eq!(error.message(), "codes have five characters");
                assert_eq!(error.label(), Some("Code"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_field_condition_skips() {
        let field = text_field("", |f| {
            f.conditional(When::new("never", |_: &FormState| false));
            f.assert(IsNotEmpty);
        });
        assert_eq!(
            field.evaluate(&FormState::new()).unwrap(),
            FieldEvaluation::Skipped {
                condition: "never".to_string()
            }
        );
    }

    #[test]
    fn test_assertion_condition_skips_only_that_assertion() {
        let field = text_field("", |f| {
            f.assert(IsNotEmpty).when(When::new("never", |_: &FormState| false));
        });
        match field.evaluate(&FormState::new()).unwrap() {
            FieldEvaluation::Evaluated {
                error, assertions_run, ..
            } => {
                assert!(error.is_none());
                assert_eq!(assertions_run, 0);
            }
            other => panic!("Expected evaluation, got {:?}", other),
        }
    }

    #[test]
    fn test_conditional_block_scopes_conditions() {
        let field = text_field("", |f| {
            f.conditional_block(When::new("never", |_: &FormState| false), |f| {
                f.assert(IsNotEmpty);
            });
            f.assert(Length::new().at_least(1)).description("outside block");
        });
        match field.evaluate(&FormState::new()).unwrap() {
            FieldEvaluation::Evaluated {
                error: Some(error),
                assertions_run,
                ..
            } => {
                assert_eq!(error.message(), "outside block");
                assert_eq!(assertions_run, 1);
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_surfaces_on_build() {
        let mut builder: FieldBuilder<String> = FieldBuilder::new("text");
        builder.assert(Length::new().exactly(5).at_most(9));
        let result = builder.build(Box::new(Binding::new(String::new())));
        assert!(matches!(result, Err(CoreError::ConflictingBounds { .. })));
    }

    #[test]
    fn test_unavailable_source() {
        let binding = Binding::new("x".to_string());
        let builder: FieldBuilder<String> = FieldBuilder::new("text");
        let field = builder.build(Box::new(binding.clone())).unwrap();
        binding.detach();
        assert!(matches!(
            field.evaluate(&FormState::new()),
            Err(SdkError::Unavailable { .. })
        ));
    }
}
