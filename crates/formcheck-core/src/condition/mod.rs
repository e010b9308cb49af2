//! Conditions
//!
//! A condition gates whether a field, or a single assertion, participates in
//! a pass. Conditions are pure predicates over an explicit `FormState`
//! snapshot and are evaluated fresh on every pass.
//!
//! # Groups
//!
//! - `ConditionGroup::All` - every child holds (AND)
//! - `ConditionGroup::Any` - at least one child holds (OR)
//! - `ConditionGroup::Not` - no child holds
//!
//! # Example
//!
//! ```rust
//! use formcheck_core::condition::{Condition, ConditionGroup, ContextFlag, FieldEquals, FormState};
//! use formcheck_core::Value;
//!
//! let gate = ConditionGroup::any(vec![
//!     Box::new(FieldEquals::new("newsletter", Value::Bool(true))),
//!     Box::new(ContextFlag::new("force_email")),
//! ]);
//!
//! let mut state = FormState::new();
//! state.record_value("newsletter", Value::Bool(true));
//! assert!(gate.holds(&state));
//! ```

mod state;

pub use state::{Context, FieldOutcome, FormState};

use crate::types::Value;
use std::fmt;

/// A gating predicate over the current form state
pub trait Condition {
    /// Name used in traces and logs
    fn name(&self) -> &str;

    fn holds(&self, state: &FormState) -> bool;
}

/// Named closure condition
pub struct When<F> {
    name: String,
    predicate: F,
}

impl<F> When<F>
where
    F: Fn(&FormState) -> bool,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> Condition for When<F>
where
    F: Fn(&FormState) -> bool,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn holds(&self, state: &FormState) -> bool {
        (self.predicate)(state)
    }
}

impl<F> fmt::Debug for When<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Logical grouping of conditions
pub enum ConditionGroup {
    All(Vec<Box<dyn Condition>>),
    Any(Vec<Box<dyn Condition>>),
    Not(Vec<Box<dyn Condition>>),
}

impl ConditionGroup {
    pub fn all(conditions: Vec<Box<dyn Condition>>) -> Self {
        ConditionGroup::All(conditions)
    }

    pub fn any(conditions: Vec<Box<dyn Condition>>) -> Self {
        ConditionGroup::Any(conditions)
    }

    pub fn not(conditions: Vec<Box<dyn Condition>>) -> Self {
        ConditionGroup::Not(conditions)
    }
}

impl Condition for ConditionGroup {
    fn name(&self) -> &str {
        match self {
            ConditionGroup::All(_) => "all",
            ConditionGroup::Any(_) => "any",
            ConditionGroup::Not(_) => "not",
        }
    }

    fn holds(&self, state: &FormState) -> bool {
        match self {
            ConditionGroup::All(conditions) => conditions.iter().all(|c| c.holds(state)),
            ConditionGroup::Any(conditions) => conditions.iter().any(|c| c.holds(state)),
            ConditionGroup::Not(conditions) => !conditions.iter().any(|c| c.holds(state)),
        }
    }
}

/// Holds when an earlier field's value equals `expected`
#[derive(Debug, Clone)]
pub struct FieldEquals {
    name: String,
    field: String,
    expected: Value,
}

impl FieldEquals {
    pub fn new(field: impl Into<String>, expected: Value) -> Self {
        let field = field.into();
        Self {
            name: format!("{} equals", field),
            field,
            expected,
        }
    }
}

impl Condition for FieldEquals {
    fn name(&self) -> &str {
        &self.name
    }

    fn holds(&self, state: &FormState) -> bool {
        state.value(&self.field) == Some(&self.expected)
    }
}

/// Holds when an earlier field was evaluated and passed this pass
///
/// During single-field revalidation the earlier field is not re-run; the
/// outcome is the one recorded by the latest full pass or revalidation of
/// that field. Before any such evaluation the condition does not hold.
#[derive(Debug, Clone)]
pub struct FieldIsValid {
    name: String,
    field: String,
}

impl FieldIsValid {
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            name: format!("{} is valid", field),
            field,
        }
    }
}

impl Condition for FieldIsValid {
    fn name(&self) -> &str {
        &self.name
    }

    fn holds(&self, state: &FormState) -> bool {
        state.outcome(&self.field) == Some(FieldOutcome::Valid)
    }
}

/// Holds when a context entry is truthy
#[derive(Debug, Clone)]
pub struct ContextFlag {
    key: String,
}

impl ContextFlag {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Condition for ContextFlag {
    fn name(&self) -> &str {
        &self.key
    }

    fn holds(&self, state: &FormState) -> bool {
        state.flag(&self.key)
    }
}
