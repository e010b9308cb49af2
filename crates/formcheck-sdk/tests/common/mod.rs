//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use formcheck_sdk::{Assertion, Binding, FieldError, ValidationResult};
use std::cell::Cell;
use std::rc::Rc;

/// Text binding helper
pub fn text(value: &str) -> Binding<String> {
    Binding::new(value.to_string())
}

/// Assertion that records how many times it was evaluated
#[derive(Clone)]
pub struct Spy {
    calls: Rc<Cell<usize>>,
    passes: bool,
}

impl Spy {
    pub fn passing() -> Self {
        Self {
            calls: Rc::new(Cell::new(0)),
            passes: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Rc::new(Cell::new(0)),
            passes: false,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<T> Assertion<T> for Spy {
    fn name(&self) -> &str {
        "spy"
    }

    fn is_valid(&self, _value: &T) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.passes
    }

    fn description(&self) -> String {
        "spy failed".to_string()
    }
}

/// Assertions on validation results
pub trait ResultAssertions {
    fn assert_success(&self);
    fn assert_errors(&self, expected: &[(&str, &str)]);
}

impl ResultAssertions for ValidationResult {
    fn assert_success(&self) {
        assert!(self.success(), "expected success, got {:?}", self.errors());
        assert!(self.errors().is_empty());
    }

    fn assert_errors(&self, expected: &[(&str, &str)]) {
        assert!(!self.success(), "expected failure");
        let actual: Vec<(&str, &str)> = self
            .errors()
            .iter()
            .map(|e: &FieldError| (e.field_id(), e.message()))
            .collect();
        assert_eq!(actual, expected);
    }
}
