//! Caller-supplied predicate assertion

use super::Assertion;
use std::fmt;

/// Wraps an arbitrary closure as an assertion
///
/// ```rust
/// use formcheck_core::assertion::{Assertion, Predicate};
///
/// let even = Predicate::new("even", "must be even", |n: &i64| n % 2 == 0);
/// assert!(even.is_valid(&4_i64));
/// ```
pub struct Predicate<F> {
    name: String,
    description: String,
    predicate: F,
}

impl<F> Predicate<F> {
    pub fn new(name: impl Into<String>, description: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            predicate,
        }
    }
}

impl<T, F> Assertion<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
