//! Length comparisons

use super::bound::{Bound, BoundSlot};
use super::Assertion;
use crate::error::Result;

/// Values with a measurable length
pub trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for String {
    /// Length in characters, not bytes
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength> HasLength for Option<T> {
    fn length(&self) -> usize {
        self.as_ref().map(HasLength::length).unwrap_or(0)
    }
}

/// Asserts the value's length against a single bound
///
/// ```rust
/// use formcheck_core::assertion::{Assertion, Length};
///
/// let length = Length::new().exactly(5);
/// assert!(length.is_valid(&"hello".to_string()));
/// assert_eq!(Assertion::<String>::description(&length), "length must be exactly 5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Length {
    slot: BoundSlot<usize>,
}

impl Length {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exactly(self, n: usize) -> Self {
        self.with(Bound::Exact(n))
    }

    pub fn less_than(self, n: usize) -> Self {
        self.with(Bound::LessThan(n))
    }

    pub fn at_most(self, n: usize) -> Self {
        self.with(Bound::AtMost(n))
    }

    pub fn at_least(self, n: usize) -> Self {
        self.with(Bound::AtLeast(n))
    }

    pub fn greater_than(self, n: usize) -> Self {
        self.with(Bound::GreaterThan(n))
    }

    fn with(mut self, bound: Bound<usize>) -> Self {
        self.slot.set(bound);
        self
    }

    pub fn bound(&self) -> Bound<usize> {
        self.slot.bound()
    }
}

impl<T: HasLength> Assertion<T> for Length {
    fn name(&self) -> &str {
        "length"
    }

    fn is_valid(&self, value: &T) -> bool {
        self.slot.bound().admits(value.length())
    }

    fn description(&self) -> String {
        match self.slot.bound().phrase() {
            Some(phrase) => format!("length must be {}", phrase),
            None => "no bound set".to_string(),
        }
    }

    fn check_config(&self) -> Result<()> {
        self.slot.check()
    }
}
