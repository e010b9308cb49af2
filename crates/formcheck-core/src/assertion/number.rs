//! Numeric comparisons

use super::bound::{Bound, BoundSlot};
use super::Assertion;
use crate::error::Result;

/// Values that can be interpreted as a number
pub trait AsNumber {
    /// `None` when the value is not numeric
    fn as_number(&self) -> Option<f64>;
}

impl AsNumber for String {
    fn as_number(&self) -> Option<f64> {
        match self.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            Ok(_) => None,
            Err(e) => {
                log::debug!("not a number {:?}: {}", self, e);
                None
            }
        }
    }
}

impl AsNumber for f64 {
    fn as_number(&self) -> Option<f64> {
        Some(*self).filter(|n| n.is_finite())
    }
}

impl AsNumber for f32 {
    fn as_number(&self) -> Option<f64> {
        Some(f64::from(*self)).filter(|n| n.is_finite())
    }
}

impl AsNumber for i64 {
    fn as_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl AsNumber for i32 {
    fn as_number(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsNumber for u32 {
    fn as_number(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsNumber for usize {
    fn as_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl<T: AsNumber> AsNumber for Option<T> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(AsNumber::as_number)
    }
}

/// Asserts the value is numeric and satisfies a single bound
///
/// Non-numeric values fail with the bound's message.
#[derive(Debug, Clone, Default)]
pub struct Number {
    slot: BoundSlot<f64>,
}

impl Number {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exactly(self, n: f64) -> Self {
        self.with(Bound::Exact(n))
    }

    pub fn less_than(self, n: f64) -> Self {
        self.with(Bound::LessThan(n))
    }

    pub fn at_most(self, n: f64) -> Self {
        self.with(Bound::AtMost(n))
    }

    pub fn at_least(self, n: f64) -> Self {
        self.with(Bound::AtLeast(n))
    }

    pub fn greater_than(self, n: f64) -> Self {
        self.with(Bound::GreaterThan(n))
    }

    fn with(mut self, bound: Bound<f64>) -> Self {
        self.slot.set(bound);
        self
    }

    pub fn bound(&self) -> Bound<f64> {
        self.slot.bound()
    }
}

impl<T: AsNumber> Assertion<T> for Number {
    fn name(&self) -> &str {
        "number"
    }

    fn is_valid(&self, value: &T) -> bool {
        value
            .as_number()
            .map(|n| self.slot.bound().admits(n))
            .unwrap_or(false)
    }

    fn description(&self) -> String {
        match self.slot.bound().phrase() {
            Some(phrase) => format!("must be {}", phrase),
            None => "no bound set".to_string(),
        }
    }

    fn check_config(&self) -> Result<()> {
        self.slot.check()
    }
}

/// Asserts the value parses as a number
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNumber;

impl<T: AsNumber> Assertion<T> for IsNumber {
    fn name(&self) -> &str {
        "is_number"
    }

    fn is_valid(&self, value: &T) -> bool {
        value.as_number().is_some()
    }

    fn description(&self) -> String {
        "must be a number".to_string()
    }
}
