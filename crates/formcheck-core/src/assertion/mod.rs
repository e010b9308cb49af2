//! Assertions
//!
//! An assertion is a predicate over a field value paired with a human
//! readable failure description. The engine only depends on the `Assertion`
//! contract; the families in this module are the reusable library:
//!
//! - `IsEmpty` / `IsNotEmpty` (emptiness)
//! - `Length` and `Number` (bounded comparisons, one `Bound` per instance)
//! - `Contains` (substring, optional case-insensitivity)
//! - `Matches`, `Email`, `WebUrl` (patterns)
//! - `Uri` (structured value with scheme whitelist and custom checks)
//! - `IsChecked` / `IsNotChecked` (checkable values)
//! - `Predicate` (caller-supplied closure)
//!
//! `is_valid` is total: parse failures and other internal faults inside an
//! assertion become a failing verdict, never an error.

pub mod bound;
mod checkable;
mod length;
mod number;
mod pattern;
mod predicate;
mod text;
mod uri;

pub use bound::{Bound, BoundSlot};
pub use checkable::{IsChecked, IsNotChecked};
pub use length::{HasLength, Length};
pub use number::{AsNumber, IsNumber, Number};
pub use pattern::{Email, Matches, WebUrl};
pub use predicate::Predicate;
pub use text::{Contains, IsEmpty, IsNotEmpty};
pub use uri::Uri;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one assertion against one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The value satisfies the assertion
    Pass,
    /// The value fails; carries the message to surface
    Fail(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(message) => Some(message),
        }
    }
}

/// A predicate over a value of type `T` with a failure description
///
/// Implementations are configured before being attached to a field and are
/// never mutated afterwards.
pub trait Assertion<T> {
    /// Short identifier of the assertion family (e.g. `"length"`)
    fn name(&self) -> &str;

    /// Whether `value` satisfies the assertion. Must not panic or error.
    fn is_valid(&self, value: &T) -> bool;

    /// Message describing the configured constraint, surfaced on failure
    fn description(&self) -> String;

    /// Evaluate and produce the message for the specific failed constraint.
    ///
    /// Assertions with several internal checks override this so the message
    /// names the check that failed.
    fn verdict(&self, value: &T) -> Verdict {
        if self.is_valid(value) {
            Verdict::Pass
        } else {
            Verdict::Fail(self.description())
        }
    }

    /// Report configuration errors; called once when the assertion is attached
    fn check_config(&self) -> Result<()> {
        Ok(())
    }
}
