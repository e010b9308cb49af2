//! Numeric bounds for length and number assertions
//!
//! A `Bound` holds exactly one comparison mode, so "two modes at once" cannot
//! be represented. `BoundSlot` is the builder-side accumulator: it keeps the
//! first mode and remembers a second one as a conflict to report at attach
//! time.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single comparison mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum Bound<N> {
    /// No mode configured; nothing satisfies it
    #[default]
    Unset,
    Exact(N),
    LessThan(N),
    AtMost(N),
    AtLeast(N),
    GreaterThan(N),
}

impl<N> Bound<N>
where
    N: PartialOrd + Copy + Display,
{
    pub fn is_set(&self) -> bool {
        !matches!(self, Bound::Unset)
    }

    /// Whether `actual` satisfies the bound. `Unset` admits nothing.
    pub fn admits(&self, actual: N) -> bool {
        match *self {
            Bound::Unset => false,
            Bound::Exact(n) => actual == n,
            Bound::LessThan(n) => actual < n,
            Bound::AtMost(n) => actual <= n,
            Bound::AtLeast(n) => actual >= n,
            Bound::GreaterThan(n) => actual > n,
        }
    }

    /// Human phrase such as `"at least 10"`; `None` when unset
    pub fn phrase(&self) -> Option<String> {
        match *self {
            Bound::Unset => None,
            Bound::Exact(n) => Some(format!("exactly {}", n)),
            Bound::LessThan(n) => Some(format!("less than {}", n)),
            Bound::AtMost(n) => Some(format!("at most {}", n)),
            Bound::AtLeast(n) => Some(format!("at least {}", n)),
            Bound::GreaterThan(n) => Some(format!("greater than {}", n)),
        }
    }
}

/// Builder-side holder for a bound
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundSlot<N> {
    bound: Bound<N>,
    conflict: Option<Bound<N>>,
}

impl<N> BoundSlot<N>
where
    N: PartialOrd + Copy + Display,
{
    pub fn new() -> Self {
        Self {
            bound: Bound::Unset,
            conflict: None,
        }
    }

    /// Set the mode. Only the first call takes effect; later ones are kept
    /// as a conflict.
    pub fn set(&mut self, next: Bound<N>) {
        if !self.bound.is_set() {
            self.bound = next;
        } else if self.conflict.is_none() {
            self.conflict = Some(next);
        }
    }

    pub fn bound(&self) -> Bound<N> {
        self.bound
    }

    pub fn check(&self) -> Result<()> {
        match self.conflict {
            None => Ok(()),
            Some(second) => Err(CoreError::ConflictingBounds {
                first: self.bound.phrase().unwrap_or_default(),
                second: second.phrase().unwrap_or_default(),
            }),
        }
    }
}
