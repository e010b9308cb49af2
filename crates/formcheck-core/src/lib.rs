//! formcheck Core - Core types for the formcheck validation engine
//!
//! This crate provides the leaf building blocks used by the SDK:
//! - Value types for field values captured during a pass
//! - Assertions (predicates with failure descriptions) and numeric bounds
//! - Conditions and the form state snapshot they are evaluated against
//! - Error types

pub mod assertion;
pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use assertion::{Assertion, Bound, Verdict};
pub use condition::{Condition, ConditionGroup, Context, FieldOutcome, FormState, When};
pub use error::CoreError;
pub use types::Value;
