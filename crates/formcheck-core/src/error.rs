//! Error types for formcheck Core

use thiserror::Error;

/// Core error type
///
/// Every variant is a configuration error: the caller built an assertion or
/// condition that can never be evaluated meaningfully.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Conflicting bounds: {first} and {second} cannot both be set")]
    ConflictingBounds { first: String, second: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
