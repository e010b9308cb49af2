//! SDK error types
//!
//! Validation failures are never errors; they are reported as `FieldError`s
//! inside a `ValidationResult`. Everything here is either a configuration
//! mistake or a broken binding, and terminates the call that raised it.

use formcheck_core::CoreError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    /// Field id not registered in the form
    #[error("Field not found: {0}")]
    NotFound(String),

    /// Field id registered twice
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// Container locator could not resolve an id
    #[error("No source found for field: {0}")]
    SourceNotFound(String),

    /// Value source of a field no longer exists
    #[error("Source unavailable for field '{field}': {reason}")]
    Unavailable { field: String, reason: String },

    /// Assertion or condition configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),

    /// Form configuration could not be decoded
    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
