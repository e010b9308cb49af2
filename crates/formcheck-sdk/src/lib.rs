//! formcheck SDK
//!
//! High-level API for declaring forms, running validation passes and
//! revalidating single fields as their values change.
//!
//! ```rust
//! use formcheck_sdk::{Binding, Form};
//! use formcheck_sdk::assertion::{Email, IsNotEmpty};
//!
//! let email = Binding::new("not-an-email".to_string());
//! let form = Form::builder()
//!     .field("email", email.clone(), |f| {
//!         f.assert(IsNotEmpty);
//!         f.assert(Email);
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = form.validate().unwrap();
//! assert!(!result.success());
//! assert_eq!(result.errors()[0].message(), "must be a valid email address");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod result;
pub mod source;

// Re-export main types
pub use builder::FormBuilder;
pub use config::FormConfig;
pub use error::{Result, SdkError};
pub use field::{AssertionHandle, FieldBuilder};
pub use form::{Form, LiveSubscription, LiveUpdate};
pub use result::{FieldError, FieldTrace, PassTrace, TraceStatus, ValidationResult};
pub use source::{Binding, BindingMap, SourceLocator, SourceUnavailable, ValueSource};

// Re-export commonly used types from core
pub use formcheck_core::{assertion, condition};
pub use formcheck_core::{Assertion, Condition, Context, FieldOutcome, FormState, Value, When};
