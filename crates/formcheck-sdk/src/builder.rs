//! Builder pattern for Form

use crate::config::FormConfig;
use crate::error::{Result, SdkError};
use crate::field::{FieldBuilder, FieldSlot};
use crate::form::Form;
use crate::source::{SourceLocator, ValueSource};
use formcheck_core::Value;

/// Builder for Form
///
/// Fields are registered in order; that order is the order of evaluation
/// and of reported errors. Configuration mistakes (duplicate ids, conflicting
/// bounds, bad patterns, unresolvable sources) are collected and the first
/// one is returned from `build()`.
///
/// # Example
///
/// ```rust
/// use formcheck_sdk::{Binding, Form, FormConfig, FormState, When};
/// use formcheck_sdk::assertion::{IsNotEmpty, Length};
///
/// let subscribe = Binding::new(false);
/// let email = Binding::new(String::new());
///
/// let form = Form::builder()
///     .with_config(FormConfig::new().with_name("newsletter"))
///     .field("subscribe", subscribe.clone(), |_| {})
///     .field("email", email.clone(), |f| {
///         f.conditional(When::new("subscribed", |s: &FormState| {
///             s.value("subscribe").and_then(|v| v.as_bool()).unwrap_or(false)
///         }));
///         f.assert(IsNotEmpty);
///         f.assert(Length::new().at_most(254));
///     })
///     .build()
///     .unwrap();
///
/// assert!(form.validate().unwrap().success());
/// ```
pub struct FormBuilder {
    config: FormConfig,
    fields: Vec<Box<dyn FieldSlot>>,
    error: Option<SdkError>,
}

impl FormBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: FormConfig::new(),
            fields: Vec::new(),
            error: None,
        }
    }

    /// Set form configuration
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a field reading its value from `source`
    pub fn field<T, S, F>(mut self, id: impl Into<String>, source: S, configure: F) -> Self
    where
        T: Into<Value> + 'static,
        S: ValueSource<T> + 'static,
        F: FnOnce(&mut FieldBuilder<T>),
    {
        self.register(id.into(), Box::new(source), configure);
        self
    }

    /// Register a field whose source is resolved by id through `locator`
    pub fn locate<T, L, F>(mut self, locator: &L, id: impl Into<String>, configure: F) -> Self
    where
        T: Into<Value> + 'static,
        L: SourceLocator<T> + ?Sized,
        F: FnOnce(&mut FieldBuilder<T>),
    {
        let id = id.into();
        match locator.locate(&id) {
            Some(source) => self.register(id, source, configure),
            None => self.reject(SdkError::SourceNotFound(id)),
        }
        self
    }

    fn register<T, F>(&mut self, id: String, source: Box<dyn ValueSource<T>>, configure: F)
    where
        T: Into<Value> + 'static,
        F: FnOnce(&mut FieldBuilder<T>),
    {
        if self.fields.iter().any(|f| f.id() == id) {
            self.reject(SdkError::DuplicateField(id));
            return;
        }

        let mut builder = FieldBuilder::new(id);
        configure(&mut builder);
        match builder.build(source) {
            Ok(field) => self.fields.push(Box::new(field)),
            Err(e) => self.reject(e.into()),
        }
    }

    fn reject(&mut self, error: SdkError) {
        tracing::warn!(form = %self.config.name, error = %error, "form configuration rejected");
        self.error.get_or_insert(error);
    }

    /// Build the form
    pub fn build(self) -> Result<Form> {
        if let Some(e) = self.error {
            return Err(e);
        }
        tracing::debug!(form = %self.config.name, fields = self.fields.len(), "form built");
        Ok(Form::new(self.config, self.fields))
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
