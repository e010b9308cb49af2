//! Live revalidation
//!
//! Glue code subscribes a field, then calls `notify_change` whenever the
//! field's backing value changes. The engine revalidates only that field,
//! pushes the outcome to the field's display callback and remembers it.
//! Triggering policy (every keystroke, debounced, on blur) belongs to the
//! glue; the engine schedules nothing.

use super::engine::Form;
use crate::error::Result;
use crate::result::FieldError;
use formcheck_core::Context;

/// Handle for one live subscription; pass it back to `cancel_live`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiveSubscription {
    field_id: String,
    token: u64,
}

impl LiveSubscription {
    pub fn field_id(&self) -> &str {
        &self.field_id
    }
}

/// Result of a change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveUpdate {
    /// The field is not subscribed; nothing ran
    Inactive,
    /// The field was revalidated; carries its error, if any
    Revalidated(Option<FieldError>),
}

#[derive(Debug, Clone)]
pub(crate) struct LiveState {
    token: u64,
    last_error: Option<FieldError>,
}

impl Form {
    pub(super) fn subscribe(&mut self, field_id: String) -> LiveSubscription {
        if let Some(state) = self.live.get(&field_id) {
            return LiveSubscription {
                field_id,
                token: state.token,
            };
        }

        self.next_token += 1;
        let token = self.next_token;
        tracing::debug!(form = %self.config.name, field = %field_id, token, "live subscription enabled");
        self.live.insert(
            field_id.clone(),
            LiveState {
                token,
                last_error: None,
            },
        );
        LiveSubscription { field_id, token }
    }

    /// Subscribe a field to live revalidation
    ///
    /// Subscribing an already-live field returns its existing subscription.
    pub fn enable_live(&mut self, field_id: &str) -> Result<LiveSubscription> {
        self.require(field_id)?;
        Ok(self.subscribe(field_id.to_string()))
    }

    /// Cancel a subscription. Returns false when it was already cancelled
    /// or superseded.
    pub fn cancel_live(&mut self, subscription: &LiveSubscription) -> bool {
        match self.live.get(&subscription.field_id) {
            Some(state) if state.token == subscription.token => {
                self.live.remove(&subscription.field_id);
                tracing::debug!(form = %self.config.name, field = %subscription.field_id, "live subscription cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn is_live(&self, field_id: &str) -> bool {
        self.live.contains_key(field_id)
    }

    /// Change notification with no external context
    pub fn notify_change(&mut self, field_id: &str) -> Result<LiveUpdate> {
        self.notify_change_with(field_id, &Context::new())
    }

    /// Change notification for one field
    ///
    /// Unknown ids fail with `NotFound` whether or not anything is
    /// subscribed.
    pub fn notify_change_with(&mut self, field_id: &str, context: &Context) -> Result<LiveUpdate> {
        let index = self.require(field_id)?;
        if !self.is_live(field_id) {
            tracing::debug!(form = %self.config.name, field = %field_id, "change ignored, field not live");
            return Ok(LiveUpdate::Inactive);
        }

        let error = self.validate_field_with(field_id, context)?;
        self.fields[index].present(error.as_ref());
        if let Some(state) = self.live.get_mut(field_id) {
            state.last_error = error.clone();
        }
        Ok(LiveUpdate::Revalidated(error))
    }

    /// Last error of every live field, in registration order
    pub fn live_errors(&self) -> Vec<&FieldError> {
        self.fields
            .iter()
            .filter_map(|f| self.live.get(f.id()))
            .filter_map(|state| state.last_error.as_ref())
            .collect()
    }
}
