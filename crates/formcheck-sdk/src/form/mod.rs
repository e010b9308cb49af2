//! Form - owns fields and runs validation passes
//!
//! # Architecture
//!
//! The module is organized into:
//! - `engine`: `Form`, the full validation pass and single-field revalidation
//! - `live`: live-mode subscriptions driven by change notifications
//! - `trace_builder`: pass trace construction
//! - `tests`: Unit tests (test-only)

mod engine;
mod live;
mod trace_builder;

pub use engine::Form;
pub use live::{LiveSubscription, LiveUpdate};

#[cfg(test)]
mod tests;
