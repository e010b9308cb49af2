//! Type system for formcheck
//!
//! Field values are typed at registration time; the engine snapshots them as
//! dynamic `Value`s so conditions and results can inspect any field.

pub mod value;

pub use value::Value;
