//! Host-facing entry points over the convention engine.
//!
//! Each adapter mirrors one way a host consumes conventions and shares the
//! same validator and generator:
//!
//! - [`convention`] - declare a convention and obtain its wire JSON
//! - [`name`] - a stateful name record created from wire JSON and inputs
//! - [`function`] - a stateless call from wire JSON and inputs to a name
//!
//! Adapters report failures as data ([`ConventionError`](crate::convention::ConventionError)
//! lists or [`function::FunctionError`]) so hosts can render them as diagnostics.

pub mod convention;
pub mod function;
pub mod name;
