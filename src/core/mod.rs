//! Core types shared by the CLI: the error enum and its user-facing context.

pub mod error;

pub use error::{ErrorContext, NamingError, user_friendly_error};
