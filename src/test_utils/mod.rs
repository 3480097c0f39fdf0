//! Test utilities for the naming crate
//!
//! Available to this crate's unit tests and, through the `test-utils`
//! feature, to the integration tests.
//!
//! - [`init_test_logging`] - one-time tracing setup using the test writer
//! - [`FixedSource`] - a deterministic [`RandomSource`] for generated variables
//! - [`ManifestFixture`] - sample `naming.toml` contents
//!
//! # Example
//!
//! ```rust,no_run
//! use naming_cli::convention::{Convention, Inputs, Variable};
//! use naming_cli::generator::NameGenerator;
//! use naming_cli::test_utils::FixedSource;
//!
//! let convention = Convention::new("(name)-(id)", vec![Variable::new("id").with_generated(true)]);
//! let generator = NameGenerator::with_source(FixedSource::new("ab")).generated_length(5);
//! assert_eq!(generator.generate("app", &Inputs::new(), &convention).unwrap(), "app-ababa");
//! ```

pub mod fixtures;

pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::generator::RandomSource;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. The provided level wins; otherwise
/// `RUST_LOG` is used when set, and nothing is logged when neither is given.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A [`RandomSource`] that repeats a fixed pattern.
///
/// `FixedSource::new("ab").alphanumeric(5)` is `"ababa"`. An empty pattern
/// falls back to `'x'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    pattern: String,
}

impl FixedSource {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for FixedSource {
    fn default() -> Self {
        Self::new("x")
    }
}

impl RandomSource for FixedSource {
    fn alphanumeric(&self, length: usize) -> String {
        if self.pattern.is_empty() {
            return "x".repeat(length);
        }
        self.pattern.chars().cycle().take(length).collect()
    }
}
