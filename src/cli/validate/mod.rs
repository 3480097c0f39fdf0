//! Validate the conventions declared in the manifest.
//!
//! Every convention (or the one named on the command line) is checked with
//! the convention validator. Problems that do not prevent generation, such as
//! placeholders that will stay literal, are reported as warnings.
//!
//! ```bash
//! naming validate                  # all conventions
//! naming validate service          # one convention
//! naming validate --strict         # warnings fail the run
//! naming validate --format json    # machine-readable report
//! ```
//!
//! # Exit status
//!
//! Non-zero when the manifest cannot be loaded, when any selected convention
//! has errors, or in strict mode when any warning is reported.

mod command;
mod executor;
mod results;

pub use command::ValidateCommand;
pub use results::{ConventionReport, ValidationResults};
