//! Errors produced by convention validation and name generation.
//!
//! These are user-facing diagnostics, not failures of the process. Validators
//! return them as a batch (`Vec<ConventionError>`) so callers can show every
//! problem at once; the generator returns the first one it hits.

use thiserror::Error;

/// A single problem found while validating, decoding or applying a convention.
///
/// The `Display` text is the detailed message shown to users; [`summary`]
/// gives the short title used when several diagnostics are listed together.
///
/// [`summary`]: ConventionError::summary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConventionError {
    /// The definition does not contain the mandatory `(name)` block.
    #[error("The defined convention must include the block '(name)'.")]
    MissingNameBlock,

    /// One or more declared variables have no block in the definition.
    #[error(
        "The defined convention must include all variable blocks. Missing blocks: {}",
        .blocks.join(", ")
    )]
    MissingVariableBlocks {
        /// The missing blocks, e.g. `(type)`, in declaration order
        blocks: Vec<String>,
    },

    /// Variables without a default that are not generated received no input.
    #[error(
        "All convention variables that are not generated or have a default must be present. Missing inputs: {}",
        .names.join(", ")
    )]
    MissingInputs {
        /// Names of the variables lacking an input, in declaration order
        names: Vec<String>,
    },

    /// A variable resolved to an empty value during generation.
    #[error("Missing value \"{variable}\"")]
    MissingValue {
        /// Name of the variable that resolved to an empty string
        variable: String,
    },

    /// The serialized convention could not be decoded.
    #[error("Malformed convention: {reason}")]
    MalformedConvention {
        /// What was wrong with the payload
        reason: String,
    },
}

impl ConventionError {
    /// Short diagnostic title for this error.
    ///
    /// ```
    /// use naming_cli::convention::ConventionError;
    ///
    /// assert_eq!(ConventionError::MissingNameBlock.summary(), "Convention Validate Error");
    /// ```
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::MissingNameBlock | Self::MissingVariableBlocks { .. } => {
                "Convention Validate Error"
            }
            Self::MissingInputs { .. } => "Convention Usage Error",
            Self::MissingValue { .. } => "Name Generation Error",
            Self::MalformedConvention { .. } => "Convention Reading Error",
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedConvention {
            reason: reason.into(),
        }
    }
}

/// Render a batch of diagnostics as `summary: message` lines.
#[must_use]
pub fn format_diagnostics(errors: &[ConventionError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.summary(), e))
        .collect::<Vec<_>>()
        .join("\n")
}
