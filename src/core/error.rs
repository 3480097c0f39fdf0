//! Error handling for the naming CLI
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`NamingError`] - every failure the CLI and manifest layer can report
//! - [`ErrorContext`] - wraps an error with details and a suggestion for display
//! - [`user_friendly_error`] - turns any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! Diagnostics about conventions themselves (missing blocks, missing inputs)
//! are [`ConventionError`] values. They travel inside
//! [`NamingError::ConventionRejected`] when a command has to stop because of them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use naming_cli::core::{NamingError, user_friendly_error};
//!
//! let error = anyhow::Error::from(NamingError::ManifestNotFound);
//! let context = user_friendly_error(error);
//! context.display(); // coloured error, details and suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::adapters::function::FunctionError;
use crate::convention::ConventionError;

/// The main error type for naming operations
///
/// # Error Categories
///
/// ## Manifest
/// - [`ManifestNotFound`] - no `naming.toml` could be located
/// - [`ManifestParseError`] - invalid TOML in the manifest
/// - [`ManifestValidationError`] - structurally invalid manifest content
///
/// ## Conventions
/// - [`ConventionNotFound`] - a convention id that the manifest does not declare
/// - [`ConventionRejected`] - a convention or its inputs failed validation
/// - [`Convention`] - a single engine error (decoding, generation)
/// - [`Function`] - a failure reported by the generation function
///
/// ## Command line
/// - [`InvalidInput`] - an `--input` argument that is not `KEY=VALUE`
///
/// [`ManifestNotFound`]: NamingError::ManifestNotFound
/// [`ManifestParseError`]: NamingError::ManifestParseError
/// [`ManifestValidationError`]: NamingError::ManifestValidationError
/// [`ConventionNotFound`]: NamingError::ConventionNotFound
/// [`ConventionRejected`]: NamingError::ConventionRejected
/// [`Convention`]: NamingError::Convention
/// [`Function`]: NamingError::Function
/// [`InvalidInput`]: NamingError::InvalidInput
#[derive(Error, Debug)]
pub enum NamingError {
    /// Manifest file (naming.toml) not found
    ///
    /// The CLI searches for `naming.toml` starting from the current working
    /// directory and walking up the directory tree, unless a path is given
    /// with `--manifest-path` or `NAMING_MANIFEST`.
    #[error("Manifest file naming.toml not found in current directory or any parent directory")]
    ManifestNotFound,

    /// Manifest parsing error
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Path to the manifest file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Manifest validation error
    #[error("Manifest validation failed: {reason}")]
    ManifestValidationError {
        /// Reason why manifest validation failed
        reason: String,
    },

    /// A convention id that is not declared in the manifest
    #[error("Convention '{name}' not found in manifest")]
    ConventionNotFound {
        /// The requested convention id
        name: String,
        /// Declared ids close to the requested one
        suggestions: Vec<String>,
    },

    /// A convention or its inputs failed validation
    #[error("Convention '{name}' was rejected: {}", join_messages(.errors))]
    ConventionRejected {
        /// The convention id, or `<inline>` for conventions passed as JSON
        name: String,
        /// Every diagnostic reported by the validators
        errors: Vec<ConventionError>,
    },

    /// A single convention engine error
    #[error(transparent)]
    Convention(#[from] ConventionError),

    /// A failure from the stateless generation function
    #[error(transparent)]
    Function(#[from] FunctionError),

    /// A command-line input that is not `KEY=VALUE`
    #[error("Invalid input '{input}': expected KEY=VALUE")]
    InvalidInput {
        /// The raw argument
        input: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

fn join_messages(errors: &[ConventionError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl Clone for NamingError {
    fn clone(&self) -> Self {
        match self {
            Self::ManifestNotFound => Self::ManifestNotFound,
            Self::ManifestParseError {
                file,
                reason,
            } => Self::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ManifestValidationError {
                reason,
            } => Self::ManifestValidationError {
                reason: reason.clone(),
            },
            Self::ConventionNotFound {
                name,
                suggestions,
            } => Self::ConventionNotFound {
                name: name.clone(),
                suggestions: suggestions.clone(),
            },
            Self::ConventionRejected {
                name,
                errors,
            } => Self::ConventionRejected {
                name: name.clone(),
                errors: errors.clone(),
            },
            Self::Convention(e) => Self::Convention(e.clone()),
            Self::Function(e) => Self::Function(e.clone()),
            Self::InvalidInput {
                input,
            } => Self::InvalidInput {
                input: input.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// Combines a [`NamingError`] with optional details and a suggestion. The
/// CLI prints it in colour; its `Display` form is plain text for logs.
///
/// ```rust,no_run
/// use naming_cli::core::{ErrorContext, NamingError};
///
/// let context = ErrorContext::new(NamingError::ManifestNotFound)
///     .with_suggestion("Run 'naming init' to create a manifest")
///     .with_details("The CLI searches current and parent directories for naming.toml");
///
/// println!("{}", context);
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: NamingError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: NamingError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions are actionable steps, displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    ///
    /// Details are displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognises:
/// - [`NamingError`] variants with tailored suggestions
/// - [`ConventionError`] values raised directly by the engine
/// - [`std::io::Error`] with filesystem guidance
/// - [`toml::de::Error`] with TOML syntax help
/// - anything else, with its full cause chain
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(naming_error) = error.downcast_ref::<NamingError>() {
        return create_error_context(naming_error.clone());
    }

    if let Some(convention_error) = error.downcast_ref::<ConventionError>() {
        return create_error_context(NamingError::Convention(convention_error.clone()));
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(NamingError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check file ownership and permissions")
                .with_details("The CLI could not read or write a file it needed");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(NamingError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(NamingError::ManifestParseError {
            file: "naming.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in your naming.toml file. Verify quotes, brackets, and indentation");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(NamingError::Other {
        message,
    })
}

fn create_error_context(error: NamingError) -> ErrorContext {
    match &error {
        NamingError::ManifestNotFound => ErrorContext::new(error)
            .with_suggestion("Run 'naming init' to create a naming.toml, or pass --manifest-path")
            .with_details("The CLI looks for naming.toml in the current directory and parent directories up to the filesystem root"),

        NamingError::ManifestParseError { file, reason } => {
            let suggestion = format!(
                "Check the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets, invalid characters"
            );
            let details = reason.trim().to_string();
            ErrorContext::new(error).with_details(details).with_suggestion(suggestion)
        }

        NamingError::ConventionNotFound { suggestions, .. } => {
            let suggestion = if suggestions.is_empty() {
                "Run 'naming list' to see the declared conventions".to_string()
            } else {
                format!("Did you mean: {}?", suggestions.join(", "))
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        NamingError::ConventionRejected { errors, .. } => {
            let details = crate::convention::format_diagnostics(errors);
            let suggestion = if errors.iter().any(|e| matches!(e, ConventionError::MissingInputs { .. })) {
                "Pass the missing values with --input KEY=VALUE, or declare a default for them"
            } else {
                "Make sure the definition contains (name) and a block for every declared variable"
            };
            ErrorContext::new(error).with_details(details).with_suggestion(suggestion)
        }

        NamingError::Convention(ConventionError::MissingValue { variable }) => {
            let suggestion = format!(
                "Provide a non-empty value for '{variable}' or declare a default for it"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        NamingError::Convention(ConventionError::MalformedConvention { .. }) => ErrorContext::new(error)
            .with_suggestion("Pass the JSON printed by 'naming export' without modification")
            .with_details("Variable attributes are encoded as strings; absent values use the <null> marker"),

        NamingError::Function(e @ FunctionError::ReadConvention(_)) => {
            let details = e.diagnostic();
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Pass the JSON printed by 'naming export' without modification")
        }

        NamingError::Function(e @ FunctionError::GenerateName(_)) => {
            let details = e.diagnostic();
            ErrorContext::new(error).with_details(details).with_suggestion(
                "Pass the subject as NAME or as --input name=VALUE, and supply every required input",
            )
        }

        NamingError::InvalidInput { .. } => ErrorContext::new(error)
            .with_suggestion("Inputs are given as --input KEY=VALUE, for example --input env=dev"),

        _ => ErrorContext::new(error),
    }
}
