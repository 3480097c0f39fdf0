//! Manifest file parsing and validation for naming projects.
//!
//! A project declares its conventions in `naming.toml`:
//!
//! ```toml
//! [settings]
//! generated_length = 8
//!
//! [conventions.service]
//! description = "Compute services"
//! definition = "(name)-(env)-(type)-(suffix)"
//! variables = [
//!     { name = "env", default = "dev" },
//!     { name = "type", max_length = 4 },
//!     { name = "suffix", generated = true, max_length = 4 },
//! ]
//! ```
//!
//! The convention id is the table key (`service` above). Variable order in
//! the `variables` array is the substitution order.
//!
//! # Validation Layers
//!
//! - [`Manifest::load`] checks structure only: parseable TOML, non-empty
//!   definitions and variable names, a `generated_length` between 1 and
//!   [`MAX_GENERATED_LENGTH`]
//! - [`Manifest::check_conventions`] runs the convention validator on every
//!   declared convention and reports all diagnostics
//! - [`Manifest::convention`] returns one validated [`Convention`], or the
//!   error that prevents its use
//!
//! A manifest with one broken convention therefore still loads, so the
//! `validate` command can report every problem at once.

pub mod helpers;

pub use helpers::{find_manifest, find_manifest_from, find_manifest_with_optional, find_similar};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::constants::{DEFAULT_GENERATED_LENGTH, MAX_GENERATED_LENGTH};
use crate::convention::{AttrValue, Convention, ConventionError, Variable};
use crate::core::NamingError;
use crate::generator::NameGenerator;

/// The parsed contents of `naming.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Project-wide generation settings.
    #[serde(default)]
    pub settings: Settings,

    /// Conventions keyed by id, in id order.
    #[serde(default)]
    pub conventions: BTreeMap<String, ConventionSpec>,
}

/// The `[settings]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Length of generated values for variables without a `max_length`.
    #[serde(default = "default_generated_length")]
    pub generated_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generated_length: DEFAULT_GENERATED_LENGTH,
        }
    }
}

const fn default_generated_length() -> usize {
    DEFAULT_GENERATED_LENGTH
}

/// One `[conventions.<id>]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConventionSpec {
    /// Free-form text shown by `naming list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The template string.
    pub definition: String,

    /// Variable declarations in substitution order.
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
}

/// One entry of a convention's `variables` array.
///
/// Absent keys map to unset attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

impl VariableSpec {
    #[must_use]
    pub fn to_variable(&self) -> Variable {
        Variable {
            name: self.name.clone(),
            default: AttrValue::from(self.default.clone()),
            generated: AttrValue::from(self.generated),
            max_length: AttrValue::from(self.max_length),
        }
    }
}

impl ConventionSpec {
    /// The engine representation of this table, without validation.
    #[must_use]
    pub fn to_convention(&self) -> Convention {
        Convention::new(
            self.definition.clone(),
            self.variables.iter().map(VariableSpec::to_variable).collect(),
        )
    }
}

impl Manifest {
    /// Load and structurally validate a manifest file.
    ///
    /// # Errors
    ///
    /// - the file cannot be read
    /// - the content is not valid TOML for this schema ([`NamingError::ManifestParseError`])
    /// - structural validation fails ([`NamingError::ManifestValidationError`])
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        let manifest = Self::parse(&content, &path.display().to_string())?;

        debug!(
            "Loaded manifest {} with {} convention(s)",
            path.display(),
            manifest.conventions.len()
        );
        Ok(manifest)
    }

    /// Parse manifest content; `file` is only used in error messages.
    ///
    /// # Errors
    ///
    /// See [`Manifest::load`].
    pub fn parse(content: &str, file: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| NamingError::ManifestParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Structural checks that make a manifest unusable as a whole.
    ///
    /// Convention semantics (blocks present in the definition) are checked
    /// separately by [`Manifest::check_conventions`].
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::ManifestValidationError`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.settings.generated_length == 0 {
            return Err(NamingError::ManifestValidationError {
                reason: "settings.generated_length must be greater than zero".to_string(),
            }
            .into());
        }

        if self.settings.generated_length > MAX_GENERATED_LENGTH {
            return Err(NamingError::ManifestValidationError {
                reason: format!(
                    "settings.generated_length must be at most {MAX_GENERATED_LENGTH}, got {}",
                    self.settings.generated_length
                ),
            }
            .into());
        }

        for (id, spec) in &self.conventions {
            if id.trim().is_empty() {
                return Err(NamingError::ManifestValidationError {
                    reason: "convention ids cannot be empty".to_string(),
                }
                .into());
            }

            if spec.definition.is_empty() {
                return Err(NamingError::ManifestValidationError {
                    reason: format!("convention '{id}' has an empty definition"),
                }
                .into());
            }

            if let Some(position) = spec.variables.iter().position(|v| v.name.is_empty()) {
                return Err(NamingError::ManifestValidationError {
                    reason: format!("convention '{id}' variable #{} has an empty name", position + 1),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Declared convention ids, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.conventions.keys().map(String::as_str).collect()
    }

    /// The raw table for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ConventionSpec> {
        self.conventions.get(id)
    }

    /// Run the convention validator on every declared convention.
    ///
    /// Every id is present in the result; an empty list means the convention
    /// is usable.
    #[must_use]
    pub fn check_conventions(&self) -> BTreeMap<String, Vec<ConventionError>> {
        self.conventions
            .iter()
            .map(|(id, spec)| (id.clone(), spec.to_convention().validate()))
            .collect()
    }

    /// A validated convention ready for generation.
    ///
    /// # Errors
    ///
    /// - [`NamingError::ConventionNotFound`] with close matches as suggestions
    /// - [`NamingError::ConventionRejected`] when the convention fails validation
    pub fn convention(&self, id: &str) -> Result<Convention, NamingError> {
        let spec = self.get(id).ok_or_else(|| NamingError::ConventionNotFound {
            name: id.to_string(),
            suggestions: find_similar(id, self.names()),
        })?;

        let convention = spec.to_convention();
        let errors = convention.validate();
        if !errors.is_empty() {
            return Err(NamingError::ConventionRejected {
                name: id.to_string(),
                errors,
            });
        }

        Ok(convention)
    }

    /// A generator honouring `settings.generated_length`.
    #[must_use]
    pub fn generator(&self) -> NameGenerator {
        NameGenerator::new().generated_length(self.settings.generated_length)
    }
}
