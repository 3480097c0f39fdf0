//! Helpers shared by the convention commands.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::NAME_VARIABLE;
use crate::convention::{Convention, Inputs};
use crate::core::NamingError;
use crate::generator::NameGenerator;
use crate::manifest::{Manifest, find_manifest_with_optional, find_similar};

/// Label used in diagnostics for conventions passed as JSON.
pub const INLINE_LABEL: &str = "<inline>";

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with colors
    #[default]
    Text,

    /// Structured JSON output for automation
    Json,
}

/// Locate and load the manifest.
///
/// # Errors
///
/// Fails when no manifest can be found or when it does not load.
pub fn load_manifest(manifest_path: Option<PathBuf>) -> Result<(PathBuf, Manifest)> {
    let path = find_manifest_with_optional(manifest_path)?;
    let manifest = Manifest::load(&path)
        .with_context(|| format!("Failed to load manifest file: {}", path.display()))?;
    Ok((path, manifest))
}

/// Parse one `KEY=VALUE` argument.
///
/// The value may be empty, which lets a default apply; the key may not.
///
/// # Errors
///
/// Returns [`NamingError::InvalidInput`] when there is no `=` or the key is empty.
pub fn parse_input(raw: &str) -> Result<(String, String), NamingError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(NamingError::InvalidInput {
            input: raw.to_string(),
        }),
    }
}

/// Parse every `--input` argument; later duplicates override earlier ones.
///
/// # Errors
///
/// See [`parse_input`].
pub fn parse_inputs(raw: &[String]) -> Result<Inputs, NamingError> {
    raw.iter().map(|r| parse_input(r)).collect()
}

/// Warn on stderr about input keys the convention does not use.
///
/// Generation ignores such keys; the warning catches typos.
pub fn warn_unknown_inputs(inputs: &Inputs, convention: &Convention) {
    for key in inputs.keys() {
        if key == NAME_VARIABLE || convention.variable(key).is_some() {
            continue;
        }

        let declared = convention.variables.iter().map(|v| v.name.as_str());
        let similar = find_similar(key, declared);
        if similar.is_empty() {
            eprintln!("{} Input '{}' is not used by this convention", "⚠".yellow(), key);
        } else {
            eprintln!(
                "{} Input '{}' is not used by this convention (did you mean: {}?)",
                "⚠".yellow(),
                key,
                similar.join(", ")
            );
        }
    }
}

/// Where a command reads its convention from.
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct ConventionSource {
    /// Convention id declared in naming.toml
    #[arg(short, long, value_name = "ID")]
    pub convention: Option<String>,

    /// Convention wire JSON, as printed by `naming export`
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,

    /// File containing convention wire JSON
    #[arg(long, value_name = "PATH")]
    pub json_file: Option<PathBuf>,
}

/// A convention ready for use, with the settings that apply to it.
#[derive(Debug, Clone)]
pub struct ResolvedConvention {
    /// Convention id, or [`INLINE_LABEL`] for JSON input
    pub label: String,
    pub convention: Convention,
    /// Compact wire JSON of `convention`
    pub json: String,
    /// Generator configured from the manifest settings, or the default one
    pub generator: NameGenerator,
}

impl ConventionSource {
    /// Load and validate the selected convention.
    ///
    /// Manifest conventions use [`Manifest::generator`], which honours the
    /// manifest's `generated_length`; JSON conventions use the default generator.
    ///
    /// # Errors
    ///
    /// - manifest discovery or loading fails
    /// - the id is unknown ([`NamingError::ConventionNotFound`])
    /// - the JSON is malformed
    /// - the convention fails validation ([`NamingError::ConventionRejected`])
    pub async fn resolve(&self, manifest_path: Option<PathBuf>) -> Result<ResolvedConvention> {
        if let Some(id) = &self.convention {
            let (path, manifest) = load_manifest(manifest_path)?;
            debug!("Using convention '{}' from {}", id, path.display());

            let convention = manifest.convention(id)?;
            let json = convention.to_json().map_err(NamingError::from)?;
            return Ok(ResolvedConvention {
                label: id.clone(),
                convention,
                json,
                generator: manifest.generator(),
            });
        }

        let json = match (&self.json, &self.json_file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read convention file: {}", path.display()))?,
            (None, None) => {
                return Err(NamingError::Other {
                    message: "A convention is required: pass --convention, --json or --json-file"
                        .to_string(),
                }
                .into());
            }
        };

        let convention = Convention::from_json(json.trim()).map_err(NamingError::from)?;
        let errors = convention.validate();
        if !errors.is_empty() {
            return Err(NamingError::ConventionRejected {
                name: INLINE_LABEL.to_string(),
                errors,
            }
            .into());
        }

        Ok(ResolvedConvention {
            label: INLINE_LABEL.to_string(),
            json: json.trim().to_string(),
            convention,
            generator: NameGenerator::new(),
        })
    }
}
