//! Check that inputs cover a convention without generating anything.
//!
//! ```bash
//! naming check --convention service --input type=service
//! naming check --json-file service.json --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::{ConventionSource, OutputFormat, parse_inputs, warn_unknown_inputs};
use crate::convention::{Convention, ConventionError, Inputs};
use crate::core::NamingError;

/// Command to run the inputs completeness check.
#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    source: ConventionSource,

    /// Variable value as KEY=VALUE (repeatable)
    #[arg(short, long = "input", value_name = "KEY=VALUE")]
    inputs: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// JSON output of `naming check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub convention: String,
    pub valid: bool,
    /// Variables that need an input and have none
    pub missing: Vec<String>,
}

/// Run the completeness check for `inputs`.
#[must_use]
pub fn check_inputs(label: &str, convention: &Convention, inputs: &Inputs) -> CheckResult {
    let missing = convention
        .validate_inputs(inputs)
        .into_iter()
        .flat_map(|error| match error {
            ConventionError::MissingInputs {
                names,
            } => names,
            _ => Vec::new(),
        })
        .collect::<Vec<_>>();

    CheckResult {
        convention: label.to_string(),
        valid: missing.is_empty(),
        missing,
    }
}

impl CheckCommand {
    /// Print whether the inputs are complete.
    ///
    /// # Errors
    ///
    /// Fails on invalid `--input` syntax, on any convention source error,
    /// or when inputs are missing.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let inputs = parse_inputs(&self.inputs)?;
        let resolved = self.source.resolve(manifest_path).await?;
        warn_unknown_inputs(&inputs, &resolved.convention);

        let result = check_inputs(&resolved.label, &resolved.convention, &inputs);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text if result.valid => {
                println!("{} All required inputs for '{}' are present", "✓".green(), result.convention);
            }
            OutputFormat::Text => {
                println!("{} Missing inputs for '{}': {}", "✗".red(), result.convention, result.missing.join(", "));
            }
        }

        if result.valid {
            Ok(())
        } else {
            Err(NamingError::ConventionRejected {
                name: result.convention,
                errors: vec![ConventionError::MissingInputs {
                    names: result.missing,
                }],
            }
            .into())
        }
    }
}
