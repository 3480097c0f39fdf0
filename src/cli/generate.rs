//! Generate a name from a convention.
//!
//! ```bash
//! naming generate api --convention service --input type=service
//! naming generate api --json-file service.json -i type=service -i env=prd
//! naming generate --convention service -i name=api -i type=service
//! ```
//!
//! With a NAME argument the result is produced as a name record, whose id is
//! `<definition>/<name>`. Without one the subject is read from the `name`
//! input, as hosts calling the generation function do.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use super::common::{ConventionSource, OutputFormat, ResolvedConvention, parse_inputs, warn_unknown_inputs};
use crate::adapters::function::generate_name_with;
use crate::adapters::name::{NameRequest, NameResource};
use crate::constants::NAME_VARIABLE;
use crate::convention::Inputs;
use crate::core::NamingError;

/// Command to generate a name.
#[derive(Args)]
pub struct GenerateCommand {
    /// Subject name bound to (name); read from the `name` input when omitted
    #[arg(value_name = "NAME")]
    name: Option<String>,

    #[command(flatten)]
    source: ConventionSource,

    /// Variable value as KEY=VALUE (repeatable)
    #[arg(short, long = "input", value_name = "KEY=VALUE")]
    inputs: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// JSON output of `naming generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedName {
    pub convention: String,
    /// Record id; only present when NAME was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub result: String,
}

impl GenerateCommand {
    /// Resolve the convention, check inputs and print the generated name.
    ///
    /// # Errors
    ///
    /// Fails on invalid `--input` syntax, on any convention source error,
    /// when required inputs are missing, or when a value resolves to empty.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let inputs = parse_inputs(&self.inputs)?;
        let resolved = self.source.resolve(manifest_path).await?;
        warn_unknown_inputs(&inputs, &resolved.convention);

        let generated = generate(self.name, &inputs, &resolved)?;
        debug!("Generated '{}' with convention '{}'", generated.result, generated.convention);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&generated)?),
            OutputFormat::Text => println!("{}", generated.result),
        }
        Ok(())
    }
}

/// Generate through the name record or the function entry point.
///
/// # Errors
///
/// [`NamingError::ConventionRejected`] for record failures and
/// [`NamingError::Function`] for function failures.
pub fn generate(
    name: Option<String>,
    inputs: &Inputs,
    resolved: &ResolvedConvention,
) -> Result<GeneratedName, NamingError> {
    let generator = resolved.generator.clone();

    match name {
        Some(name) => {
            let request = NameRequest {
                name,
                inputs: inputs.clone(),
                convention: resolved.json.clone(),
            };
            let record = NameResource::with_generator(generator).create(&request).map_err(
                |errors| NamingError::ConventionRejected {
                    name: resolved.label.clone(),
                    errors,
                },
            )?;

            Ok(GeneratedName {
                convention: resolved.label.clone(),
                id: Some(record.id),
                name: record.name,
                result: record.result,
            })
        }
        None => {
            let result = generate_name_with(&generator, &resolved.json, inputs)?;
            Ok(GeneratedName {
                convention: resolved.label.clone(),
                id: None,
                name: inputs.get(NAME_VARIABLE).cloned().unwrap_or_default(),
                result,
            })
        }
    }
}
