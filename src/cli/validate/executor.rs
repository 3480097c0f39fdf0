//! Execution of `naming validate`.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use super::command::ValidateCommand;
use super::results::{ConventionReport, ValidationResults};
use crate::cli::common::OutputFormat;
use crate::convention::inspect_convention;
use crate::core::NamingError;
use crate::manifest::{Manifest, find_manifest_with_optional, find_similar};

impl ValidateCommand {
    /// Validate the manifest at `manifest_path`, or the one found by search.
    ///
    /// # Errors
    ///
    /// Fails when the manifest cannot be loaded, a convention is invalid, or
    /// `--strict` is set and warnings were reported.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let manifest_path = match find_manifest_with_optional(manifest_path) {
            Ok(path) => path,
            Err(e) => {
                self.report_failure("No naming.toml found in current directory or any parent directory")?;
                return Err(e);
            }
        };

        let manifest = match Manifest::load(&manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                self.report_failure(&format!("{e:#}"))?;
                return Err(e);
            }
        };

        if !matches!(self.format, OutputFormat::Json) {
            println!("{} Manifest {} loaded", "✓".green(), manifest_path.display());
        }

        let results = self.validate_manifest(&manifest)?;
        self.output(&results)?;

        let rejected = results.conventions.iter().filter(|c| !c.valid).count();
        if rejected > 0 {
            return Err(anyhow::anyhow!("Validation failed: {rejected} convention(s) rejected"));
        }

        if self.strict && !results.warnings.is_empty() {
            if !matches!(self.format, OutputFormat::Json) {
                println!("{} Strict mode: Warnings treated as errors", "✗".red());
            }
            return Err(anyhow::anyhow!("Strict mode validation failed"));
        }

        Ok(())
    }

    /// Build the report for the selected conventions.
    fn validate_manifest(&self, manifest: &Manifest) -> Result<ValidationResults, NamingError> {
        let selected: Vec<&String> = match &self.convention {
            Some(id) => {
                let (key, _) = manifest.conventions.get_key_value(id).ok_or_else(|| {
                    NamingError::ConventionNotFound {
                        name: id.clone(),
                        suggestions: find_similar(id, manifest.names()),
                    }
                })?;
                vec![key]
            }
            None => manifest.conventions.keys().collect(),
        };

        let mut results = ValidationResults {
            manifest_valid: true,
            ..Default::default()
        };

        for id in selected {
            let Some(spec) = manifest.get(id) else {
                continue;
            };
            let convention = spec.to_convention();
            let errors = convention.validate();
            let warnings = inspect_convention(&convention);
            debug!(
                "Convention '{}': {} error(s), {} warning(s)",
                id,
                errors.len(),
                warnings.len()
            );
            results.push(ConventionReport::new(id, &convention.definition, &errors, &warnings));
        }

        if self.strict && !results.warnings.is_empty() {
            results.valid = false;
        }

        Ok(results)
    }

    fn output(&self, results: &ValidationResults) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(results)?);
            }
            OutputFormat::Text => {
                if results.conventions.is_empty() {
                    println!("{} No conventions declared", "⚠".yellow());
                }
                for report in &results.conventions {
                    if report.valid {
                        println!("{} {} {}", "✓".green(), report.id.cyan(), report.definition);
                    } else {
                        println!("{} {} {}", "✗".red(), report.id.cyan(), report.definition);
                    }
                    for error in &report.errors {
                        println!("    {error}");
                    }
                    for warning in &report.warnings {
                        println!("    {} Warning: {}", "⚠".yellow(), warning);
                    }
                }
            }
        }
        Ok(())
    }

    fn report_failure(&self, message: &str) -> Result<()> {
        if matches!(self.format, OutputFormat::Json) {
            println!("{}", serde_json::to_string_pretty(&ValidationResults::failed(message))?);
        } else {
            println!("{} {}", "✗".red(), message);
        }
        Ok(())
    }
}
