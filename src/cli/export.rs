//! Print the wire JSON of a manifest convention.
//!
//! The output is what name consumers store and later pass back with
//! `--json` or `--json-file`:
//!
//! ```bash
//! naming export service > service.json
//! naming generate api --json-file service.json --input type=svc
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::load_manifest;
use crate::adapters::convention::declare;
use crate::convention::wire;
use crate::core::NamingError;

/// Command to export one convention as JSON.
#[derive(Args)]
pub struct ExportCommand {
    /// Convention id declared in naming.toml
    #[arg(value_name = "CONVENTION")]
    convention: String,

    /// Indent the JSON for reading
    #[arg(long)]
    pretty: bool,
}

impl ExportCommand {
    /// Validate the convention and print its JSON to stdout.
    ///
    /// # Errors
    ///
    /// Fails when the manifest cannot be loaded, the id is unknown, or the
    /// convention does not validate.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let (_, manifest) = load_manifest(manifest_path)?;
        let json = export_convention(&manifest, &self.convention, self.pretty)?;
        println!("{json}");
        Ok(())
    }
}

/// The wire JSON for `id`, compact or indented.
///
/// # Errors
///
/// [`NamingError::ConventionNotFound`], [`NamingError::ConventionRejected`],
/// or a JSON error.
pub fn export_convention(
    manifest: &crate::manifest::Manifest,
    id: &str,
    pretty: bool,
) -> Result<String, NamingError> {
    // Lookup first so unknown ids get suggestions
    let convention = manifest.convention(id)?;

    let declared = declare(&convention.definition, convention.variables).map_err(|errors| {
        NamingError::ConventionRejected {
            name: id.to_string(),
            errors,
        }
    })?;

    if pretty {
        Ok(wire::to_json_pretty(&declared.to_convention())?)
    } else {
        Ok(declared.convention)
    }
}
