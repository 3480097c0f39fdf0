//! List the conventions declared in the manifest.
//!
//! ```bash
//! naming list
//! naming list --format json
//! ```
//!
//! Text output shows one convention per line with its definition and a
//! marker for conventions that fail validation; `naming validate` gives the
//! details.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::{OutputFormat, load_manifest};
use crate::manifest::Manifest;

/// Command to list declared conventions.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// One row of `naming list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variables: Vec<String>,
    pub valid: bool,
}

/// Build list rows in id order.
#[must_use]
pub fn list_items(manifest: &Manifest) -> Vec<ListItem> {
    let report = manifest.check_conventions();
    manifest
        .conventions
        .iter()
        .map(|(id, spec)| ListItem {
            id: id.clone(),
            definition: spec.definition.clone(),
            description: spec.description.clone(),
            variables: spec.variables.iter().map(|v| v.name.clone()).collect(),
            valid: report.get(id).is_none_or(Vec::is_empty),
        })
        .collect()
}

impl ListCommand {
    /// List conventions from the manifest at `manifest_path` or found by search.
    ///
    /// # Errors
    ///
    /// Fails when the manifest cannot be found or loaded.
    pub async fn execute_with_manifest_path(self, manifest_path: Option<PathBuf>) -> Result<()> {
        let (_, manifest) = load_manifest(manifest_path)?;
        let items = list_items(&manifest);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
            OutputFormat::Text => output_table(&items),
        }

        Ok(())
    }
}

fn output_table(items: &[ListItem]) {
    if items.is_empty() {
        println!("No conventions declared.");
        return;
    }

    let width = items.iter().map(|i| i.id.len()).max().unwrap_or(0);
    println!("{}", "Conventions".bold());
    for item in items {
        let marker = if item.valid { "✓".green() } else { "✗".red() };
        let id = format!("{:<width$}", item.id);
        println!("  {} {}  {}", marker, id.cyan(), item.definition);
        if let Some(description) = &item.description {
            println!("    {:<width$}  {}", "", description.dimmed());
        }
    }
}
