//! Initialize a naming project with a starter manifest.
//!
//! ```bash
//! naming init                    # naming.toml in the current directory
//! naming init --path ./infra     # in another directory
//! naming init --force            # overwrite an existing manifest
//! ```
//!
//! The starter manifest declares one convention that exercises defaults,
//! length limits and generated values, so `naming generate` works at once.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::MANIFEST_FILE_NAME;

const TEMPLATE: &str = r#"# Naming conventions for this project
#
# Each [conventions.<id>] table declares a definition and its variables.
# Every definition must contain (name), plus one (variable) block per
# declared variable. Blocks are replaced in the order variables are listed.

[settings]
# Length of generated values for variables without a max_length
generated_length = 8

[conventions.service]
description = "Example convention for services"
definition = "(name)-(env)-(type)-(suffix)"
variables = [
    { name = "env", default = "dev" },
    { name = "type", max_length = 4 },
    { name = "suffix", generated = true, max_length = 4 },
]
"#;

/// Command to create a new `naming.toml`.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the manifest in (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing manifest
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Write the starter manifest.
    ///
    /// # Errors
    ///
    /// - a manifest already exists and `--force` was not given
    /// - the directory or file cannot be written
    pub async fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let manifest_path = target_dir.join(MANIFEST_FILE_NAME);

        if manifest_path.exists() && !self.force {
            return Err(anyhow!(
                "Manifest already exists at {}. Use --force to overwrite",
                manifest_path.display()
            ));
        }

        if !target_dir.exists() {
            tokio::fs::create_dir_all(&target_dir)
                .await
                .with_context(|| format!("Failed to create directory {}", target_dir.display()))?;
        }

        tokio::fs::write(&manifest_path, TEMPLATE)
            .await
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;
        debug!("Wrote starter manifest to {}", manifest_path.display());

        println!("{} Initialized {}", "✓".green(), manifest_path.display());
        println!("\nNext steps:");
        println!("  naming validate");
        println!("  naming generate api --convention service --input type=service");

        Ok(())
    }
}
