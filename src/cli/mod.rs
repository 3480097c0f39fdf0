//! Command-line interface for the naming tool.
//!
//! # Commands
//!
//! - `init` - write a starter `naming.toml`
//! - `list` - list declared conventions
//! - `validate` - validate conventions and report warnings
//! - `export` - print a convention's wire JSON
//! - `generate` - generate a name from a convention and inputs
//! - `check` - check that inputs cover a convention
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging on stderr
//! - `--quiet` / `-q` - only log errors
//! - `--manifest-path <PATH>` - use this manifest instead of searching
//!   (also read from `NAMING_MANIFEST`)
//!
//! `RUST_LOG` overrides the level chosen by `--verbose` and `--quiet`.
//!
//! # Configuration
//!
//! Runtime options are collected into a [`CliConfig`] and passed down
//! explicitly; commands never read or modify process environment variables.
//!
//! ```rust,no_run
//! use clap::Parser;
//! use naming_cli::cli::{Cli, CliConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cli = Cli::parse_from(["naming", "list"]);
//! let config = CliConfig {
//!     manifest_path: Some("infra/naming.toml".into()),
//!     ..CliConfig::new()
//! };
//! cli.execute_with_config(config).await?;
//! # Ok(())
//! # }
//! ```

mod check;
pub mod common;
mod export;
mod generate;
mod init;
mod list;
pub mod validate;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::MANIFEST_ENV_VAR;

/// Runtime configuration derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level filter (`debug`, `warn`, `error`); `None` means `warn`
    pub log_level: Option<String>,

    /// Manifest to use instead of searching upward
    pub manifest_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over [`CliConfig::log_level`]. Calling this
    /// more than once is harmless; later calls keep the first subscriber.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("warn"))
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Generate and validate resource names from declared naming conventions.
#[derive(Parser)]
#[command(
    name = "naming",
    about = "Generate resource names from naming conventions",
    version,
    long_about = "Declare naming conventions in naming.toml, validate them, export them as JSON, and generate names from them."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to naming.toml
    #[arg(long, global = true, env = MANIFEST_ENV_VAR)]
    manifest_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter naming.toml
    Init(init::InitCommand),

    /// List declared conventions
    List(list::ListCommand),

    /// Validate conventions in naming.toml
    Validate(validate::ValidateCommand),

    /// Print a convention as wire JSON
    Export(export::ExportCommand),

    /// Generate a name
    Generate(generate::GenerateCommand),

    /// Check that inputs cover a convention
    Check(check::CheckCommand),
}

impl Cli {
    /// Initialise logging and run the selected command.
    ///
    /// # Errors
    ///
    /// Returns the command's error; see [`user_friendly_error`](crate::core::user_friendly_error)
    /// for how `main` displays it.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Derive the runtime configuration from global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            manifest_path: self.manifest_path.clone(),
        }
    }

    /// Run the selected command with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns the command's error.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let manifest_path = config.manifest_path;

        match self.command {
            Commands::Init(cmd) => cmd.execute().await,
            Commands::List(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Validate(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Export(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Generate(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
            Commands::Check(cmd) => cmd.execute_with_manifest_path(manifest_path).await,
        }
    }
}
