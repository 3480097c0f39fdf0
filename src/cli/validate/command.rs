//! Command-line arguments for `naming validate`.

use clap::Args;

use crate::cli::common::OutputFormat;

/// Command to validate conventions in the manifest.
#[derive(Args)]
pub struct ValidateCommand {
    /// Only validate this convention id
    #[arg(value_name = "CONVENTION")]
    pub convention: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}
