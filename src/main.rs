//! naming CLI entry point
//!
//! Parses arguments, runs the selected command and renders failures with
//! [`user_friendly_error`] before exiting with status 1.

use anyhow::Result;
use clap::Parser;
use naming_cli::cli;
use naming_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
