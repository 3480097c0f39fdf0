//! Sample manifests for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE_NAME;

/// Test fixture for creating sample naming.toml files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    /// Two valid conventions: one with defaults and limits, one with a generated suffix
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
[settings]
generated_length = 6

[conventions.service]
description = "Compute services"
definition = "(name)-(type)-(default)"
variables = [
    { name = "type", max_length = 4 },
    { name = "default", default = "default" },
]

[conventions.storage]
definition = "(name)(env)(suffix)"
variables = [
    { name = "env", default = "dev", max_length = 3 },
    { name = "suffix", generated = true, max_length = 4 },
]
"#
            .trim()
            .to_string(),
        }
    }

    /// One valid convention and one that fails validation
    pub fn with_invalid() -> Self {
        Self {
            name: "with_invalid".to_string(),
            content: r#"
[conventions.service]
definition = "(name)-(env)"
variables = [{ name = "env" }]

[conventions.broken]
definition = "(env)-(zone)"
variables = [{ name = "env" }, { name = "type" }]
"#
            .trim()
            .to_string(),
        }
    }

    /// A valid convention that produces warnings
    pub fn with_warnings() -> Self {
        Self {
            name: "with_warnings".to_string(),
            content: r#"
[conventions.loose]
definition = "(name)-(Env)-(zone)"
variables = [{ name = "env", default = "dev" }, { name = "env", default = "prd" }]
"#
            .trim()
            .to_string(),
        }
    }

    /// Manifest with invalid TOML syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"
[conventions.service
definition = "(name)"
"#
            .trim()
            .to_string(),
        }
    }

    /// Empty manifest (only comments)
    pub fn empty() -> Self {
        Self {
            name: "empty".to_string(),
            content: "# No conventions declared".to_string(),
        }
    }

    /// Write the manifest to `dir/naming.toml`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", self.name))?;
        Ok(manifest_path)
    }
}
