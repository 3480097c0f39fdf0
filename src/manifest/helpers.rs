//! Manifest discovery and name suggestions.

use anyhow::{Context, Result};
use std::path::PathBuf;
use strsim::levenshtein;

use crate::constants::{MANIFEST_FILE_NAME, SIMILARITY_THRESHOLD_PERCENT};
use crate::core::NamingError;

/// Find the manifest by searching upward from the current directory.
///
/// # Errors
///
/// Returns [`NamingError::ManifestNotFound`] when no `naming.toml` exists in
/// the current directory or any of its ancestors.
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory. This may indicate a permission issue or corrupted filesystem")?;
    find_manifest_from(current)
}

/// Find the manifest using an explicit path, falling back to a directory search.
///
/// An explicit path must exist; it is never silently ignored.
///
/// # Errors
///
/// - Explicit path provided but doesn't exist
/// - No explicit path and no manifest found via search
///
/// # Examples
///
/// ```rust,no_run
/// use naming_cli::manifest::find_manifest_with_optional;
/// use std::path::PathBuf;
///
/// # fn main() -> anyhow::Result<()> {
/// let explicit = find_manifest_with_optional(Some(PathBuf::from("infra/naming.toml")))?;
/// let searched = find_manifest_with_optional(None)?;
/// # Ok(())
/// # }
/// ```
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.is_file() {
                Ok(path)
            } else {
                Err(NamingError::ManifestNotFound)
                    .with_context(|| format!("No manifest at {}", path.display()))
            }
        }
        None => find_manifest(),
    }
}

/// Find the manifest by searching up from a specific starting directory.
///
/// # Algorithm
///
/// 1. Check for `naming.toml` in the current directory
/// 2. If found, return the full path
/// 3. If not found, move to the parent directory
/// 4. Repeat until found or the filesystem root is reached
///
/// # Errors
///
/// Returns [`NamingError::ManifestNotFound`] once the root has been checked.
pub fn find_manifest_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(MANIFEST_FILE_NAME);
        if manifest_path.is_file() {
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(NamingError::ManifestNotFound.into());
        }
    }
}

/// Names from `available` that are close to `target` by edit distance.
///
/// At most three are returned, closest first. A candidate qualifies when its
/// Levenshtein distance is within [`SIMILARITY_THRESHOLD_PERCENT`] of the
/// target's length.
pub fn find_similar<'a>(target: &str, available: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut scored: Vec<_> =
        available.into_iter().map(|candidate| (candidate, levenshtein(target, candidate))).collect();

    // Sort by distance (closest first)
    scored.sort_by_key(|(_, dist)| *dist);

    let threshold = target.chars().count() * SIMILARITY_THRESHOLD_PERCENT / 100;
    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= threshold)
        .take(3)
        .map(|(candidate, _)| candidate.to_string())
        .collect()
}
