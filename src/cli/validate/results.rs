//! Validation report types.

use serde::Serialize;

use crate::convention::{ConventionError, ConventionWarning};

/// Outcome for one convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConventionReport {
    pub id: String,
    pub definition: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConventionReport {
    #[must_use]
    pub fn new(
        id: &str,
        definition: &str,
        errors: &[ConventionError],
        warnings: &[ConventionWarning],
    ) -> Self {
        Self {
            id: id.to_string(),
            definition: definition.to_string(),
            valid: errors.is_empty(),
            errors: errors.iter().map(|e| format!("{}: {}", e.summary(), e)).collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// The full report printed by `naming validate --format json`.
///
/// `errors` and `warnings` repeat every per-convention message prefixed with
/// the convention id, plus manifest-level problems.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResults {
    pub valid: bool,
    pub manifest_valid: bool,
    pub conventions_checked: usize,
    pub conventions: Vec<ConventionReport>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationResults {
    fn default() -> Self {
        Self {
            valid: true,
            manifest_valid: false,
            conventions_checked: 0,
            conventions: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationResults {
    /// Record a convention report and fold its messages into the totals.
    pub fn push(&mut self, report: ConventionReport) {
        self.conventions_checked += 1;
        self.errors.extend(report.errors.iter().map(|e| format!("{}: {}", report.id, e)));
        self.warnings.extend(report.warnings.iter().map(|w| format!("{}: {}", report.id, w)));
        self.valid &= report.valid;
        self.conventions.push(report);
    }

    /// Results for a manifest that could not be loaded.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }
}
