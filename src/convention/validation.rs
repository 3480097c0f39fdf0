//! Convention and input validation.
//!
//! Both validators collect every problem in one pass and return them as data;
//! an empty result means "valid". Neither one stops at the first failure.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use tracing::debug;

use super::{ConventionError, Convention, Inputs, Variable, block_for};
use crate::constants::{NAME_BLOCK, NAME_VARIABLE};

/// Matches a `(identifier)` placeholder.
const PLACEHOLDER_PATTERN: &str = r"\(([A-Za-z0-9_.\-]+)\)";

/// Check that a definition contains `(name)` and a block for every variable.
///
/// Matching is case-insensitive on both sides: `(NAME)` satisfies the name
/// requirement and `(Env)` satisfies a variable declared as `env`. Only
/// presence is checked. Extra placeholders and duplicate declarations are not
/// errors (see [`inspect_convention`] for those).
///
/// # Examples
///
/// ```
/// use naming_cli::convention::{ConventionError, Variable, validate_convention};
///
/// let errors = validate_convention("(type)-(env)", &[Variable::new("type")]);
/// assert_eq!(errors, vec![ConventionError::MissingNameBlock]);
///
/// let errors = validate_convention("(name)", &[Variable::new("type"), Variable::new("env")]);
/// assert_eq!(errors.len(), 1);
/// assert!(errors[0].to_string().ends_with("Missing blocks: (type), (env)"));
/// ```
#[must_use]
pub fn validate_convention(definition: &str, variables: &[Variable]) -> Vec<ConventionError> {
    let haystack = definition.to_lowercase();
    let mut errors = Vec::new();

    if !haystack.contains(NAME_BLOCK) {
        errors.push(ConventionError::MissingNameBlock);
    }

    let missing: Vec<String> = variables
        .iter()
        .map(Variable::block)
        .filter(|block| !haystack.contains(&block.to_lowercase()))
        .collect();

    if !missing.is_empty() {
        errors.push(ConventionError::MissingVariableBlocks {
            blocks: missing,
        });
    }

    debug!(
        "Validated convention '{}' ({} variables): {} error(s)",
        definition,
        variables.len(),
        errors.len()
    );

    errors
}

/// Check that every variable needing an input has one.
///
/// A variable needs an input when it has no default, is not generated and is
/// not the `name` variable. All missing names are reported in a single
/// [`ConventionError::MissingInputs`].
///
/// ```
/// use naming_cli::convention::{Inputs, Variable, validate_inputs};
///
/// let variables = [Variable::new("type"), Variable::new("env").with_default("dev")];
/// assert_eq!(validate_inputs(&Inputs::new(), &variables).len(), 1);
///
/// let inputs = Inputs::from([("type".to_string(), "svc".to_string())]);
/// assert!(validate_inputs(&inputs, &variables).is_empty());
/// ```
#[must_use]
pub fn validate_inputs(inputs: &Inputs, variables: &[Variable]) -> Vec<ConventionError> {
    let missing: Vec<String> = variables
        .iter()
        .filter(|v| v.requires_input() && !inputs.contains_key(&v.name))
        .map(|v| v.name.clone())
        .collect();

    if missing.is_empty() {
        Vec::new()
    } else {
        debug!("Missing inputs: {}", missing.join(", "));
        vec![ConventionError::MissingInputs {
            names: missing,
        }]
    }
}

/// List the `(identifier)` placeholders in a definition, in order of first use.
///
/// ```
/// use naming_cli::convention::placeholder_blocks;
///
/// assert_eq!(
///     placeholder_blocks("(name)-(env)-(name)"),
///     vec!["(name)".to_string(), "(env)".to_string()]
/// );
/// ```
#[must_use]
pub fn placeholder_blocks(definition: &str) -> Vec<String> {
    let Ok(re) = Regex::new(PLACEHOLDER_PATTERN) else {
        return Vec::new();
    };

    let mut seen = BTreeSet::new();
    re.find_iter(definition)
        .map(|m| m.as_str().to_string())
        .filter(|block| seen.insert(block.clone()))
        .collect()
}

/// A non-fatal observation about a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConventionWarning {
    /// A placeholder that is neither `(name)` nor declared; it stays literal.
    UndeclaredPlaceholder {
        block: String,
    },
    /// A placeholder that matches a declaration only when case is ignored.
    ///
    /// Substitution is case-sensitive, so the placeholder would stay literal.
    CaseMismatch {
        declared: String,
        found: String,
    },
    /// The same variable name is declared more than once. The first
    /// declaration replaces every occurrence of the block.
    DuplicateVariable {
        name: String,
    },
}

impl fmt::Display for ConventionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredPlaceholder {
                block,
            } => write!(f, "Placeholder {block} is not declared and will be left as-is"),
            Self::CaseMismatch {
                declared,
                found,
            } => write!(
                f,
                "Placeholder {found} differs in case from {declared} and will not be substituted"
            ),
            Self::DuplicateVariable {
                name,
            } => write!(
                f,
                "Variable '{name}' is declared more than once; only the first declaration is used"
            ),
        }
    }
}

/// Collect warnings for a convention.
///
/// Warnings never make a convention invalid; the `validate` command only
/// fails on them in strict mode.
#[must_use]
pub fn inspect_convention(convention: &Convention) -> Vec<ConventionWarning> {
    let mut warnings = Vec::new();

    let mut names = BTreeSet::new();
    for variable in &convention.variables {
        if !names.insert(variable.name.as_str()) {
            warnings.push(ConventionWarning::DuplicateVariable {
                name: variable.name.clone(),
            });
        }
    }

    let mut declared: Vec<String> = convention.variables.iter().map(Variable::block).collect();
    if !convention.binds_name() {
        declared.push(block_for(NAME_VARIABLE));
    }

    for block in placeholder_blocks(&convention.definition) {
        if declared.contains(&block) {
            continue;
        }
        match declared.iter().find(|d| d.eq_ignore_ascii_case(&block)) {
            Some(d) => warnings.push(ConventionWarning::CaseMismatch {
                declared: d.clone(),
                found: block,
            }),
            None => warnings.push(ConventionWarning::UndeclaredPlaceholder {
                block,
            }),
        }
    }

    warnings
}
