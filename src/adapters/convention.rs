//! Declare-and-validate: turn a definition and its variables into a
//! persisted convention.

use tracing::debug;

use crate::convention::{Convention, ConventionError, Variable};

/// A validated convention together with its wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredConvention {
    /// Identifier of the declaration; the definition string itself.
    pub id: String,
    pub definition: String,
    pub variables: Vec<Variable>,
    /// Compact wire JSON handed to name consumers.
    pub convention: String,
}

impl DeclaredConvention {
    /// The engine form of this declaration.
    #[must_use]
    pub fn to_convention(&self) -> Convention {
        Convention::new(self.definition.clone(), self.variables.clone())
    }
}

/// Validate `definition` against `variables` and encode the result.
///
/// Nothing is produced when validation reports any error; the full list is
/// returned so every problem can be shown at once.
///
/// # Errors
///
/// Returns every [`ConventionError`] from
/// [`validate_convention`](crate::convention::validate_convention).
///
/// # Examples
///
/// ```
/// use naming_cli::adapters::convention::declare;
/// use naming_cli::convention::Variable;
///
/// let declared = declare("(name)-(env)", vec![Variable::new("env")]).unwrap();
/// assert_eq!(declared.id, "(name)-(env)");
/// assert!(declared.convention.starts_with(r#"{"definition":"(name)-(env)""#));
///
/// let errors = declare("(env)", vec![Variable::new("env")]).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn declare(
    definition: &str,
    variables: Vec<Variable>,
) -> Result<DeclaredConvention, Vec<ConventionError>> {
    let convention = Convention::new(definition, variables);

    let errors = convention.validate();
    if !errors.is_empty() {
        debug!("Declaration of '{}' rejected with {} error(s)", definition, errors.len());
        return Err(errors);
    }

    let json = convention
        .to_json()
        .map_err(|e| vec![ConventionError::malformed(format!("cannot encode convention: {e}"))])?;

    Ok(DeclaredConvention {
        id: convention.definition.clone(),
        definition: convention.definition,
        variables: convention.variables,
        convention: json,
    })
}
