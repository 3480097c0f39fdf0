//! Stateless name generation from a stored convention.

use thiserror::Error;

use crate::constants::NAME_VARIABLE;
use crate::convention::{Convention, ConventionError, Inputs, format_diagnostics};
use crate::generator::{NameGenerator, RandomSource};

/// Why a function call produced no name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// The convention argument could not be decoded.
    #[error("Error reading convention: {0}")]
    ReadConvention(ConventionError),

    /// Decoding succeeded but the inputs check or generation failed.
    #[error("Error generating name: {0}")]
    GenerateName(ConventionError),
}

/// Generate a name for the subject found under the `name` input.
///
/// The subject name is read from `inputs["name"]`; the other entries feed the
/// convention's variables as usual. The subject must be non-empty unless the
/// convention declares a `name` variable, which then falls back to its
/// default or generated value like any other variable.
///
/// # Errors
///
/// - [`FunctionError::ReadConvention`] when `convention_json` is malformed
/// - [`FunctionError::GenerateName`] when inputs are missing or a value is empty
///
/// # Examples
///
/// ```
/// use naming_cli::adapters::function::generate_name;
/// use naming_cli::convention::Inputs;
///
/// let json = r#"{"definition":"(name)-(env)","variables":[{"name":"\"env\"","default":"<null>","generated":"<null>","max_length":"<null>"}]}"#;
/// let inputs = Inputs::from([
///     ("name".to_string(), "api".to_string()),
///     ("env".to_string(), "prd".to_string()),
/// ]);
/// assert_eq!(generate_name(json, &inputs).unwrap(), "api-prd");
///
/// let err = generate_name("{", &inputs).unwrap_err();
/// assert!(err.to_string().starts_with("Error reading convention: "));
/// ```
pub fn generate_name(convention_json: &str, inputs: &Inputs) -> Result<String, FunctionError> {
    generate_name_with(&NameGenerator::new(), convention_json, inputs)
}

/// [`generate_name`] with a caller-configured generator.
///
/// # Errors
///
/// See [`generate_name`].
pub fn generate_name_with<R: RandomSource>(
    generator: &NameGenerator<R>,
    convention_json: &str,
    inputs: &Inputs,
) -> Result<String, FunctionError> {
    let convention = Convention::from_json(convention_json).map_err(FunctionError::ReadConvention)?;

    if let Some(missing) = convention.validate_inputs(inputs).into_iter().next() {
        return Err(FunctionError::GenerateName(missing));
    }

    // A declared `name` variable resolves through its own default or
    // generation; otherwise the subject must come from the input.
    let subject = inputs.get(NAME_VARIABLE).map_or("", String::as_str);
    if subject.is_empty() && !convention.binds_name() {
        return Err(FunctionError::GenerateName(ConventionError::MissingValue {
            variable: NAME_VARIABLE.to_string(),
        }));
    }

    generator.generate(subject, inputs, &convention).map_err(FunctionError::GenerateName)
}

impl FunctionError {
    /// The engine error behind this failure.
    #[must_use]
    pub const fn source_error(&self) -> &ConventionError {
        match self {
            Self::ReadConvention(e) | Self::GenerateName(e) => e,
        }
    }

    /// Diagnostic line in `summary: message` form.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format_diagnostics(std::slice::from_ref(self.source_error()))
    }
}
