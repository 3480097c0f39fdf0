//! Name generation from a validated convention.
//!
//! [`NameGenerator`] walks the declared variables in order and, for each one,
//! resolves a replacement and substitutes its block in the running result:
//!
//! 1. `name` binds to the subject name; any other variable reads its input
//! 2. a generated variable is replaced by a random alphanumeric string, never
//!    longer than [`MAX_GENERATED_LENGTH`]
//! 3. an empty value falls back to the declared default
//! 4. the value is truncated to `max_length` characters
//! 5. a value that is still empty fails with [`ConventionError::MissingValue`]
//! 6. every `(variable)` occurrence is replaced, case-sensitively
//!
//! When no variable is named `name`, every `(name)` is replaced by the subject
//! name at the end.
//!
//! Randomness is a capability passed in through [`RandomSource`]; the default
//! [`AlphanumericSource`] draws from the thread-local generator of `rand`.
//! Generated values identify resources, they are not secrets.

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::{debug, trace};

use crate::constants::{DEFAULT_GENERATED_LENGTH, MAX_GENERATED_LENGTH, NAME_BLOCK};
use crate::convention::{Convention, ConventionError, Inputs, Variable};

/// Produces random alphanumeric strings for generated variables.
pub trait RandomSource: Send + Sync {
    /// Return a string of exactly `length` ASCII alphanumeric characters.
    fn alphanumeric(&self, length: usize) -> String;
}

/// [`RandomSource`] backed by `rand::rng()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphanumericSource;

impl RandomSource for AlphanumericSource {
    fn alphanumeric(&self, length: usize) -> String {
        rand::rng().sample_iter(Alphanumeric).take(length).map(char::from).collect()
    }
}

/// Resolves variables and substitutes them into a convention's definition.
///
/// # Examples
///
/// ```
/// use naming_cli::convention::{Convention, Inputs, Variable};
/// use naming_cli::generator::NameGenerator;
///
/// let convention = Convention::new(
///     "(name)-(type)-(default)",
///     vec![
///         Variable::new("type").with_max_length(4),
///         Variable::new("default").with_default("default"),
///     ],
/// );
/// let inputs = Inputs::from([("type".to_string(), "service".to_string())]);
///
/// let result = NameGenerator::new().generate("foobar", &inputs, &convention).unwrap();
/// assert_eq!(result, "foobar-serv-default");
/// ```
#[derive(Debug, Clone)]
pub struct NameGenerator<R = AlphanumericSource> {
    source: R,
    generated_length: usize,
}

impl NameGenerator {
    /// Generator using [`AlphanumericSource`] and the default generated length.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(AlphanumericSource)
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> NameGenerator<R> {
    /// Generator drawing random values from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            source,
            generated_length: DEFAULT_GENERATED_LENGTH,
        }
    }

    /// Length of generated values for variables without a `max_length`.
    ///
    /// Capped at [`MAX_GENERATED_LENGTH`].
    #[must_use]
    pub fn generated_length(mut self, length: usize) -> Self {
        self.generated_length = length.min(MAX_GENERATED_LENGTH);
        self
    }

    /// Produce a name from `convention` for `subject_name`.
    ///
    /// The convention and inputs are only read. Callers are expected to have
    /// run [`validate_inputs`](crate::convention::validate_inputs) first.
    ///
    /// # Errors
    ///
    /// Returns [`ConventionError::MissingValue`] for the first variable whose
    /// value is empty after input lookup, generation and default fallback.
    pub fn generate(
        &self,
        subject_name: &str,
        inputs: &Inputs,
        convention: &Convention,
    ) -> Result<String, ConventionError> {
        let mut result = convention.definition.clone();

        for variable in &convention.variables {
            let replacement = self.resolve(variable, subject_name, inputs)?;
            trace!("Substituting {} with '{}'", variable.block(), replacement);
            result = result.replace(&variable.block(), &replacement);
        }

        if !convention.binds_name() {
            result = result.replace(NAME_BLOCK, subject_name);
        }

        debug!("Generated '{}' from convention '{}'", result, convention.definition);
        Ok(result)
    }

    fn resolve(
        &self,
        variable: &Variable,
        subject_name: &str,
        inputs: &Inputs,
    ) -> Result<String, ConventionError> {
        let mut value = if variable.is_name() {
            subject_name.to_string()
        } else {
            inputs.get(&variable.name).cloned().unwrap_or_default()
        };

        if variable.is_generated() {
            let length = variable
                .length_limit()
                .unwrap_or(self.generated_length)
                .min(MAX_GENERATED_LENGTH);
            value = self.source.alphanumeric(length);
        }

        if value.is_empty() {
            value = variable.default_value().to_string();
        }

        if let Some(limit) = variable.length_limit() {
            value = truncate_chars(value, limit);
        }

        if value.is_empty() {
            return Err(ConventionError::MissingValue {
                variable: variable.name.clone(),
            });
        }

        Ok(value)
    }
}

/// Generate a name with a default [`NameGenerator`].
///
/// # Errors
///
/// See [`NameGenerator::generate`].
pub fn generate_name(
    subject_name: &str,
    inputs: &Inputs,
    convention: &Convention,
) -> Result<String, ConventionError> {
    NameGenerator::new().generate(subject_name, inputs, convention)
}

/// Keep the first `limit` characters of `value`.
fn truncate_chars(mut value: String, limit: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(limit) {
        value.truncate(idx);
    }
    value
}
