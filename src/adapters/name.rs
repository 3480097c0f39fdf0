//! Name records: a generated name bound to a subject and a stored convention.
//!
//! A record is created once and its `id` (`<definition>/<name>`) is stable
//! across updates; an update only regenerates `result`.

use serde::Serialize;
use tracing::debug;

use crate::convention::{Convention, ConventionError, Inputs};
use crate::generator::{AlphanumericSource, NameGenerator, RandomSource};

/// Everything a host supplies to create or update a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    /// The subject name bound to `(name)`.
    pub name: String,
    pub inputs: Inputs,
    /// Wire JSON produced by [`declare`](super::convention::declare).
    pub convention: String,
}

/// The stored outcome of a name request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub id: String,
    pub name: String,
    pub result: String,
}

/// Creates and updates [`NameRecord`]s.
#[derive(Debug, Clone)]
pub struct NameResource<R = AlphanumericSource> {
    generator: NameGenerator<R>,
}

impl NameResource {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(NameGenerator::new())
    }
}

impl Default for NameResource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> NameResource<R> {
    /// Use a specific generator, e.g. one configured from the manifest.
    pub fn with_generator(generator: NameGenerator<R>) -> Self {
        Self {
            generator,
        }
    }

    /// Generate a new record.
    ///
    /// # Errors
    ///
    /// - a single [`ConventionError::MalformedConvention`] if the JSON cannot be read
    /// - the [`ConventionError::MissingInputs`] list from the inputs check
    /// - a single [`ConventionError::MissingValue`] from generation
    pub fn create(&self, request: &NameRequest) -> Result<NameRecord, Vec<ConventionError>> {
        let convention = Convention::from_json(&request.convention).map_err(|e| vec![e])?;
        let result = self.render(&convention, request)?;

        let id = format!("{}/{}", convention.definition, request.name);
        debug!("Created name record '{}'", id);

        Ok(NameRecord {
            id,
            name: request.name.clone(),
            result,
        })
    }

    /// Regenerate `existing` from a changed request, keeping its id.
    ///
    /// # Errors
    ///
    /// Same as [`NameResource::create`]; `existing` is left untouched on error.
    pub fn update(
        &self,
        existing: &NameRecord,
        request: &NameRequest,
    ) -> Result<NameRecord, Vec<ConventionError>> {
        let convention = Convention::from_json(&request.convention).map_err(|e| vec![e])?;
        let result = self.render(&convention, request)?;

        debug!("Updated name record '{}'", existing.id);

        Ok(NameRecord {
            id: existing.id.clone(),
            name: request.name.clone(),
            result,
        })
    }

    fn render(
        &self,
        convention: &Convention,
        request: &NameRequest,
    ) -> Result<String, Vec<ConventionError>> {
        let missing = convention.validate_inputs(&request.inputs);
        if !missing.is_empty() {
            return Err(missing);
        }

        self.generator.generate(&request.name, &request.inputs, convention).map_err(|e| vec![e])
    }
}
