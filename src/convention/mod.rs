//! Naming conventions: the domain model shared by every surface of the tool.
//!
//! A [`Convention`] is a definition string such as `"(name)-(env)-(type)"`
//! plus an ordered list of [`Variable`] declarations. Each variable owns the
//! block `"(" + name + ")"` in the definition. The block `(name)` is special:
//! it is bound to the subject name supplied by the caller at generation time.
//!
//! # Lifecycle
//!
//! 1. A convention is declared (from `naming.toml` or programmatically)
//! 2. [`validate_convention`] checks the definition against the declarations
//! 3. The convention is encoded with [`wire::to_json`] and handed to consumers
//! 4. Consumers decode it, run [`validate_inputs`] and then the
//!    [`NameGenerator`](crate::generator::NameGenerator)
//!
//! # Optional attributes
//!
//! Optional attributes are tri-state ([`AttrValue`]): set, null (never set) or
//! unknown (not yet known when the convention was encoded). Only the wire
//! format spells these states as `<null>` / `<unknown>` strings.
//!
//! # Example
//!
//! ```
//! use naming_cli::convention::{Convention, Variable};
//!
//! let convention = Convention::new(
//!     "(name)-(type)",
//!     vec![Variable::new("type").with_max_length(4)],
//! );
//! assert!(convention.validate().is_empty());
//! ```

mod error;
mod validation;
pub mod wire;

pub use error::{ConventionError, format_diagnostics};
pub use validation::{
    ConventionWarning, inspect_convention, placeholder_blocks, validate_convention, validate_inputs,
};

use std::collections::BTreeMap;

use crate::constants::NAME_VARIABLE;

/// Runtime inputs keyed by variable name.
pub type Inputs = BTreeMap<String, String>;

/// Build the placeholder block for a variable name: `type` becomes `(type)`.
#[must_use]
pub fn block_for(name: &str) -> String {
    format!("({name})")
}

/// An optional attribute that distinguishes "never set" from "not known yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttrValue<T> {
    /// The attribute carries a concrete value.
    Value(T),
    /// The attribute was not set.
    #[default]
    Null,
    /// The attribute's value was indeterminate when it was recorded.
    Unknown,
}

impl<T> AttrValue<T> {
    /// The concrete value, if there is one.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null | Self::Unknown => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl<T> From<Option<T>> for AttrValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

/// A variable declared by a convention.
///
/// Use the `with_*` builders to set optional attributes:
///
/// ```
/// use naming_cli::convention::Variable;
///
/// let suffix = Variable::new("suffix").with_generated(true).with_max_length(4);
/// assert!(suffix.is_generated());
/// assert_eq!(suffix.length_limit(), Some(4));
/// assert_eq!(suffix.block(), "(suffix)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Identifier used to build the `(name)` block and to look up inputs
    pub name: String,
    /// Value used when no input is supplied and nothing is generated
    pub default: AttrValue<String>,
    /// Whether the value comes from the random source instead of inputs
    pub generated: AttrValue<bool>,
    /// Upper bound on the replacement length in characters; 0 means no bound
    pub max_length: AttrValue<u64>,
}

impl Variable {
    /// Declare a variable with no default, no generation and no length limit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: AttrValue::Null,
            generated: AttrValue::Null,
            max_length: AttrValue::Null,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = AttrValue::Value(default.into());
        self
    }

    #[must_use]
    pub fn with_generated(mut self, generated: bool) -> Self {
        self.generated = AttrValue::Value(generated);
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: u64) -> Self {
        self.max_length = AttrValue::Value(max_length);
        self
    }

    /// The placeholder this variable replaces.
    #[must_use]
    pub fn block(&self) -> String {
        block_for(&self.name)
    }

    /// Whether this variable is bound to the subject name.
    #[must_use]
    pub fn is_name(&self) -> bool {
        self.name == NAME_VARIABLE
    }

    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self.generated, AttrValue::Value(true))
    }

    /// The length cap, when one is set and greater than zero.
    #[must_use]
    pub fn length_limit(&self) -> Option<usize> {
        match self.max_length {
            AttrValue::Value(n) if n > 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => None,
        }
    }

    /// The declared default, or the empty string.
    #[must_use]
    pub fn default_value(&self) -> &str {
        self.default.value().map_or("", String::as_str)
    }

    /// Whether a caller must supply an input for this variable.
    ///
    /// Only variables with no default that are not generated and are not
    /// bound to the subject name need an input.
    #[must_use]
    pub fn requires_input(&self) -> bool {
        self.default.is_null() && !self.is_generated() && !self.is_name()
    }
}

/// A definition string and the variables it declares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Convention {
    /// The template, e.g. `"(name)-(env)"`
    pub definition: String,
    /// Declarations in substitution order
    pub variables: Vec<Variable>,
}

impl Convention {
    pub fn new(definition: impl Into<String>, variables: Vec<Variable>) -> Self {
        Self {
            definition: definition.into(),
            variables,
        }
    }

    /// Validate this convention; see [`validate_convention`].
    #[must_use]
    pub fn validate(&self) -> Vec<ConventionError> {
        validate_convention(&self.definition, &self.variables)
    }

    /// Check that `inputs` covers every variable that needs one.
    #[must_use]
    pub fn validate_inputs(&self, inputs: &Inputs) -> Vec<ConventionError> {
        validate_inputs(inputs, &self.variables)
    }

    /// Whether a declared variable is bound to the subject name.
    #[must_use]
    pub fn binds_name(&self) -> bool {
        self.variables.iter().any(Variable::is_name)
    }

    /// Look up a declared variable by exact name. The first declaration wins.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Encode as compact wire JSON.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        wire::to_json(self)
    }

    /// Decode from wire JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConventionError::MalformedConvention`] for invalid payloads.
    pub fn from_json(json: &str) -> Result<Self, ConventionError> {
        wire::from_json(json)
    }
}
