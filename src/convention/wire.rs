//! Compact JSON transport form of a [`Convention`].
//!
//! The shape is kept compatible with conventions stored by earlier provider
//! releases:
//!
//! ```json
//! {"definition":"(name)-(type)","variables":[{"name":"\"type\"","default":"<null>","generated":"<null>","max_length":"4"}]}
//! ```
//!
//! Every variable field is a string:
//! - set strings are written quoted (`"\"type\""`); bare strings are also accepted
//! - unset attributes are written as `<null>`, indeterminate ones as `<unknown>`
//! - booleans are `true` / `false`, lengths are decimal integers
//!
//! Payloads written before variables could be generated have no `generated`
//! key; it decodes as unset.

use serde::{Deserialize, Serialize};

use super::{AttrValue, Convention, ConventionError, Variable};
use crate::constants::{NULL_SENTINEL, UNKNOWN_SENTINEL};

/// Wire form of a whole convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireConvention {
    pub definition: String,
    #[serde(default)]
    pub variables: Vec<WireVariable>,
}

/// Wire form of one variable; every attribute is a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireVariable {
    pub name: String,
    #[serde(default = "null_sentinel")]
    pub default: String,
    #[serde(default = "null_sentinel")]
    pub generated: String,
    #[serde(default = "null_sentinel")]
    pub max_length: String,
}

fn null_sentinel() -> String {
    NULL_SENTINEL.to_string()
}

/// Encode a convention as compact JSON.
///
/// # Errors
///
/// Returns an error only if `serde_json` fails to serialize, which does not
/// happen for well-formed strings.
pub fn to_json(convention: &Convention) -> serde_json::Result<String> {
    serde_json::to_string(&encode(convention))
}

/// Encode a convention as indented JSON, for display.
///
/// # Errors
///
/// See [`to_json`].
pub fn to_json_pretty(convention: &Convention) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&encode(convention))
}

/// Decode a convention from its JSON form.
///
/// # Errors
///
/// Returns [`ConventionError::MalformedConvention`] when the payload is not
/// valid JSON, has the wrong shape, or carries an attribute that cannot be
/// parsed (for example a non-numeric `max_length`).
///
/// # Examples
///
/// ```
/// use naming_cli::convention::wire;
///
/// let json = r#"{"definition":"(name)-(env)","variables":[{"name":"env","default":"\"dev\"","max_length":"<null>"}]}"#;
/// let convention = wire::from_json(json).unwrap();
/// assert_eq!(convention.variables[0].default_value(), "dev");
/// assert!(wire::from_json("{not json").is_err());
/// ```
pub fn from_json(json: &str) -> Result<Convention, ConventionError> {
    let wire: WireConvention = serde_json::from_str(json)
        .map_err(|e| ConventionError::malformed(format!("invalid JSON: {e}")))?;
    decode(&wire)
}

/// Convert a convention to its wire structure.
#[must_use]
pub fn encode(convention: &Convention) -> WireConvention {
    WireConvention {
        definition: convention.definition.clone(),
        variables: convention.variables.iter().map(encode_variable).collect(),
    }
}

/// Convert a wire structure back to a convention.
///
/// # Errors
///
/// See [`from_json`].
pub fn decode(wire: &WireConvention) -> Result<Convention, ConventionError> {
    let variables = wire.variables.iter().map(decode_variable).collect::<Result<Vec<_>, _>>()?;
    Ok(Convention::new(wire.definition.clone(), variables))
}

#[must_use]
pub fn encode_variable(variable: &Variable) -> WireVariable {
    WireVariable {
        name: quote(&variable.name),
        default: encode_attr(&variable.default, |s| quote(s)),
        generated: encode_attr(&variable.generated, ToString::to_string),
        max_length: encode_attr(&variable.max_length, ToString::to_string),
    }
}

/// Decode one variable.
///
/// # Errors
///
/// Fails when the name is unset or empty, or when `generated` / `max_length`
/// cannot be parsed.
pub fn decode_variable(wire: &WireVariable) -> Result<Variable, ConventionError> {
    let name = match decode_string(&wire.name) {
        AttrValue::Value(name) if !name.is_empty() => name,
        _ => {
            return Err(ConventionError::malformed(format!(
                "variable name '{}' is not a usable identifier",
                wire.name
            )));
        }
    };

    let generated = decode_attr(&wire.generated, |raw| match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("variable '{name}' has invalid generated flag '{other}'")),
    })?;

    let max_length = decode_attr(&wire.max_length, |raw| {
        raw.parse::<u64>()
            .map_err(|_| format!("variable '{name}' has invalid max_length '{raw}'"))
    })?;

    Ok(Variable {
        default: decode_string(&wire.default),
        generated,
        max_length,
        name,
    })
}

fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn encode_attr<T>(value: &AttrValue<T>, encode: impl Fn(&T) -> String) -> String {
    match value {
        AttrValue::Value(v) => encode(v),
        AttrValue::Null => NULL_SENTINEL.to_string(),
        AttrValue::Unknown => UNKNOWN_SENTINEL.to_string(),
    }
}

fn decode_attr<T>(
    raw: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<AttrValue<T>, ConventionError> {
    match raw {
        NULL_SENTINEL => Ok(AttrValue::Null),
        UNKNOWN_SENTINEL => Ok(AttrValue::Unknown),
        other => parse(other).map(AttrValue::Value).map_err(ConventionError::malformed),
    }
}

/// Strings are stored quoted; older writers may have stored them bare.
fn decode_string(raw: &str) -> AttrValue<String> {
    match raw {
        NULL_SENTINEL => AttrValue::Null,
        UNKNOWN_SENTINEL => AttrValue::Unknown,
        quoted if quoted.len() >= 2 && quoted.starts_with('"') && quoted.ends_with('"') => {
            let value = serde_json::from_str::<String>(quoted)
                .unwrap_or_else(|_| quoted.trim_matches(['\\', '"']).to_string());
            AttrValue::Value(value)
        }
        bare => AttrValue::Value(bare.to_string()),
    }
}
