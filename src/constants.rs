//! Global constants used throughout the naming codebase.
//!
//! Wire sentinels, file names and generation defaults live here so the
//! engine, the manifest loader and the CLI agree on them.

/// File name of the project manifest searched for by the CLI.
pub const MANIFEST_FILE_NAME: &str = "naming.toml";

/// Environment variable that points the CLI at an explicit manifest.
///
/// Checked after `--manifest-path` and before the directory search.
pub const MANIFEST_ENV_VAR: &str = "NAMING_MANIFEST";

/// The placeholder bound to the caller-supplied subject name.
pub const NAME_VARIABLE: &str = "name";

/// The block every convention definition must contain.
pub const NAME_BLOCK: &str = "(name)";

/// Length of a generated value when the variable declares no `max_length`.
pub const DEFAULT_GENERATED_LENGTH: usize = 8;

/// Upper bound on the length of a generated value.
///
/// A larger `max_length` on a generated variable is clamped to this value
/// before drawing random characters; a larger `settings.generated_length` is
/// rejected by manifest validation.
pub const MAX_GENERATED_LENGTH: usize = 1024;

/// Wire marker for an attribute that was never set.
pub const NULL_SENTINEL: &str = "<null>";

/// Wire marker for an attribute whose value was not yet known when encoded.
pub const UNKNOWN_SENTINEL: &str = "<unknown>";

/// Maximum edit distance (as a percentage of the target length) for a
/// convention name to be offered as a suggestion.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;
