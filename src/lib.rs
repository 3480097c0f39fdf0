//! naming - resource names from declared naming conventions
//!
//! A naming convention is a definition string with `(placeholder)` blocks,
//! such as `"(name)-(env)-(type)"`, plus an ordered list of variables that
//! fill those blocks. This crate validates conventions, moves them between
//! processes as compact JSON and generates names from them.
//!
//! # Architecture Overview
//!
//! - [`convention`] - the domain model, the validators and the JSON wire form
//! - [`generator`] - resolves variables and substitutes them into a definition
//! - [`adapters`] - host entry points: declare a convention, keep a name
//!   record, call a generation function
//! - [`manifest`] - the `naming.toml` project file and its discovery
//! - [`cli`] - the `naming` command-line interface
//! - [`core`] - application errors with user-facing suggestions
//!
//! # Example
//!
//! ```
//! use naming_cli::convention::{Convention, Inputs, Variable};
//! use naming_cli::generator::generate_name;
//!
//! let convention = Convention::new(
//!     "(name)-(type)-(default)",
//!     vec![
//!         Variable::new("type").with_max_length(4),
//!         Variable::new("default").with_default("default"),
//!     ],
//! );
//! assert!(convention.validate().is_empty());
//!
//! let inputs = Inputs::from([("type".to_string(), "service".to_string())]);
//! assert_eq!(generate_name("foobar", &inputs, &convention).unwrap(), "foobar-serv-default");
//! ```
//!
//! # Manifest Format (naming.toml)
//!
//! ```toml
//! [settings]
//! generated_length = 8
//!
//! [conventions.storage]
//! definition = "(name)(env)(suffix)"
//! variables = [
//!     { name = "env", default = "dev", max_length = 3 },
//!     { name = "suffix", generated = true, max_length = 4 },
//! ]
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! naming init
//! naming validate
//! naming generate data --convention storage
//! naming export storage > storage.json
//! naming generate data --json-file storage.json --input env=prd
//! ```

pub mod adapters;
pub mod cli;
pub mod constants;
pub mod convention;
pub mod core;
pub mod generator;
pub mod manifest;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
