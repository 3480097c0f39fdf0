//! Integration test suite for naming
//!
//! These tests run the `naming` binary against temporary projects and check
//! its output and exit status.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **init**: Starter manifest creation
//! - **list**: Convention listing
//! - **validate**: Validation reports, warnings and strict mode
//! - **export**: Wire JSON export
//! - **generate**: Name generation from manifest and JSON conventions
//! - **check**: Inputs completeness check
//! - **error_scenarios**: Manifest discovery and error rendering

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod generate;
mod init;
mod list;
mod validate;
