//! cpm creates project modules from templates.
//! A configuration file declares scaffold types, the directory structure each
//! type produces, and the template files to copy; `[[token]]` placeholders in
//! paths and contents are filled from the command line.

/// Command-line interface module
pub mod cli;

/// Configuration loading and lookups
/// Supports JSON and YAML formats (cpm.config.json, cpm.config.yml, cpm.config.yaml)
pub mod config;

pub mod constants;

/// Error types and handling
pub mod error;

/// Log output with the tool's message prefixes
pub mod logger;

/// Structure walking and file creation
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Replacement table construction and type value validation
pub mod replacements;

/// Orchestration of a single run
pub mod runner;

/// Token substitution and path splitting
pub mod substitute;
