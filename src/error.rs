//! Error handling for cpm.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while scaffolding.
///
/// Configuration-structural variants are fatal and stop the run before any file
/// is written. File-level failures are reported by the processor and never reach
/// the top-level handler.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to parse JSON: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// No configuration file was found in any of the searched locations
    #[error("Can't find \"{config_file}\" at {searched}!")]
    ConfigNotFound { config_file: String, searched: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Destination folder \"{destination}\" does not exist!")]
    DestinationMissing { destination: String },

    #[error("No such type: {type_id} in config file!")]
    UnknownType { type_id: String },

    #[error("No structure for type: {type_id} in config file!")]
    MissingStructure { type_id: String },

    /// The supplied type value has fewer segments than the type declares
    #[error("Type value \"{value}\" does not match value \"{template}\" in config file!")]
    TypeValueMismatch { value: String, template: String },

    #[error("Required parameter \"{name}\" is missing!")]
    MissingArgument { name: String },

    /// Represents errors raised by the interactive prompt backend
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with cpm's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error with the `ERROR!` prefix to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("ERROR! {err}");
    std::process::exit(1);
}
