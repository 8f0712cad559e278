//! Error handling for the skelgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for skelgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while reading or rendering a template
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A required per-language attribute could not be resolved from either
    /// the configuration or the built-in default tables
    #[error("Need a \"{attribute}\"-type specified for language \"{language}\".")]
    MissingAttributeError { attribute: String, language: String },

    /// The resolved naming convention is not one of the supported spellings
    #[error("Unrecognized naming convention: \"{convention}\".")]
    UnknownConventionError { convention: String },
}

impl Error {
    /// Whether this error aborts the whole run. Template read failures and
    /// plain IO errors are absorbed per language by the processing loop;
    /// configuration errors are not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::IoError(_) | Error::TemplateError(_))
    }
}

/// Convenience type alias for Results with skelgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
