//! Error handling for retemplate.
//! Defines the error type and result alias used throughout the workflow.

use std::io;
use thiserror::Error;

/// Errors that can abort a retemplate run.
///
/// Every variant is fatal for the current run: nothing is retried and nothing
/// already written to disk is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project manifest is missing, malformed, or lacks a required table.
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("Error running command: {command}\nError: {message}")]
    CommandError { command: String, message: String },

    /// A template file is missing or could not be rendered.
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template engine error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents validation failures in user input or preloaded answers
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The interactive prompt failed (closed terminal, interrupted input).
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Preloaded answers could not be parsed.
    #[error("Answers error: {0}.")]
    AnswersError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
