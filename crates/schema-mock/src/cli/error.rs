//! Error types for the schema-mock CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::GenerationError;

/// Errors surfaced by the CLI read, generate and render flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// An input file could not be opened or read.
    #[error("failed to read '{path}': {message}")]
    Io {
        /// Path that failed to read.
        path: Utf8PathBuf,
        /// Error message describing the failure.
        message: String,
    },
    /// An input file did not contain valid JSON.
    #[error("failed to parse JSON in '{path}': {message}")]
    Parse {
        /// Path containing invalid JSON.
        path: Utf8PathBuf,
        /// Parser error message.
        message: String,
    },
    /// The user object file held JSON that is not an object.
    #[error("user object in '{path}' must be a JSON object")]
    InvalidUserObject {
        /// Path of the rejected user object.
        path: Utf8PathBuf,
    },
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Error message describing the failure.
        message: String,
    },
    /// Generated output could not be rendered as JSON.
    #[error("failed to render output: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
    /// The schema could not be turned into a value.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
}
