//! Error types for command line lookups.

use thiserror::Error;

/// Errors raised while resolving command values from the argument snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CmdlineError {
    /// The `--name` flag was not passed to the program
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The `--name` flag was the last token, so it carries no value
    #[error("Missing value for command: {0}")]
    MissingValue(String),

    /// A required command was not passed. Callers are expected to exit.
    #[error("required: missing command {} for program {}{}", .name, .program, extra_suffix(.extra))]
    MissingRequired {
        name: String,
        program: String,
        extra: Option<String>,
    },

    /// Serialization of the registry failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CmdlineError {
    /// True for the one error kind that should terminate the program.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CmdlineError::MissingRequired { .. })
    }
}

fn extra_suffix(extra: &Option<String>) -> String {
    match extra {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

/// Result type alias for command line operations
pub type Result<T> = std::result::Result<T, CmdlineError>;

impl From<serde_json::Error> for CmdlineError {
    fn from(err: serde_json::Error) -> Self {
        CmdlineError::SerializationError(err.to_string())
    }
}
