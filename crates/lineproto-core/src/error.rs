//! Error types for the line protocol

use thiserror::Error;

/// Result type for line protocol operations
pub type Result<T> = std::result::Result<T, LineProtoError>;

/// Line protocol error types
#[derive(Debug, Error)]
pub enum LineProtoError {
    /// Line contained no tokens
    #[error("Unable to parse line (empty)")]
    EmptyLine,

    /// First token is not a known command
    #[error("Unable to parse line: unrecognized command '{0}'")]
    UnrecognizedCommand(String),

    /// Command is known but its arguments are not usable
    #[error("Invalid arguments for '{command}': {reason}")]
    InvalidArguments { command: String, reason: String },

    /// Reading or writing a stream failed
    #[error("IO error: {0}")]
    IoError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LineProtoError {
    /// Whether the read loop should log this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LineProtoError::EmptyLine
                | LineProtoError::UnrecognizedCommand(_)
                | LineProtoError::InvalidArguments { .. }
        )
    }

    pub fn invalid_arguments(command: impl Into<String>, reason: impl Into<String>) -> Self {
        LineProtoError::InvalidArguments {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LineProtoError {
    fn from(err: serde_json::Error) -> Self {
        LineProtoError::SerializationError(err.to_string())
    }
}
