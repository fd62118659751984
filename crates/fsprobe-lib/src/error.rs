//! Failure taxonomy for handler operations.
//!
//! On the wire every failure is the same thing: a message. Internally the
//! error keeps enough structure to tell callers *why* it failed, which the CLI
//! maps to exit codes and the handler records in its logs.

use std::io;

use thiserror::Error;

/// Closed set of failure reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    InvalidInput,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::PermissionDenied => "permission-denied",
            ErrorKind::InvalidInput => "invalid-input",
            ErrorKind::Io => "io",
        }
    }
}

/// Error produced by a handler operation before it is flattened into a
/// [`crate::ToolResponse::Failure`].
#[derive(Debug, Error)]
pub enum ToolError {
    /// An underlying filesystem call failed. `action` describes what was being done.
    #[error("{action}: {source}")]
    Io {
        action: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ToolError {
    pub fn io(action: impl Into<String>, source: io::Error) -> Self {
        ToolError::Io {
            action: action.into(),
            source,
        }
    }

    /// Classify the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
                io::ErrorKind::InvalidInput => ErrorKind::InvalidInput,
                _ => ErrorKind::Io,
            },
            ToolError::InvalidInput(_) | ToolError::UnknownOperation(_) => ErrorKind::InvalidInput,
            ToolError::UnknownResource(_) => ErrorKind::NotFound,
            ToolError::Encode(_) => ErrorKind::Io,
        }
    }
}
