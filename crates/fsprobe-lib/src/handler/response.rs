use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{ErrorKind, ToolError};

/// Prefix marking a failure when rendered as text.
pub const ERROR_PREFIX: &str = "Error: ";

/// Outcome of one handler invocation: a structured payload or a message, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolResponse {
    Success {
        payload: Value,
        /// Pretty-printed JSON rendering of `payload`.
        text: String,
    },
    Failure {
        message: String,
        /// Reason class; used for logs and exit codes, never sent on the wire.
        kind: ErrorKind,
    },
}

impl ToolResponse {
    pub fn from_payload(payload: Value) -> Self {
        let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
        ToolResponse::Success { payload, text }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        ToolResponse::Failure {
            message: message.into(),
            kind,
        }
    }

    /// Convert an operation error, logging it with its kind.
    pub fn from_error(operation: &str, err: &ToolError) -> Self {
        let kind = err.kind();
        warn!(operation, kind = kind.as_str(), "{err}");
        ToolResponse::failure(kind, err.to_string())
    }

    /// Flatten a typed operation result. Encoding failures become failures too.
    pub fn from_result<T: Serialize>(operation: &str, result: Result<T, ToolError>) -> Self {
        match result.and_then(|out| serde_json::to_value(out).map_err(ToolError::from)) {
            Ok(payload) => ToolResponse::from_payload(payload),
            Err(err) => ToolResponse::from_error(operation, &err),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolResponse::Failure { .. })
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ToolResponse::Success { .. } => None,
            ToolResponse::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            ToolResponse::Success { payload, .. } => Some(payload),
            ToolResponse::Failure { .. } => None,
        }
    }

    /// Text shown to a human or agent: the JSON rendering, or the prefixed message.
    pub fn display_text(&self) -> String {
        match self {
            ToolResponse::Success { text, .. } => text.clone(),
            ToolResponse::Failure { message, .. } => format!("{ERROR_PREFIX}{message}"),
        }
    }
}
