//! The tool handler: maps an operation name and JSON input to a [`ToolResponse`].
//!
//! Typed entry points (`read_file`, `list_directory`, `get_system_info`,
//! `get_time`) return `Result<_, ToolError>` for in-process callers.
//! Callers at a protocol edge turn those results into a [`ToolResponse`]
//! with [`ToolResponse::from_result`], which logs each failure with its kind.
//! The MCP tools do this per operation. [`ToolHandler::invoke`] does the same
//! for string dispatch, where unknown names and malformed input are failures
//! too. Nothing escapes either path as a panic or error.
//!
//! The handler holds only immutable state, so one instance can serve any
//! number of concurrent calls behind an `Arc`.

mod clock;
mod fs;
mod response;

pub use clock::render_time;
pub use response::{ToolResponse, ERROR_PREFIX};

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ServerConfig;
use crate::context::SystemContext;
use crate::error::ToolError;
use crate::model::{PathInput, TimeInput};

/// Operations understood by [`ToolHandler::invoke`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    ReadFile,
    ListDirectory,
    GetSystemInfo,
    GetTime,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::ReadFile,
        Operation::ListDirectory,
        Operation::GetSystemInfo,
        Operation::GetTime,
    ];

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ReadFile => "read-file",
            Operation::ListDirectory => "list-directory",
            Operation::GetSystemInfo => "get-system-info",
            Operation::GetTime => "get-time",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    /// Accepts the canonical hyphenated names, their underscore spellings and
    /// the short `list-dir` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        if normalized == "list-dir" {
            return Ok(Operation::ListDirectory);
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| ToolError::UnknownOperation(s.to_string()))
    }
}

/// Stateless request handler over an injected configuration and context snapshot.
#[derive(Clone, Debug)]
pub struct ToolHandler {
    config: ServerConfig,
    context: SystemContext,
}

impl ToolHandler {
    pub fn new(config: ServerConfig, context: SystemContext) -> Self {
        ToolHandler { config, context }
    }

    /// Build a handler, capturing the live process context.
    pub fn from_config(config: ServerConfig) -> Self {
        let context = SystemContext::capture(&config);
        Self::new(config, context)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn context(&self) -> &SystemContext {
        &self.context
    }

    /// Static process facts. Never fails.
    pub fn get_system_info(&self) -> SystemContext {
        self.context.clone()
    }

    /// Run the operation named `name` on `input`.
    ///
    /// `input` may be `null` for operations without required fields.
    pub async fn invoke(&self, name: &str, input: Value) -> ToolResponse {
        debug!(operation = name, "invoking");
        let result = match name.parse::<Operation>() {
            Ok(op) => self.dispatch(op, input).await,
            Err(err) => Err(err),
        };

        ToolResponse::from_result(name, result)
    }

    async fn dispatch(&self, op: Operation, input: Value) -> Result<Value, ToolError> {
        match op {
            Operation::ReadFile => {
                let input: PathInput = parse_input(input)?;
                encode(self.read_file(&input.path).await?)
            }
            Operation::ListDirectory => {
                let input: PathInput = parse_input(input)?;
                encode(self.list_directory(&input.path).await?)
            }
            Operation::GetSystemInfo => encode(self.get_system_info()),
            Operation::GetTime => {
                let input: TimeInput = parse_input(input)?;
                encode(self.get_time(input.format.as_deref())?)
            }
        }
    }
}

fn parse_input<T: DeserializeOwned>(input: Value) -> Result<T, ToolError> {
    let input = match input {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(input).map_err(|e| ToolError::InvalidInput(format!("invalid input: {e}")))
}

fn encode<T: Serialize>(out: T) -> Result<Value, ToolError> {
    Ok(serde_json::to_value(out)?)
}
