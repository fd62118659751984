//! Library entry point for fsprobe: read-only filesystem and environment
//! probes for agent tool servers.
//!
//! The crate is protocol-independent. A [`ToolHandler`] answers the
//! `read-file`, `list-directory`, `get-system-info` and `get-time` operations
//! and serves the `system://info` and `config://app` resources; transports such
//! as the MCP adapter in `fsprobe-mcp` only translate requests into calls here.
//
// Public modules
pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod model;
pub mod prompts;
pub mod resources;

// Re-export primary types for ergonomic use.
pub use config::ServerConfig;
pub use context::SystemContext;
pub use error::{ErrorKind, ToolError};
pub use handler::{Operation, ToolHandler, ToolResponse};
