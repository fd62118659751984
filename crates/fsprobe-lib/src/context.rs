//! Immutable snapshot of the ambient process context served by `get-system-info`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Placeholder when the working directory cannot be determined.
pub const UNKNOWN_CWD: &str = "<unknown>";

/// Compiler version baked in by the build script.
pub fn runtime_version() -> &'static str {
    option_env!("FSPROBE_RUSTC_VERSION").unwrap_or("unknown")
}

/// Process facts captured once and injected into the handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    pub platform: String,
    pub runtime_version: String,
    pub current_working_directory: String,
    pub environment_mode: String,
}

impl SystemContext {
    /// Capture the live process context.
    ///
    /// Never fails: an unreadable working directory is reported as `UNKNOWN_CWD`.
    pub fn capture(config: &ServerConfig) -> Self {
        let cwd = std::env::current_dir()
            .map(|p| display_path(&p))
            .unwrap_or_else(|_| UNKNOWN_CWD.to_string());

        SystemContext {
            platform: std::env::consts::OS.to_string(),
            runtime_version: runtime_version().to_string(),
            current_working_directory: cwd,
            environment_mode: config.environment_mode.clone(),
        }
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
