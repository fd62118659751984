/*
Server configuration.

Layering, lowest to highest precedence:
- compiled defaults (`ServerConfig::default()`),
- process environment (`ServerConfig::from_env()`),
- command-line flags, applied by the binaries on top of the env layer.

The environment is read through an injectable lookup so tests never have to
mutate process-wide state.
*/

use serde::{Deserialize, Serialize};

/// Default environment mode when nothing is configured.
pub const DEFAULT_ENVIRONMENT_MODE: &str = "development";
/// Default server name advertised to clients.
pub const DEFAULT_SERVER_NAME: &str = "fsprobe";

/// Environment variable consulted first for the environment mode.
pub const ENV_MODE_VAR: &str = "FSPROBE_ENV";
/// Generic fallback for the environment mode.
pub const ENV_MODE_FALLBACK_VAR: &str = "ENV";
/// `DEBUG=true` (case-insensitive) turns on debug mode.
pub const DEBUG_VAR: &str = "DEBUG";

/// Configuration shared by the handler, the MCP server and the CLI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name advertised by the server. Default: DEFAULT_SERVER_NAME.
    pub name: String,
    /// Version advertised by the server. Default: the crate version.
    pub version: String,
    /// Free-form deployment mode ("development", "production", ...).
    pub environment_mode: String,
    /// Debug flag, surfaced through the `config://app` resource.
    pub debug: bool,
    /// Reject relative paths in `read-file` / `list-directory`. Default: false.
    pub require_absolute_paths: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment_mode: DEFAULT_ENVIRONMENT_MODE.to_string(),
            debug: false,
            require_absolute_paths: false,
        }
    }
}

impl ServerConfig {
    /// Build a configuration from defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from defaults overlaid with values from `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut cfg = ServerConfig::default();
        if let Some(mode) = get(ENV_MODE_VAR).or_else(|| get(ENV_MODE_FALLBACK_VAR)) {
            cfg.environment_mode = mode.trim().to_string();
        }
        if let Some(debug) = get(DEBUG_VAR) {
            cfg.debug = debug.trim().eq_ignore_ascii_case("true");
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.environment_mode, "development");
        assert!(!cfg.debug);
        assert!(!cfg.require_absolute_paths);
    }

    #[test]
    fn dedicated_variable_wins_over_fallback() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("FSPROBE_ENV", "production"),
            ("ENV", "staging"),
        ]));
        assert_eq!(cfg.environment_mode, "production");

        let cfg = ServerConfig::from_lookup(lookup_from(&[("ENV", "staging")]));
        assert_eq!(cfg.environment_mode, "staging");
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("FSPROBE_ENV", "  "), ("ENV", "test")]));
        assert_eq!(cfg.environment_mode, "test");
    }

    #[test]
    fn debug_only_for_true() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("DEBUG", "TRUE")]));
        assert!(cfg.debug);
        let cfg = ServerConfig::from_lookup(lookup_from(&[("DEBUG", "1")]));
        assert!(!cfg.debug);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"environment_mode":"ci","debug":true}"#).unwrap();
        assert_eq!(cfg.environment_mode, "ci");
        assert!(cfg.debug);
        assert_eq!(cfg.name, DEFAULT_SERVER_NAME);
    }
}
