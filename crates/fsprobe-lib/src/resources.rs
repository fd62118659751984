//! Read-only resources addressed by URI.

use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::handler::ToolHandler;

pub const SYSTEM_INFO_URI: &str = "system://info";
pub const APP_CONFIG_URI: &str = "config://app";
pub const JSON_MIME_TYPE: &str = "application/json";

/// Static description of a resource, as advertised to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

const RESOURCES: [ResourceDescriptor; 2] = [
    ResourceDescriptor {
        uri: SYSTEM_INFO_URI,
        name: "System Information",
        description: "Current system information",
        mime_type: JSON_MIME_TYPE,
    },
    ResourceDescriptor {
        uri: APP_CONFIG_URI,
        name: "Application Configuration",
        description: "Current application configuration",
        mime_type: JSON_MIME_TYPE,
    },
];

/// All resources served by the handler.
pub fn list_resources() -> &'static [ResourceDescriptor] {
    &RESOURCES
}

/// Payload of `config://app`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfigView {
    pub version: String,
    pub environment: String,
    pub debug: bool,
}

impl ToolHandler {
    /// Render the resource at `uri` as pretty JSON text.
    pub fn read_resource(&self, uri: &str) -> Result<String, ToolError> {
        let text = match uri {
            SYSTEM_INFO_URI => serde_json::to_string_pretty(self.context())?,
            APP_CONFIG_URI => {
                let cfg = self.config();
                serde_json::to_string_pretty(&AppConfigView {
                    version: cfg.version.clone(),
                    environment: cfg.environment_mode.clone(),
                    debug: cfg.debug,
                })?
            }
            other => return Err(ToolError::UnknownResource(other.to_string())),
        };
        Ok(text)
    }
}
