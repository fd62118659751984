// Rust guideline compliant 2026-10-18

//! MCP adapter for the fsprobe handler.
//!
//! The protocol work (framing, the stdio transport, schema description) is
//! done by `rmcp`; this crate only routes tool calls, prompt requests and
//! resource reads into [`fsprobe::ToolHandler`].

mod tools;

use std::sync::Arc;

use anyhow::Context;
use fsprobe::{resources, ServerConfig, ToolHandler};
use rmcp::{
    model::*, prompt_handler, service::RequestContext, tool_handler, transport::stdio, ErrorData,
    RoleServer, ServerHandler, ServiceExt,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use crate::tools::{call_result, FsProbeMcpServer};

const INSTRUCTIONS: &str = "fsprobe MCP server: read-only filesystem and environment probes. \
Use read-file and list-directory with absolute paths; get-system-info and the system://info \
resource describe the host process.";

#[tool_handler]
#[prompt_handler]
impl ServerHandler for FsProbeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resource_list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let uri = request.uri;
        match self.handler().read_resource(&uri) {
            Ok(text) => {
                let mut contents = ResourceContents::text(text, uri.as_str());
                if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
                    *mime_type = resources::list_resources()
                        .iter()
                        .find(|desc| desc.uri == uri)
                        .map(|desc| desc.mime_type.to_string());
                }
                Ok(ReadResourceResult {
                    contents: vec![contents],
                })
            }
            Err(err) => Err(ErrorData::resource_not_found(
                err.to_string(),
                Some(json!({ "uri": uri })),
            )),
        }
    }
}

/// Resource descriptors in MCP form.
pub fn resource_list() -> Vec<Resource> {
    resources::list_resources()
        .iter()
        .map(|desc| {
            let mut raw = RawResource::new(desc.uri, desc.name);
            raw.description = Some(desc.description.to_string());
            raw.mime_type = Some(desc.mime_type.to_string());
            raw.no_annotation()
        })
        .collect()
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` overrides `default_level`.
///
/// Stdout carries the protocol, so nothing may be logged there.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Serve the handler over stdio until the client disconnects.
pub async fn run_stdio(config: ServerConfig) -> anyhow::Result<()> {
    let handler = Arc::new(ToolHandler::from_config(config));
    info!(
        name = %handler.config().name,
        version = %handler.config().version,
        environment = %handler.config().environment_mode,
        "Starting MCP server..."
    );

    let service = FsProbeMcpServer::new(handler)
        .serve(stdio())
        .await
        .context("starting MCP stdio service")?;
    let reason = service.waiting().await.context("MCP service task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
