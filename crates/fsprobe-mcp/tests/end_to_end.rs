//! Full protocol round trips: an rmcp client talks to the server over an
//! in-memory duplex stream, so tool arguments arrive as raw JSON.

use std::sync::Arc;

use anyhow::Result;
use fsprobe::resources::{APP_CONFIG_URI, SYSTEM_INFO_URI};
use fsprobe::{ServerConfig, ToolHandler};
use fsprobe_mcp::FsProbeMcpServer;
use rmcp::model::{CallToolResult, ErrorCode, ResourceContents};
use rmcp::service::RunningService;
use rmcp::{RoleClient, ServiceError, ServiceExt};
use serde_json::json;

async fn connect() -> Result<RunningService<RoleClient, ()>> {
    let server = FsProbeMcpServer::new(Arc::new(ToolHandler::from_config(ServerConfig::default())));
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        if let Ok(service) = server.serve(server_io).await {
            let _ = service.waiting().await;
        }
    });
    Ok(().serve(client_io).await?)
}

fn first_text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

#[tokio::test]
async fn read_file_over_the_wire() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "hi")?;

    let client = connect().await?;
    let result = client
        .call_tool(serde_json::from_value(json!({
            "name": "read-file",
            "arguments": { "path": path.to_string_lossy() },
        }))?)
        .await?;

    assert_ne!(result.is_error, Some(true));
    assert_eq!(
        result.structured_content,
        Some(json!({"content": "hi", "size": 2}))
    );
    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn missing_directory_is_an_error_result() -> Result<()> {
    let client = connect().await?;
    let result = client
        .call_tool(serde_json::from_value(json!({
            "name": "list-directory",
            "arguments": { "path": "/nonexistent/path" },
        }))?)
        .await?;

    assert_eq!(result.is_error, Some(true));
    assert!(result.structured_content.is_none());
    assert!(first_text(&result).starts_with("Error: failed to list directory '/nonexistent/path'"));
    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn arguments_without_a_path_are_rejected() -> Result<()> {
    let client = connect().await?;
    let outcome = client
        .call_tool(serde_json::from_value(json!({
            "name": "read-file",
            "arguments": {},
        }))?)
        .await;

    assert!(outcome.is_err(), "{outcome:?}");
    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn resources_carry_their_mime_type() -> Result<()> {
    let client = connect().await?;
    for uri in [SYSTEM_INFO_URI, APP_CONFIG_URI] {
        let result = client
            .read_resource(serde_json::from_value(json!({ "uri": uri }))?)
            .await?;
        match result.contents.as_slice() {
            [ResourceContents::TextResourceContents {
                uri: got, mime_type, text, ..
            }] => {
                assert_eq!(got, uri);
                assert_eq!(mime_type.as_deref(), Some("application/json"));
                let _: serde_json::Value = serde_json::from_str(text)?;
            }
            other => panic!("unexpected contents for {uri}: {other:?}"),
        }
    }
    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn unknown_resource_is_not_found() -> Result<()> {
    let client = connect().await?;
    let outcome = client
        .read_resource(serde_json::from_value(json!({ "uri": "file:///etc/passwd" }))?)
        .await;

    match outcome {
        Err(ServiceError::McpError(err)) => {
            assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
            assert!(err.message.contains("file:///etc/passwd"), "{}", err.message);
        }
        other => panic!("expected resource_not_found, got {other:?}"),
    }
    client.cancel().await?;
    Ok(())
}
