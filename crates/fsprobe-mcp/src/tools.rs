// Rust guideline compliant 2026-10-18

use std::sync::Arc;

use fsprobe::{
    model::{PathInput, TimeInput},
    prompts::{self, CodeReviewArgs, ExplainErrorArgs},
    Operation, ToolHandler, ToolResponse,
};
use rmcp::{
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::{CallToolResult, Content, PromptMessage, PromptMessageRole},
    ErrorData,
};

/// Convert a handler response into an MCP tool result.
///
/// Success carries the pretty JSON as text content plus the same value as
/// structured content; failure carries only the prefixed message.
pub fn call_result(response: ToolResponse) -> CallToolResult {
    match response {
        ToolResponse::Success { payload, text } => {
            let mut result = CallToolResult::success(vec![Content::text(text)]);
            result.structured_content = Some(payload);
            result
        }
        failure @ ToolResponse::Failure { .. } => {
            CallToolResult::error(vec![Content::text(failure.display_text())])
        }
    }
}

/// MCP server exposing the fsprobe handler as tools, resources and prompts.
#[derive(Debug, Clone)]
pub struct FsProbeMcpServer {
    handler: Arc<ToolHandler>,
    pub tool_router: ToolRouter<Self>,
    pub prompt_router: PromptRouter<Self>,
}

#[rmcp::tool_router]
impl FsProbeMcpServer {
    /// Construct a new server instance around a shared handler.
    pub fn new(handler: Arc<ToolHandler>) -> Self {
        Self {
            handler,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn handler(&self) -> &ToolHandler {
        &self.handler
    }

    /// Read a file as UTF-8 text.
    #[rmcp::tool(
        name = "read-file",
        description = "Read contents of a file at the given absolute path"
    )]
    async fn read_file(
        &self,
        Parameters(input): Parameters<PathInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.handler.read_file(&input.path).await;
        Ok(call_result(ToolResponse::from_result(Operation::ReadFile.name(), result)))
    }

    /// List the direct children of a directory.
    #[rmcp::tool(name = "list-directory", description = "List contents of a directory")]
    async fn list_directory(
        &self,
        Parameters(input): Parameters<PathInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.handler.list_directory(&input.path).await;
        Ok(call_result(ToolResponse::from_result(Operation::ListDirectory.name(), result)))
    }

    #[rmcp::tool(
        name = "get-system-info",
        description = "Report platform, runtime version, working directory and environment mode"
    )]
    fn get_system_info(&self) -> Result<CallToolResult, ErrorData> {
        let info = self.handler.get_system_info();
        Ok(call_result(ToolResponse::from_result(Operation::GetSystemInfo.name(), Ok(info))))
    }

    #[rmcp::tool(
        name = "get-time",
        description = "Get the current time (format: RFC3339 or Unix)"
    )]
    fn get_time(
        &self,
        Parameters(input): Parameters<TimeInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.handler.get_time(input.format.as_deref());
        Ok(call_result(ToolResponse::from_result(Operation::GetTime.name(), result)))
    }
}

#[rmcp::prompt_router]
impl FsProbeMcpServer {
    #[rmcp::prompt(
        name = "code-review",
        description = "Generate a code review prompt for the given code"
    )]
    async fn code_review(&self, Parameters(args): Parameters<CodeReviewArgs>) -> Vec<PromptMessage> {
        vec![PromptMessage::new_text(
            PromptMessageRole::User,
            prompts::code_review(&args),
        )]
    }

    #[rmcp::prompt(
        name = "explain-error",
        description = "Generate a prompt to explain an error message"
    )]
    async fn explain_error(
        &self,
        Parameters(args): Parameters<ExplainErrorArgs>,
    ) -> Vec<PromptMessage> {
        vec![PromptMessage::new_text(
            PromptMessageRole::User,
            prompts::explain_error(&args),
        )]
    }
}
