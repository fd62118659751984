//! CLI for fsprobe.
//!
//! Subcommands:
//!  - `read-file`, `list-dir`, `system-info`, `time` : run one operation and print the result.
//!  - `resource` : list resources, or print one by URI.
//!  - `prompt` : render a prompt template.
//!  - `call` : dispatch an operation by name with a raw JSON input, as a protocol client would.
//!  - `serve` : run the MCP stdio server.
//!
//! Results print as plain text by default and as pretty JSON with `--json`.
//! Failures print `Error: <message>` on stderr and exit non-zero; the exit
//! status distinguishes invalid input (2), not found (3) and permission
//! denied (4) from other I/O failures (1).
//!
//! Usage examples:
//!  cargo run -p fsprobe -- list-dir /tmp --json
//!  cargo run -p fsprobe -- call read-file --input '{"path":"/etc/hostname"}'

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fsprobe::prompts::{self, CodeReviewArgs, ExplainErrorArgs};
use fsprobe::{resources, ServerConfig, ToolError, ToolHandler};
use serde::Serialize;
use tracing::debug;

/// CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "fsprobe",
    about = "fsprobe: read-only filesystem and environment probes, directly or over MCP",
    version
)]
struct Cli {
    /// Print results as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// Environment mode reported by system-info (overrides FSPROBE_ENV / ENV).
    #[arg(long = "env", value_name = "MODE", global = true)]
    environment_mode: Option<String>,

    /// Enable debug mode (reported by the config://app resource).
    #[arg(long, global = true)]
    debug: bool,

    /// Reject relative paths in read-file / list-dir.
    #[arg(long = "require-absolute", global = true)]
    require_absolute: bool,

    /// Log level used when RUST_LOG is unset [default: info for serve, error otherwise].
    #[arg(long, env = "FSPROBE_LOG", global = true)]
    log_level: Option<String>,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a file as UTF-8 text.
    ReadFile(PathArgs),

    /// List the direct children of a directory.
    #[command(alias = "list-directory")]
    ListDir(PathArgs),

    /// Show platform, runtime version, working directory and environment mode.
    SystemInfo,

    /// Show the current time.
    Time(TimeArgs),

    /// List resources, or print the resource at URI.
    Resource(ResourceArgs),

    /// Render a prompt template.
    #[command(subcommand)]
    Prompt(PromptCommand),

    /// Invoke an operation by name with a JSON input.
    Call(CallArgs),

    /// Run the MCP stdio server.
    Serve,
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Filesystem path.
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

#[derive(Args, Debug)]
struct TimeArgs {
    /// RFC3339 (default) or Unix.
    #[arg(long, short = 'f')]
    format: Option<String>,
}

#[derive(Args, Debug)]
struct ResourceArgs {
    /// Resource URI, e.g. system://info. Omit to list resources.
    #[arg(value_name = "URI")]
    uri: Option<String>,
}

#[derive(Subcommand, Debug)]
enum PromptCommand {
    /// Ask for a review of a piece of code.
    CodeReview {
        /// File containing the code to review.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Language of the code (default: python).
        #[arg(long)]
        language: Option<String>,
    },

    /// Ask for an explanation of an error message.
    ExplainError {
        /// The error message.
        error: String,

        /// Extra context to include.
        #[arg(long)]
        context: Option<String>,
    },
}

#[derive(Args, Debug)]
struct CallArgs {
    /// Operation name (read-file, list-directory, get-system-info, get-time).
    name: String,

    /// JSON input object. Defaults to null.
    #[arg(long, value_name = "JSON")]
    input: Option<String>,
}

impl Cli {
    /// One-shot commands print their own failures, so their log default
    /// stays below the handler's `warn!` line.
    fn log_level(&self) -> &str {
        match (&self.log_level, &self.command) {
            (Some(level), _) => level.as_str(),
            (None, Commands::Serve) => "info",
            (None, _) => "error",
        }
    }

    /// Environment layer overlaid with command-line flags.
    fn server_config(&self) -> ServerConfig {
        let mut cfg = ServerConfig::from_env();
        if let Some(mode) = &self.environment_mode {
            cfg.environment_mode = mode.clone();
        }
        if self.debug {
            cfg.debug = true;
        }
        if self.require_absolute {
            cfg.require_absolute_paths = true;
        }
        cfg
    }
}

/// Application entry point.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    fsprobe_mcp::init_tracing(cli.log_level());

    let config = cli.server_config();
    debug!(?config, "resolved configuration");
    run_command(config, cli.command, cli.json).await
}

async fn run_command(config: ServerConfig, command: Commands, json: bool) -> Result<ExitCode> {
    if let Commands::Serve = command {
        fsprobe_mcp::run_stdio(config).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let handler = ToolHandler::from_config(config);
    match command {
        Commands::ReadFile(args) => {
            let path = path_arg(&args.path);
            emit(handler.read_file(&path).await, json, |out| out.content.clone())
        }
        Commands::ListDir(args) => {
            let path = path_arg(&args.path);
            emit(handler.list_directory(&path).await, json, render::listing)
        }
        Commands::SystemInfo => emit(Ok(handler.get_system_info()), json, render::system_info),
        Commands::Time(args) => {
            emit(handler.get_time(args.format.as_deref()), json, render::time)
        }
        Commands::Resource(args) => run_resource(&handler, args, json),
        Commands::Prompt(cmd) => run_prompt(cmd),
        Commands::Call(args) => run_call(&handler, args).await,
        Commands::Serve => Ok(ExitCode::SUCCESS),
    }
}

/// Print a typed result; failures go to stderr with a kind-specific exit status.
fn emit<T, F>(result: Result<T, ToolError>, json: bool, text: F) -> Result<ExitCode>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match result {
        Ok(out) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", text(&out));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(render::failure_exit(err.kind()))
        }
    }
}

fn run_resource(handler: &ToolHandler, args: ResourceArgs, json: bool) -> Result<ExitCode> {
    let Some(uri) = args.uri else {
        let list = resources::list_resources();
        if json {
            let rows: Vec<_> = list
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "uri": r.uri,
                        "name": r.name,
                        "description": r.description,
                        "mimeType": r.mime_type,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print!("{}", render::resource_table(list));
        }
        return Ok(ExitCode::SUCCESS);
    };

    match handler.read_resource(&uri) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(render::failure_exit(err.kind()))
        }
    }
}

fn run_prompt(cmd: PromptCommand) -> Result<ExitCode> {
    let text = match cmd {
        PromptCommand::CodeReview { file, language } => {
            let code = std::fs::read_to_string(&file)
                .with_context(|| format!("reading code from {}", file.display()))?;
            prompts::code_review(&CodeReviewArgs { code, language })
        }
        PromptCommand::ExplainError { error, context } => {
            prompts::explain_error(&ExplainErrorArgs { error, context })
        }
    };
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}

/// Run through the string dispatcher; output is exactly what a protocol client sees.
async fn run_call(handler: &ToolHandler, args: CallArgs) -> Result<ExitCode> {
    let input = match args.input.as_deref() {
        Some(raw) => serde_json::from_str(raw).context("parsing --input as JSON")?,
        None => serde_json::Value::Null,
    };

    let response = handler.invoke(&args.name, input).await;
    match response.kind() {
        Some(kind) => {
            eprintln!("{}", response.display_text());
            Ok(render::failure_exit(kind))
        }
        None => {
            println!("{}", response.display_text());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn path_arg(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fsprobe",
            "list-dir",
            "/tmp",
            "--json",
            "--env",
            "production",
            "--require-absolute",
        ])
        .unwrap();
        assert!(cli.json);
        let cfg = cli.server_config();
        assert_eq!(cfg.environment_mode, "production");
        assert!(cfg.require_absolute_paths);
        assert!(matches!(cli.command, Commands::ListDir(_)));
    }

    #[test]
    fn list_directory_alias_is_accepted() {
        let cli = Cli::try_parse_from(["fsprobe", "list-directory", "/tmp"]).unwrap();
        assert!(matches!(cli.command, Commands::ListDir(_)));
    }

    #[test]
    fn prompt_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "fsprobe",
            "prompt",
            "explain-error",
            "borrow of moved value",
            "--context",
            "in main.rs",
        ])
        .unwrap();
        match cli.command {
            Commands::Prompt(PromptCommand::ExplainError { error, context }) => {
                assert_eq!(error, "borrow of moved value");
                assert_eq!(context.as_deref(), Some("in main.rs"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_file_exits_with_not_found_status() {
        let code = run_command(
            ServerConfig::default(),
            Commands::ReadFile(PathArgs {
                path: PathBuf::from("/nonexistent/path"),
            }),
            false,
        )
        .await
        .unwrap();
        assert_eq!(code, ExitCode::from(3));
    }

    #[tokio::test]
    async fn call_rejects_unknown_operation() {
        let handler = ToolHandler::from_config(ServerConfig::default());
        let code = run_call(
            &handler,
            CallArgs {
                name: "write-file".into(),
                input: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(code, ExitCode::from(2));
    }

    #[tokio::test]
    async fn call_exit_status_follows_the_failure_kind() {
        let handler = ToolHandler::from_config(ServerConfig::default());
        let missing = run_call(
            &handler,
            CallArgs {
                name: "read-file".into(),
                input: Some(r#"{"path":"/nonexistent/path"}"#.into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(missing, ExitCode::from(3));

        let bad_format = run_call(
            &handler,
            CallArgs {
                name: "get_time".into(),
                input: Some(r#"{"format":"iso"}"#.into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(bad_format, ExitCode::from(2));
    }

    #[test]
    fn log_level_defaults_depend_on_the_command() {
        let serve = Cli::try_parse_from(["fsprobe", "serve"]).unwrap();
        let call = Cli::try_parse_from(["fsprobe", "call", "list_dir"]).unwrap();
        if std::env::var_os("FSPROBE_LOG").is_none() {
            assert_eq!(serve.log_level(), "info");
            assert_eq!(call.log_level(), "error");
        }

        let explicit =
            Cli::try_parse_from(["fsprobe", "serve", "--log-level", "debug"]).unwrap();
        assert_eq!(explicit.log_level(), "debug");
    }
}
