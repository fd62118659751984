// Rust guideline compliant 2026-10-18

use fsprobe::ServerConfig;
use fsprobe_mcp::{init_tracing, run_stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");
    run_stdio(ServerConfig::from_env()).await
}
