//! E2E test runner
//!
//! Runs a named scenario against an already running course server.

use std::time::Duration;

use clap::Parser;
use shared::{Component, logging};
use tokio::time::timeout;

use tester::{ApiClient, run_scenario};

#[derive(Parser)]
#[command(name = "tester")]
#[command(about = "End-to-end scenarios for the course management server")]
struct Args {
    /// Address of the running server
    #[arg(long, default_value = "127.0.0.1:8080")]
    server_addr: String,

    /// Scenario to run (basic, soft-delete, all)
    #[arg(long, default_value = "basic")]
    scenario: String,

    /// Test timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    Component::init_tester();
    let level = if args.verbose { "debug" } else { "info" };
    logging::init_tracing_with_level(Some(level));

    tracing::info!("🧪 Starting E2E tester against {}", args.server_addr);
    tracing::info!("Scenario: {}, Timeout: {}s", args.scenario, args.timeout_secs);

    let client = ApiClient::new(&args.server_addr)?;
    let result = timeout(Duration::from_secs(args.timeout_secs), run_scenario(&args.scenario, &client)).await;

    match result {
        Ok(Ok(())) => {
            tracing::info!("✅ Scenario '{}' completed successfully", args.scenario);
            Ok(())
        }
        Ok(Err(e)) => {
            tracing::error!("❌ Scenario '{}' failed: {:#}", args.scenario, e);
            Err(e)
        }
        Err(_) => {
            tracing::error!("⏰ Scenario '{}' timed out after {}s", args.scenario, args.timeout_secs);
            anyhow::bail!("scenario timed out")
        }
    }
}
