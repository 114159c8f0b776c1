//! wait-healthy - block until the server's health endpoint reports OK
//!
//! Used before exposing a dev server, so the tunnel only opens once the
//! backend answers.

use sms_cli::{CliResult, HealthProbe, bootstrap};
use sms_config::Config;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::error;

#[derive(Parser)]
#[command(name = "wait-healthy")]
#[command(about = "Poll /api/health until the server is ready")]
#[command(version)]
struct Args {
    /// Server URL (defaults to http://<server.host>:<server.port>)
    #[arg(long)]
    url: Option<String>,

    /// Give up after this many seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Delay between attempts in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match bootstrap("wait-healthy") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, config: Config) -> CliResult<()> {
    let url = args
        .url
        .unwrap_or_else(|| format!("http://{}", config.bind_addr()));

    HealthProbe::new(&url)
        .wait_until_healthy(
            Duration::from_secs(args.timeout_secs),
            Duration::from_millis(args.interval_ms),
        )
        .await?;

    Ok(())
}
