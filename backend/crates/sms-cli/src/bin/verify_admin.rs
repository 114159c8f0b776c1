//! verify-admin - report whether the privileged account exists
//!
//! Exits 0 whether or not the account is found; only store or config
//! failures are errors.

use sms_cli::{CliResult, bootstrap, report_account_status};
use sms_config::Config;
use sms_db::SqliteConnector;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[derive(Parser)]
#[command(name = "verify-admin")]
#[command(about = "Check for the privileged account and list stored accounts")]
#[command(version)]
struct Args {
    /// Account email to look for (defaults to admin.email)
    #[arg(long)]
    email: Option<String>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match bootstrap("verify-admin") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Verification failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, config: Config) -> CliResult<()> {
    let email = args.email.unwrap_or_else(|| config.admin.email.clone());
    let connector = SqliteConnector::new(config.database_url()?);

    let status = report_account_status(&connector, &email).await?;

    if args.json {
        let output = if args.pretty {
            serde_json::to_string_pretty(&status)?
        } else {
            serde_json::to_string(&status)?
        };
        println!("{}", output);
    } else {
        status.log_report(&email);
    }

    Ok(())
}
