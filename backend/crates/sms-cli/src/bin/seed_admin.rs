//! seed-admin - make sure the privileged account exists
//!
//! Reads the store URL and identity from `.sms/config.toml`, `.env` and
//! `SMS_*` variables. Running it again is a no-op.
//!
//! ```bash
//! SMS_DATABASE_URL=sqlite://data/sms.db SMS_ADMIN_PASSWORD=... seed-admin
//! ```

use sms_auth::Argon2PasswordHasher;
use sms_cli::{CliResult, bootstrap, ensure_privileged_account};
use sms_config::Config;
use sms_core::{Role, SystemClock};
use sms_db::SqliteConnector;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[derive(Parser)]
#[command(name = "seed-admin")]
#[command(about = "Create the privileged account if it does not exist yet")]
#[command(version)]
struct Args {
    /// Account email (overrides admin.email)
    #[arg(long)]
    email: Option<String>,

    /// Display name (overrides admin.name)
    #[arg(long)]
    name: Option<String>,

    /// Role: admin, student or faculty (overrides admin.role)
    #[arg(long)]
    role: Option<Role>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match bootstrap("seed-admin") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, mut config: Config) -> CliResult<()> {
    if let Some(email) = args.email {
        config.admin.email = email;
    }
    if let Some(name) = args.name {
        config.admin.name = name;
    }
    if let Some(role) = args.role {
        config.admin.role = role;
    }

    let identity = config.admin_identity()?;
    let connector = SqliteConnector::new(config.database_url()?);

    let outcome = ensure_privileged_account(
        &connector,
        &Argon2PasswordHasher::new(),
        &SystemClock,
        &identity,
    )
    .await?;

    if outcome.created {
        info!("Done: {} account {} created", outcome.account.role, outcome.account.email);
    } else {
        info!("Done: {} already present, nothing written", outcome.account.email);
    }

    Ok(())
}
