use sms_config::Config;
use sms_server::{ServerError, ServerResult, build_router};

use std::error::Error;

use log::{debug, error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let dotenv = Config::load_dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = config.log_file_path()?;
    sms_config::logger::initialize(&config.logging, log_file.as_deref())?;

    info!("Starting sms-server v{}", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(Some(path)) => debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("Ignoring {}", e),
    }
    config.log_summary();

    serve(&config).await?;

    Ok(())
}

async fn serve(config: &Config) -> ServerResult<()> {
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Actual address matters when port 0 asks for an ephemeral port
    let actual_addr = listener.local_addr().map_err(ServerError::Serve)?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
