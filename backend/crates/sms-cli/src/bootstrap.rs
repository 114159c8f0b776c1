use crate::CliResult;

use sms_config::Config;

use log::{debug, info, warn};

/// Shared start-up for every binary: `.env`, config, logger.
///
/// Errors returned here happen before logging exists, so callers report
/// them on stderr.
pub fn bootstrap(app_name: &str) -> CliResult<Config> {
    let dotenv = Config::load_dotenv();

    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    sms_config::logger::initialize(&config.logging, log_file.as_deref())?;

    info!("Starting {} v{}", app_name, env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(Some(path)) => debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("Ignoring {}", e),
    }
    config.log_summary();

    Ok(config)
}
