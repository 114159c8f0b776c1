use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] sms_config::ConfigError),

    #[error("Store error: {0}")]
    Db(#[from] sms_db::DbError),

    #[error("Password hashing error: {0}")]
    Auth(#[from] sms_auth::AuthError),

    #[error("Invalid input: {0}")]
    Core(#[from] sms_core::CoreError),

    #[error("Health check failed: {message} {location}")]
    Health {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server at {url} not healthy after {waited_secs}s {location}")]
    NotReady {
        url: String,
        waited_secs: u64,
        location: ErrorLocation,
    },

    #[error("Failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
