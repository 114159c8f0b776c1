mod admin_config;
mod config;
mod database_config;
mod error;
mod log_level;
pub mod logger;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use admin_config::AdminConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_CONFIG_DIR: &str = ".sms";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_ADMIN_EMAIL: &str = "admin@school.edu";
const DEFAULT_ADMIN_NAME: &str = "System Administrator";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

pub const ENV_CONFIG_DIR: &str = "SMS_CONFIG_DIR";
pub const ENV_DATABASE_URL: &str = "SMS_DATABASE_URL";
pub const ENV_ADMIN_EMAIL: &str = "SMS_ADMIN_EMAIL";
pub const ENV_ADMIN_NAME: &str = "SMS_ADMIN_NAME";
pub const ENV_ADMIN_ROLE: &str = "SMS_ADMIN_ROLE";
pub const ENV_ADMIN_PASSWORD: &str = "SMS_ADMIN_PASSWORD";
