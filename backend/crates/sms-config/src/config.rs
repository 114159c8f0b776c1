use crate::{
    AdminConfig, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, ENV_ADMIN_EMAIL, ENV_ADMIN_NAME, ENV_ADMIN_PASSWORD, ENV_ADMIN_ROLE,
    ENV_CONFIG_DIR, ENV_DATABASE_URL, LoggingConfig, ServerConfig,
};

use sms_core::PrivilegedIdentity;

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load `.env` from the working directory (or a parent) into the process
    /// environment. Variables already set win.
    ///
    /// Runs before the logger exists, so the outcome is returned for the
    /// caller to report: the loaded path, or `None` when there is no `.env`.
    pub fn load_dotenv() -> ConfigErrorResult<Option<PathBuf>> {
        Self::resolve_dotenv(dotenvy::dotenv())
    }

    pub(crate) fn resolve_dotenv(
        result: Result<PathBuf, dotenvy::Error>,
    ) -> ConfigErrorResult<Option<PathBuf>> {
        match result {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(ConfigError::config(format!("Unreadable .env file: {}", e))),
        }
    }

    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SMS_CONFIG_DIR env var, else use ./.sms/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply SMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SMS_CONFIG_DIR env var > ./.sms/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate the settings every binary shares.
    /// Store and identity settings are checked where they are needed.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// The account store connection string, or `ConfigError::Missing`.
    #[track_caller]
    pub fn database_url(&self) -> ConfigErrorResult<&str> {
        match self.database.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ConfigError::missing("database.url", ENV_DATABASE_URL)),
        }
    }

    /// The identity to seed, or an error if the password is unset or the
    /// identity is incomplete.
    #[track_caller]
    pub fn admin_identity(&self) -> ConfigErrorResult<PrivilegedIdentity> {
        let password = match self.admin.password.as_deref() {
            Some(password) if !password.is_empty() => password,
            _ => return Err(ConfigError::missing("admin.password", ENV_ADMIN_PASSWORD)),
        };

        let identity = PrivilegedIdentity::new(
            self.admin.email.clone(),
            self.admin.name.clone(),
            self.admin.role,
            password,
        );

        identity
            .validate()
            .map_err(|e| ConfigError::admin(e.to_string()))?;

        Ok(identity)
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {}",
            if self.database.url.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );
        info!(
            "  admin: {} <{}> role={} password={}",
            self.admin.name,
            self.admin.email,
            self.admin.role,
            if self.admin.password.is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level.0, self.logging.colored
        );
        info!("  server: {}:{}", self.server.host, self.server.port);
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Database
        Self::apply_env_option_string(ENV_DATABASE_URL, &mut self.database.url);

        // Admin identity
        Self::apply_env_string(ENV_ADMIN_EMAIL, &mut self.admin.email);
        Self::apply_env_string(ENV_ADMIN_NAME, &mut self.admin.name);
        if let Ok(val) = std::env::var(ENV_ADMIN_ROLE) {
            // An unknown role must not silently fall back to admin
            self.admin.role = val
                .parse()
                .map_err(|e: sms_core::CoreError| ConfigError::admin(e.to_string()))?;
        }
        Self::apply_env_option_string(ENV_ADMIN_PASSWORD, &mut self.admin.password);

        // Logging
        Self::apply_env_parse("SMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SMS_LOG_FILE", &mut self.logging.file);

        // Server
        Self::apply_env_string("SMS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SMS_SERVER_PORT", &mut self.server.port);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
