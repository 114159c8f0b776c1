use serde::Deserialize;

/// Account store settings. `url` has no default; see `Config::database_url`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}
