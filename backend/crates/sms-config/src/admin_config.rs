use crate::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME};

use sms_core::Role;

use serde::Deserialize;

/// Identity the seeder provisions
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Plaintext, only ever read to be hashed
    pub password: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: String::from(DEFAULT_ADMIN_EMAIL),
            name: String::from(DEFAULT_ADMIN_NAME),
            role: Role::Admin,
            password: None,
        }
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
