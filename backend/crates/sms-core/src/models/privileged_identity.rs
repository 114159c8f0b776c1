//! Target identity handed to the seeder.

use crate::{CoreError, CoreResult, Role};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;

/// Who the seeder should make sure exists.
///
/// The plaintext password only lives here long enough to be hashed; the
/// `Debug` impl never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivilegedIdentity {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password: String,
}

impl PrivilegedIdentity {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
            password: password.into(),
        }
    }

    /// Reject identities the seeder cannot act on.
    /// Email is compared verbatim later, so it is not normalized here.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "email must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "name must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.password.is_empty() {
            return Err(CoreError::Validation {
                message: "password must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for PrivilegedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivilegedIdentity")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .finish()
    }
}
