//! Argon2id password hashing with a fixed work factor.
//!
//! Output is a PHC string (`$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`),
//! so algorithm, parameters and salt travel with the hash.

use crate::{AuthError, PasswordHasher, Result as AuthResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

/// Memory cost in KiB
pub const MEMORY_COST_KIB: u32 = 19_456;
/// Number of passes
pub const TIME_COST: u32 = 2;
/// Degree of parallelism
pub const PARALLELISM: u32 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    #[track_caller]
    pub(crate) fn argon2(&self) -> AuthResult<Argon2<'static>> {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None).map_err(|e| {
            AuthError::Hash {
                message: format!("Invalid Argon2 parameters: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    #[track_caller]
    fn hash(&self, plaintext: &str) -> AuthResult<String> {
        if plaintext.is_empty() {
            return Err(AuthError::EmptyPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()?
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Hash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hash.to_string())
    }

    #[track_caller]
    fn verify(&self, plaintext: &str, password_hash: &str) -> AuthResult<bool> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| AuthError::InvalidHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2()?.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AuthError::Hash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
