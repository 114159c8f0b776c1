pub mod argon2_password_hasher;
pub mod error;
pub mod password_hasher;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use error::{AuthError, Result};
pub use password_hasher::PasswordHasher;
