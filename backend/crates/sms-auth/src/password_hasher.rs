use crate::Result as AuthResult;

/// One-way, salted password hashing.
///
/// Implementations must never return the plaintext, and must embed the
/// per-record salt in the returned string so `verify` needs nothing else.
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt
    fn hash(&self, plaintext: &str) -> AuthResult<String>;

    /// Check `plaintext` against a hash previously produced by `hash`
    fn verify(&self, plaintext: &str, password_hash: &str) -> AuthResult<bool>;
}
