mod seeder;

use sms_auth::{AuthError, PasswordHasher};
use sms_core::{Account, FixedClock, PrivilegedIdentity, Role};

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};

pub(crate) const ADMIN_EMAIL: &str = "admin@school.edu";
pub(crate) const ADMIN_PASSWORD: &str = "s3cret-Passw0rd";

pub(crate) fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
}

pub(crate) fn admin_identity() -> PrivilegedIdentity {
    PrivilegedIdentity::new(ADMIN_EMAIL, "System Administrator", Role::Admin, ADMIN_PASSWORD)
}

pub(crate) fn stored_account(email: &str, role: Role) -> Account {
    Account::new(
        email.to_string(),
        format!("Stored {}", email),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role,
        fixed_clock().0,
    )
}

/// Cheap hasher that records how often it ran
#[derive(Default)]
pub(crate) struct CountingHasher {
    calls: AtomicUsize,
}

impl CountingHasher {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for CountingHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("hashed:{}", plaintext.len()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{}", plaintext.len()))
    }
}
