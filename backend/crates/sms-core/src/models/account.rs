//! Account entity - the only document kept by the account store.

use crate::{AccountSummary, Role};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored account.
/// `email` is the identifying key; at most one account exists per email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Case-sensitive lookup key
    pub email: String,
    pub name: String,
    /// PHC-format salted hash, never the plaintext. Kept out of serialized
    /// reports.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account stamped with `now` for both timestamps.
    /// Timestamps are cut to the millisecond precision the store keeps.
    pub fn new(
        email: String,
        name: String,
        password_hash: String,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            email: self.email.clone(),
            role: self.role,
        }
    }
}
