#![allow(dead_code)]

use sms_core::{Account, Role};
use sms_db::{SqliteConnector, StoreConnector, SqliteAccountStore};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn create_test_account(email: &str, role: Role) -> Account {
    Account::new(
        email.to_string(),
        format!("Test {}", email),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role,
        fixed_now(),
    )
}

/// Connection string for a fresh on-disk database inside `dir`
pub fn file_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("sms.db").display())
}

/// Opens an in-memory store with migrations applied
pub async fn create_memory_sqlite_store() -> SqliteAccountStore {
    SqliteConnector::new("sqlite::memory:")
        .connect()
        .await
        .expect("Failed to open in-memory store")
}
