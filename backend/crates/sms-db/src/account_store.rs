//! The minimal store contract the seed/verify workflows run against.
//!
//! A [`StoreConnector`] opens one connection per run; the resulting
//! [`AccountStore`] is released with [`AccountStore::close`] once the run is
//! over, whatever its outcome.

use crate::Result as DbErrorResult;

use sms_core::{Account, AccountSummary};

use async_trait::async_trait;

/// Result of an atomic insert-if-absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The document was written
    Inserted,
    /// An account with the same email was already present; nothing was written
    AlreadyExists,
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up the account whose email matches exactly
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>>;

    /// Insert `account` unless one with the same email exists.
    /// Must be a single atomic write.
    async fn insert_if_absent(&self, account: &Account) -> DbErrorResult<InsertOutcome>;

    /// Email and role of every stored account, ordered by email
    async fn list_summaries(&self) -> DbErrorResult<Vec<AccountSummary>>;

    /// Release the underlying connection
    async fn close(&self);
}

#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Store: AccountStore;

    /// Open a connection. Failures surface as `DbError::StoreUnavailable`.
    async fn connect(&self) -> DbErrorResult<Self::Store>;
}
