//! Idempotent creation of the privileged account.
//!
//! Lookup first so an existing account costs no hashing, then a single
//! insert-if-absent so a concurrent seeder cannot produce a duplicate.

use crate::CliResult;

use sms_auth::PasswordHasher;
use sms_core::{Account, Clock, PrivilegedIdentity};
use sms_db::{AccountStore, DbError, InsertOutcome, StoreConnector};

use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOutcome {
    /// True only when this run wrote the account
    pub created: bool,
    /// The account as stored after the run
    pub account: Account,
}

/// Make sure exactly one account exists for `identity.email`.
///
/// The store connection is closed before returning, on success and on
/// failure alike.
pub async fn ensure_privileged_account<C, H, K>(
    connector: &C,
    hasher: &H,
    clock: &K,
    identity: &PrivilegedIdentity,
) -> CliResult<SeedOutcome>
where
    C: StoreConnector,
    H: PasswordHasher + ?Sized,
    K: Clock + ?Sized,
{
    identity.validate()?;

    let store = connector.connect().await?;
    let outcome = seed(&store, hasher, clock, identity).await;
    store.close().await;

    outcome
}

async fn seed<S, H, K>(
    store: &S,
    hasher: &H,
    clock: &K,
    identity: &PrivilegedIdentity,
) -> CliResult<SeedOutcome>
where
    S: AccountStore,
    H: PasswordHasher + ?Sized,
    K: Clock + ?Sized,
{
    if let Some(existing) = store.find_by_email(&identity.email).await? {
        info!(
            "Account {} already exists (role={}), leaving it untouched",
            existing.email, existing.role
        );
        return Ok(SeedOutcome {
            created: false,
            account: existing,
        });
    }

    let password_hash = hasher.hash(&identity.password)?;
    let account = Account::new(
        identity.email.clone(),
        identity.name.clone(),
        password_hash,
        identity.role,
        clock.now(),
    );

    match store.insert_if_absent(&account).await? {
        InsertOutcome::Inserted => {
            info!("Created {} account {}", account.role, account.email);
            Ok(SeedOutcome {
                created: true,
                account,
            })
        }
        InsertOutcome::AlreadyExists => {
            warn!(
                "Account {} was created by another writer during this run, keeping the stored one",
                account.email
            );
            let existing = store
                .find_by_email(&identity.email)
                .await?
                .ok_or_else(|| DbError::operation("account missing after conflicting insert"))?;
            Ok(SeedOutcome {
                created: false,
                account: existing,
            })
        }
    }
}
