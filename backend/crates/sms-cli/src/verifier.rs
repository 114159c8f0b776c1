//! Read-only report on the privileged account and everything else stored.

use crate::CliResult;

use sms_core::{Account, AccountSummary, CoreError};
use sms_db::{AccountStore, StoreConnector};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatus {
    pub exists: bool,
    pub account: Option<Account>,
    /// Every stored account, ordered by email
    pub all_accounts: Vec<AccountSummary>,
}

impl AccountStatus {
    /// Narrate the report through the logger
    pub fn log_report(&self, email: &str) {
        match self.account {
            Some(ref account) => {
                info!("Account {} found", account.email);
                info!("  name: {}", account.name);
                info!("  role: {}", account.role);
                info!("  created: {}", account.created_at.to_rfc3339());
            }
            None => warn!("Account {} not found", email),
        }

        info!("{} account(s) in store", self.all_accounts.len());
        for summary in &self.all_accounts {
            info!("  - {} ({})", summary.email, summary.role);
        }
    }
}

/// Report whether `email` exists and list every stored account.
///
/// Never writes. The store connection is closed before returning.
pub async fn report_account_status<C>(connector: &C, email: &str) -> CliResult<AccountStatus>
where
    C: StoreConnector,
{
    if email.trim().is_empty() {
        return Err(CoreError::Validation {
            message: "email must not be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
        .into());
    }

    let store = connector.connect().await?;
    let status = collect(&store, email).await;
    store.close().await;

    status
}

async fn collect<S: AccountStore>(store: &S, email: &str) -> CliResult<AccountStatus> {
    let account = store.find_by_email(email).await?;
    let all_accounts = store.list_summaries().await?;

    Ok(AccountStatus {
        exists: account.is_some(),
        account,
        all_accounts,
    })
}
