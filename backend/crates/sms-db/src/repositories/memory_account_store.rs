//! In-process account store.
//!
//! Implements the same contract as the SQLite store over a shared map, and
//! lets callers inject failures and count connection releases. Every
//! [`MemoryAccountStore`] handed out by a [`MemoryConnector`] sees the same
//! documents.

use crate::{AccountStore, DbError, InsertOutcome, Result as DbErrorResult, StoreConnector};

use sms_core::{Account, AccountSummary};

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct MemoryState {
    accounts: BTreeMap<String, Account>,
    connect_count: usize,
    close_count: usize,
    fail_connect: bool,
    fail_next_find: bool,
    fail_next_insert: bool,
    fail_next_list: bool,
    /// Written just before the next insert, as if by another writer
    competing_insert: Option<Account>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_accounts(accounts: Vec<Account>) -> Self {
        let connector = Self::new();
        {
            let mut state = connector.state.lock().await;
            for account in accounts {
                state.accounts.insert(account.email.clone(), account);
            }
        }
        connector
    }

    /// Snapshot of every stored account, ordered by email
    pub async fn accounts(&self) -> Vec<Account> {
        self.state.lock().await.accounts.values().cloned().collect()
    }

    pub async fn connect_count(&self) -> usize {
        self.state.lock().await.connect_count
    }

    pub async fn close_count(&self) -> usize {
        self.state.lock().await.close_count
    }

    pub async fn fail_connect(&self) {
        self.state.lock().await.fail_connect = true;
    }

    pub async fn fail_next_find(&self) {
        self.state.lock().await.fail_next_find = true;
    }

    pub async fn fail_next_insert(&self) {
        self.state.lock().await.fail_next_insert = true;
    }

    pub async fn fail_next_list(&self) {
        self.state.lock().await.fail_next_list = true;
    }

    /// Have another writer store `account` between the next lookup and insert
    pub async fn insert_before_next_insert(&self, account: Account) {
        self.state.lock().await.competing_insert = Some(account);
    }
}

#[async_trait]
impl StoreConnector for MemoryConnector {
    type Store = MemoryAccountStore;

    async fn connect(&self) -> DbErrorResult<MemoryAccountStore> {
        let mut state = self.state.lock().await;
        if state.fail_connect {
            return Err(DbError::unavailable("connection refused"));
        }
        state.connect_count += 1;

        Ok(MemoryAccountStore {
            state: Arc::clone(&self.state),
        })
    }
}

pub struct MemoryAccountStore {
    state: Arc<Mutex<MemoryState>>,
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        let mut state = self.state.lock().await;
        if std::mem::take(&mut state.fail_next_find) {
            return Err(DbError::operation("find failed"));
        }

        Ok(state.accounts.get(email).cloned())
    }

    async fn insert_if_absent(&self, account: &Account) -> DbErrorResult<InsertOutcome> {
        let mut state = self.state.lock().await;

        if let Some(competing) = state.competing_insert.take() {
            state.accounts.insert(competing.email.clone(), competing);
        }

        if std::mem::take(&mut state.fail_next_insert) {
            return Err(DbError::operation("insert failed"));
        }

        if state.accounts.contains_key(&account.email) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        state
            .accounts
            .insert(account.email.clone(), account.clone());

        Ok(InsertOutcome::Inserted)
    }

    async fn list_summaries(&self) -> DbErrorResult<Vec<AccountSummary>> {
        let mut state = self.state.lock().await;
        if std::mem::take(&mut state.fail_next_list) {
            return Err(DbError::operation("list failed"));
        }

        Ok(state.accounts.values().map(Account::summary).collect())
    }

    async fn close(&self) {
        self.state.lock().await.close_count += 1;
    }
}
