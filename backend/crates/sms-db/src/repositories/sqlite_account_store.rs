use crate::{AccountStore, DbError, InsertOutcome, Result as DbErrorResult};

use sms_core::{Account, AccountSummary, Role};

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct AccountRow {
    id: String,
    email: String,
    name: String,
    password_hash: String,
    role: String,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    email: String,
    role: String,
}

pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn parse_role(value: &str) -> DbErrorResult<Role> {
    Role::from_str(value)
        .map_err(|e| DbError::decode(format!("Invalid role in sms_accounts.role: {}", e)))
}

fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| DbError::decode(format!("Invalid timestamp in sms_accounts.{}", column)))
}

impl TryFrom<AccountRow> for Account {
    type Error = DbError;

    fn try_from(row: AccountRow) -> DbErrorResult<Self> {
        Ok(Account {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| DbError::decode(format!("Invalid UUID in sms_accounts.id: {}", e)))?,
            email: row.email,
            name: row.name,
            password_hash: row.password_hash,
            role: parse_role(&row.role)?,
            created_at: parse_timestamp(row.created_at, "created_at")?,
            updated_at: parse_timestamp(row.updated_at, "updated_at")?,
        })
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, name, password_hash, role, created_at, updated_at
                FROM sms_accounts
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Account::try_from).transpose()
    }

    async fn insert_if_absent(&self, account: &Account) -> DbErrorResult<InsertOutcome> {
        let result = sqlx::query(
            r#"
                INSERT INTO sms_accounts (
                    id, email, name, password_hash, role, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.email)
        .bind(&account.name)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(account.created_at.timestamp_millis())
        .bind(account.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!("Insert skipped, email already present");
            return Ok(InsertOutcome::AlreadyExists);
        }

        Ok(InsertOutcome::Inserted)
    }

    async fn list_summaries(&self) -> DbErrorResult<Vec<AccountSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT email, role FROM sms_accounts ORDER BY email",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(AccountSummary {
                    role: parse_role(&r.role)?,
                    email: r.email,
                })
            })
            .collect()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
