pub mod memory_account_store;
pub mod sqlite_account_store;
