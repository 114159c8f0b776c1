pub mod account_store;
pub mod connection;
pub mod error;
pub mod repositories;

pub use account_store::{AccountStore, InsertOutcome, StoreConnector};
pub use connection::sqlite_connector::SqliteConnector;
pub use error::{DbError, Result};
pub use repositories::memory_account_store::{MemoryAccountStore, MemoryConnector};
pub use repositories::sqlite_account_store::SqliteAccountStore;
