pub mod clock;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result as CoreResult};
pub use models::account::Account;
pub use models::account_summary::AccountSummary;
pub use models::health_status::{HEALTH_OK, HealthStatus};
pub use models::privileged_identity::PrivilegedIdentity;
pub use models::role::Role;
