//! sms-cli library
//!
//! The seed and verify workflows behind the `seed-admin` and `verify-admin`
//! binaries, plus the readiness probe behind `wait-healthy`. Workflows take
//! their store connector, hasher and clock as arguments so they run the same
//! against SQLite or the in-memory store.

pub mod bootstrap;
pub mod error;
pub mod health_probe;
pub mod seeder;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use bootstrap::bootstrap;
pub use error::{CliError, Result as CliResult};
pub use health_probe::HealthProbe;
pub use seeder::{SeedOutcome, ensure_privileged_account};
pub use verifier::{AccountStatus, report_account_status};
