pub mod account;
pub mod account_summary;
pub mod health_status;
pub mod privileged_identity;
pub mod role;
