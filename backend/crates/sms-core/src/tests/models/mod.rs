mod account;
mod health_status;
mod privileged_identity;
mod role;
