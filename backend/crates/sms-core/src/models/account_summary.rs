use crate::Role;

use serde::{Deserialize, Serialize};

/// Operator-facing projection of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountSummary {
    pub email: String,
    pub role: Role,
}
