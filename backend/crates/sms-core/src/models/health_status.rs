use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status value reported by a healthy server
pub const HEALTH_OK: &str = "OK";

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn ok(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: HEALTH_OK.to_string(),
            message: "Server is running".to_string(),
            timestamp,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == HEALTH_OK
    }
}
