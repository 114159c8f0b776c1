use crate::{CliError, CliResult};

use sms_core::HealthStatus;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::Client as ReqwestClient;
use tokio::time::Instant;

pub const HEALTH_PATH: &str = "/api/health";

/// Polls a server's health endpoint
pub struct HealthProbe {
    base_url: String,
    client: ReqwestClient,
}

impl HealthProbe {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }

    /// One request. Succeeds only on a 2xx whose body reports `"OK"`.
    pub async fn check(&self) -> CliResult<HealthStatus> {
        let response = self
            .client
            .get(self.health_url())
            .send()
            .await
            .map_err(|e| CliError::Health {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(CliError::Health {
                message: format!("unexpected HTTP status {}", status_code),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let health: HealthStatus = response.json().await.map_err(|e| CliError::Health {
            message: format!("unreadable health body: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !health.is_ok() {
            return Err(CliError::Health {
                message: format!("server reported status {}", health.status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(health)
    }

    /// Poll until healthy or until `timeout` has elapsed
    pub async fn wait_until_healthy(
        &self,
        timeout: Duration,
        interval: Duration,
    ) -> CliResult<HealthStatus> {
        let started = Instant::now();
        let deadline = started + timeout;

        loop {
            match self.check().await {
                Ok(health) => {
                    info!(
                        "{} healthy after {}ms",
                        self.health_url(),
                        started.elapsed().as_millis()
                    );
                    return Ok(health);
                }
                Err(e) => debug!("Not ready yet: {}", e),
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(CliError::NotReady {
                    url: self.health_url(),
                    waited_secs: started.elapsed().as_secs(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            tokio::time::sleep(interval.min(deadline - now)).await;
        }
    }
}
