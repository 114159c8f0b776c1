use crate::HealthStatus;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_ok_status_when_serialized_then_has_status_message_timestamp() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let json = serde_json::to_value(HealthStatus::ok(now)).unwrap();

    assert_that!(json["status"].as_str(), some(eq("OK")));
    assert_that!(json["message"].as_str(), some(eq("Server is running")));
    assert_that!(json["timestamp"].as_str(), some(eq("2024-01-01T00:00:00Z")));
}

#[test]
fn given_non_ok_status_when_checked_then_not_ok() {
    let mut status = HealthStatus::ok(Utc::now());
    status.status = "DEGRADED".to_string();

    assert_that!(status.is_ok(), is_false());
}
