use crate::{Account, Role};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_new_account_when_created_then_timestamps_match() {
    // Given
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    // When
    let account = Account::new(
        "admin@school.edu".to_string(),
        "Admin".to_string(),
        "$argon2id$stub".to_string(),
        Role::Admin,
        now,
    );

    // Then
    assert_that!(account.created_at, eq(now));
    assert_that!(account.updated_at, eq(now));
}

#[test]
fn given_sub_millisecond_clock_when_created_then_timestamps_cut_to_millis() {
    let now = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();

    let account = Account::new(
        "admin@school.edu".to_string(),
        "Admin".to_string(),
        "$argon2id$stub".to_string(),
        Role::Admin,
        now,
    );

    assert_that!(account.created_at.timestamp_subsec_nanos(), eq(123_000_000));
    assert_that!(account.updated_at, eq(account.created_at));
    assert_that!(account.created_at.timestamp_millis(), eq(now.timestamp_millis()));
}

#[test]
fn given_account_when_summarized_then_keeps_email_and_role() {
    let account = Account::new(
        "b@x.com".to_string(),
        "B".to_string(),
        "hash".to_string(),
        Role::Student,
        Utc::now(),
    );

    let summary = account.summary();

    assert_that!(summary.email, eq("b@x.com"));
    assert_that!(summary.role, eq(Role::Student));
}

#[test]
fn given_account_when_serialized_then_password_hash_omitted() {
    let account = Account::new(
        "a@x.com".to_string(),
        "A".to_string(),
        "$argon2id$secret-hash".to_string(),
        Role::Admin,
        Utc::now(),
    );

    let json = serde_json::to_string(&account).unwrap();

    assert_that!(json, not(contains_substring("password_hash")));
    assert_that!(json, not(contains_substring("secret-hash")));
    assert_that!(json, contains_substring("\"role\":\"admin\""));
}
