use super::{
    ADMIN_EMAIL, ADMIN_PASSWORD, CountingHasher, admin_identity, fixed_clock, stored_account,
};
use crate::{CliError, ensure_privileged_account};

use sms_auth::{Argon2PasswordHasher, PasswordHasher};
use sms_core::{CoreError, PrivilegedIdentity, Role};
use sms_db::{DbError, MemoryConnector};

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_store_when_seeding_then_account_is_created() {
    // Given
    let connector = MemoryConnector::new();
    let hasher = CountingHasher::default();
    let clock = fixed_clock();

    // When
    let outcome = ensure_privileged_account(&connector, &hasher, &clock, &admin_identity())
        .await
        .unwrap();

    // Then
    assert!(outcome.created);
    assert_that!(outcome.account.email, eq(ADMIN_EMAIL));
    assert_that!(outcome.account.role, eq(Role::Admin));
    assert_that!(outcome.account.created_at, eq(clock.0));
    assert_that!(outcome.account.updated_at, eq(clock.0));

    let stored = connector.accounts().await;
    assert_that!(stored, len(eq(1)));
    assert_that!(stored[0], eq(&outcome.account));
    assert_that!(hasher.calls(), eq(1));
}

#[tokio::test]
async fn given_seeded_store_when_seeding_again_then_nothing_is_written() {
    // Given
    let connector = MemoryConnector::new();
    let hasher = CountingHasher::default();
    let first = ensure_privileged_account(&connector, &hasher, &fixed_clock(), &admin_identity())
        .await
        .unwrap();

    // When
    let second = ensure_privileged_account(&connector, &hasher, &fixed_clock(), &admin_identity())
        .await
        .unwrap();

    // Then
    assert!(first.created);
    assert!(!second.created);
    assert_that!(second.account, eq(&first.account));
    assert_that!(connector.accounts().await, len(eq(1)));
    assert_that!(hasher.calls(), eq(1));
}

#[tokio::test]
async fn given_existing_account_with_other_role_when_seeding_then_it_is_left_untouched() {
    let existing = stored_account(ADMIN_EMAIL, Role::Faculty);
    let connector = MemoryConnector::with_accounts(vec![existing.clone()]).await;

    let outcome =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &admin_identity())
            .await
            .unwrap();

    assert!(!outcome.created);
    assert_that!(outcome.account, eq(&existing));
    assert_eq!(connector.accounts().await, vec![existing]);
}

#[tokio::test]
async fn given_argon2_hasher_when_seeding_then_plaintext_is_never_stored() {
    // Given
    let connector = MemoryConnector::new();
    let hasher = Argon2PasswordHasher::new();

    // When
    ensure_privileged_account(&connector, &hasher, &fixed_clock(), &admin_identity())
        .await
        .unwrap();

    // Then
    let stored = connector.accounts().await;
    let account = &stored[0];
    assert_that!(account.password_hash, not(eq(ADMIN_PASSWORD)));
    assert_that!(account.password_hash, not(contains_substring(ADMIN_PASSWORD)));
    assert_that!(account.name, not(eq(ADMIN_PASSWORD)));
    assert_that!(account.password_hash, starts_with("$argon2id$"));
    assert!(hasher.verify(ADMIN_PASSWORD, &account.password_hash).unwrap());
    assert!(!hasher.verify("wrong", &account.password_hash).unwrap());
}

#[tokio::test]
async fn given_insert_failure_when_seeding_then_no_account_and_store_closed_once() {
    // Given
    let connector = MemoryConnector::new();
    connector.fail_next_insert().await;

    // When
    let result =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &admin_identity())
            .await;

    // Then
    assert!(matches!(
        result,
        Err(CliError::Db(DbError::StoreOperationFailed { .. }))
    ));
    assert_that!(connector.accounts().await, is_empty());
    assert_that!(connector.close_count().await, eq(1));
}

#[tokio::test]
async fn given_lookup_failure_when_seeding_then_store_closed_once() {
    let connector = MemoryConnector::new();
    connector.fail_next_find().await;
    let hasher = CountingHasher::default();

    let result = ensure_privileged_account(&connector, &hasher, &fixed_clock(), &admin_identity()).await;

    assert!(matches!(
        result,
        Err(CliError::Db(DbError::StoreOperationFailed { .. }))
    ));
    assert_that!(connector.close_count().await, eq(1));
    assert_that!(hasher.calls(), eq(0));
}

#[tokio::test]
async fn given_unreachable_store_when_seeding_then_store_unavailable_without_close() {
    let connector = MemoryConnector::new();
    connector.fail_connect().await;

    let result =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &admin_identity())
            .await;

    assert!(matches!(
        result,
        Err(CliError::Db(DbError::StoreUnavailable { .. }))
    ));
    assert_that!(connector.close_count().await, eq(0));
}

#[tokio::test]
async fn given_competing_writer_when_inserting_then_stored_account_wins() {
    // Given
    let competitor = stored_account(ADMIN_EMAIL, Role::Admin);
    let connector = MemoryConnector::new();
    connector.insert_before_next_insert(competitor.clone()).await;

    // When
    let outcome =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &admin_identity())
            .await
            .unwrap();

    // Then
    assert!(!outcome.created);
    assert_that!(outcome.account, eq(&competitor));
    assert_that!(connector.accounts().await, len(eq(1)));
    assert_that!(connector.close_count().await, eq(1));
}

#[tokio::test]
async fn given_blank_email_when_seeding_then_validation_fails_before_connecting() {
    let connector = MemoryConnector::new();
    let identity = PrivilegedIdentity::new("  ", "Admin", Role::Admin, ADMIN_PASSWORD);

    let result =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &identity)
            .await;

    assert!(matches!(
        result,
        Err(CliError::Core(CoreError::Validation { .. }))
    ));
    assert_that!(connector.connect_count().await, eq(0));
}

#[tokio::test]
async fn given_empty_password_when_seeding_then_validation_fails() {
    let connector = MemoryConnector::new();
    let identity = PrivilegedIdentity::new(ADMIN_EMAIL, "Admin", Role::Admin, "");

    let result =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &identity)
            .await;

    assert!(matches!(
        result,
        Err(CliError::Core(CoreError::Validation { .. }))
    ));
    assert_that!(connector.accounts().await, is_empty());
}

#[tokio::test]
async fn given_email_differing_in_case_when_seeding_then_separate_account_is_created() {
    let connector =
        MemoryConnector::with_accounts(vec![stored_account("Admin@School.edu", Role::Admin)]).await;

    let outcome =
        ensure_privileged_account(&connector, &CountingHasher::default(), &fixed_clock(), &admin_identity())
            .await
            .unwrap();

    assert!(outcome.created);
    assert_that!(connector.accounts().await, len(eq(2)));
}
