use crate::{CoreError, PrivilegedIdentity, Role};

use googletest::prelude::*;

#[test]
fn given_complete_identity_when_validated_then_ok() {
    let identity = PrivilegedIdentity::new("admin@school.edu", "Admin", Role::Admin, "s3cret!");

    assert_that!(identity.validate(), ok(anything()));
}

#[test]
fn given_blank_email_when_validated_then_validation_error() {
    let identity = PrivilegedIdentity::new("   ", "Admin", Role::Admin, "s3cret!");

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_empty_password_when_validated_then_validation_error() {
    let identity = PrivilegedIdentity::new("admin@school.edu", "Admin", Role::Admin, "");

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_identity_when_debug_printed_then_password_is_redacted() {
    let identity = PrivilegedIdentity::new("admin@school.edu", "Admin", Role::Admin, "s3cret!");

    let debug = format!("{:?}", identity);

    assert_that!(debug, not(contains_substring("s3cret!")));
    assert_that!(debug, contains_substring("<redacted>"));
}
