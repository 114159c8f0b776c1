use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Faculty.as_str(), "faculty");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert_eq!(Role::from_str("faculty").unwrap(), Role::Faculty);
    assert!(Role::from_str("superuser").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Admin);
}

#[test]
fn test_role_serializes_lowercase() {
    let json = serde_json::to_string(&Role::Faculty).unwrap();
    assert_eq!(json, "\"faculty\"");
}
