//! User payload validation tests.
//!
//! The payload carries exactly four field constraints; these tests
//! enumerate the violations precisely.

use roster_api::domain::UserPayload;
use validator::Validate;

#[test]
fn fully_invalid_payload_yields_exactly_four_violations() {
    let payload = UserPayload {
        id: None,
        username: "a".to_string(),
        age: 10,
        password: String::new(),
    };

    let errors = payload.validate().unwrap_err();
    let by_field = errors.field_errors();

    // One violation per field, four in total
    let total: usize = by_field.values().map(|v| v.len()).sum();
    assert_eq!(total, 4);

    assert_eq!(by_field.get("id").unwrap()[0].code, "required");
    assert_eq!(by_field.get("username").unwrap()[0].code, "length");
    assert_eq!(by_field.get("age").unwrap()[0].code, "range");
    assert_eq!(by_field.get("password").unwrap()[0].code, "length");
}

#[test]
fn valid_payload_passes() {
    let payload = UserPayload {
        id: Some(1),
        username: "gloryh".to_string(),
        age: 24,
        password: "s3cret".to_string(),
    };

    assert!(payload.validate().is_ok());
}

#[test]
fn boundary_values_are_accepted() {
    // Minimum legal username length and age
    let payload = UserPayload {
        id: Some(1),
        username: "ab".to_string(),
        age: 16,
        password: "p".to_string(),
    };

    assert!(payload.validate().is_ok());
}

#[test]
fn underage_user_is_rejected() {
    let payload = UserPayload {
        id: Some(1),
        username: "gloryh".to_string(),
        age: 15,
        password: "s3cret".to_string(),
    };

    let errors = payload.validate().unwrap_err();
    let by_field = errors.field_errors();

    assert_eq!(by_field.len(), 1);
    assert_eq!(by_field.get("age").unwrap()[0].code, "range");
}
