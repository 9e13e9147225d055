//! Tests for Record and the Validator
//!
//! These tests verify:
//! - Record constructors and accessors
//! - Each validation rule and its error
//! - Rule ordering (first failure wins)

use bytes::Bytes;
use mimekv::record::{self, Record, TEXT_PLAIN_UTF8};
use mimekv::MimeError;

// =============================================================================
// Record Tests
// =============================================================================

#[test]
fn test_text_record_defaults_to_utf8_plain() {
    let record = Record::text("Value_A");

    assert_eq!(record.payload(), Some(&Bytes::from_static(b"Value_A")));
    assert_eq!(record.media_type(), TEXT_PLAIN_UTF8);
    assert_eq!(record.essence(), "text/plain");
}

#[test]
fn test_essence_without_params() {
    let record = Record::new(vec![1u8, 2, 3], "application/octet-stream");
    assert_eq!(record.essence(), "application/octet-stream");
}

#[test]
fn test_empty_payload_is_not_absent() {
    let empty = Record::new(Vec::<u8>::new(), "text/plain");
    let absent = Record::without_payload("text/plain");

    assert_eq!(empty.payload().map(|p| p.len()), Some(0));
    assert!(absent.payload().is_none());
    assert_ne!(empty, absent);
}

#[test]
fn test_into_parts() {
    let (payload, media_type) = Record::new("abc", "text/csv").into_parts();
    assert_eq!(payload, Some(Bytes::from_static(b"abc")));
    assert_eq!(media_type, "text/csv");
}

// =============================================================================
// Validation Rule Tests
// =============================================================================

#[test]
fn test_valid_record_passes() {
    let record = Record::new("{}", "application/json; charset=UTF-8");
    assert!(record::validate("A", &record).is_ok());
}

#[test]
fn test_empty_payload_passes() {
    let record = Record::new(Vec::<u8>::new(), "text/plain");
    assert!(record::validate("A", &record).is_ok());
}

#[test]
fn test_empty_key_rejected() {
    let err = record::validate("", &Record::text("x")).unwrap_err();
    assert!(matches!(err, MimeError::EmptyKey));
    assert!(err.is_validation());
}

#[test]
fn test_nil_payload_rejected() {
    let err = record::validate("A", &Record::without_payload("text/plain")).unwrap_err();
    assert!(matches!(err, MimeError::NilPayload));
}

#[test]
fn test_empty_content_type_rejected() {
    let err = record::validate("A", &Record::new("Value_A", "")).unwrap_err();
    assert!(matches!(err, MimeError::EmptyContentType));
}

#[test]
fn test_invalid_content_type_rejected() {
    let err = record::validate("A", &Record::new("Value_A", "not-a-type")).unwrap_err();
    assert!(matches!(err, MimeError::InvalidContentType(ref ct) if ct == "not-a-type"));
    assert!(!err.is_not_found());
}

#[test]
fn test_rule_order_key_before_payload() {
    let err = record::validate("", &Record::without_payload("")).unwrap_err();
    assert!(matches!(err, MimeError::EmptyKey));
}

#[test]
fn test_rule_order_payload_before_content_type() {
    let err = record::validate("A", &Record::without_payload("garbage")).unwrap_err();
    assert!(matches!(err, MimeError::NilPayload));
}

#[test]
fn test_media_type_prefix_forms() {
    for ok in ["text/plain", "image/png", "application/json; charset=UTF-8", "a1/b2"] {
        assert!(record::is_valid_media_type(ok), "{ok} should be valid");
    }
    for bad in ["text", "text/", "/plain", "text plain", "-/-", ""] {
        assert!(!record::is_valid_media_type(bad), "{bad} should be invalid");
    }
}
