#![cfg(all(feature = "serde", feature = "maybe"))]

//! Integration tests for serde support.
//!
//! `Maybe<T>` serializes exactly like `Option<T>`.

use maybe_monad::maybe::Maybe;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Maybe<String>,
    age: Maybe<u8>,
}

#[rstest]
fn test_present_serializes_as_value() {
    assert_eq!(serde_json::to_string(&Maybe::of(42)).unwrap(), "42");
}

#[rstest]
fn test_absent_serializes_as_null() {
    assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), "null");
}

#[rstest]
#[case(Maybe::of(7))]
#[case(Maybe::none())]
fn test_maybe_json_roundtrip(#[case] original: Maybe<i32>) {
    let json = serde_json::to_string(&original).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_maybe_matches_option_encoding() {
    let maybe_json = serde_json::to_string(&Maybe::of("text")).unwrap();
    let option_json = serde_json::to_string(&Some("text")).unwrap();
    assert_eq!(maybe_json, option_json);
}

#[rstest]
fn test_struct_fields_roundtrip() {
    let profile = Profile {
        name: "ada".to_string(),
        nickname: Maybe::none(),
        age: Maybe::of(36),
    };

    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, r#"{"name":"ada","nickname":null,"age":36}"#);

    let restored: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);
}

#[rstest]
fn test_null_field_deserializes_to_absent() {
    let restored: Profile =
        serde_json::from_str(r#"{"name":"bo","nickname":null,"age":null}"#).unwrap();
    assert!(restored.nickname.is_none());
    assert!(restored.age.is_none());
}

#[rstest]
fn test_nested_maybe_collection() {
    let values = vec![Maybe::of(1), Maybe::none(), Maybe::of(3)];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, "[1,null,3]");

    let restored: Vec<Maybe<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}
