//! Serialization tests for Either and Side.

#![cfg(all(feature = "control", feature = "serde"))]

use lenskit::control::{Either, Side};
use rstest::rstest;

#[rstest]
fn either_serde_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(left_json, r#"{"Left":"error"}"#);
    assert_eq!(right_json, r#"{"Right":42}"#);

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(restored_left, left);
    assert_eq!(restored_right, right);
}

#[rstest]
fn nested_either_serde_roundtrip() {
    let value: Either<Vec<String>, Either<u8, bool>> = Either::Right(Either::Left(3));

    let json = serde_json::to_string(&value).unwrap();
    let restored: Either<Vec<String>, Either<u8, bool>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, value);
}

#[rstest]
#[case(Side::Left, r#""Left""#)]
#[case(Side::Right, r#""Right""#)]
fn side_serializes_as_unit_variant(#[case] side: Side, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&side).unwrap(), expected);
    assert_eq!(serde_json::from_str::<Side>(expected).unwrap(), side);
}

#[rstest]
fn either_rejects_unknown_variant() {
    let result = serde_json::from_str::<Either<String, i32>>(r#"{"Middle":1}"#);
    assert!(result.is_err());
}
