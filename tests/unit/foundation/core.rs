use super::*;
use serde_json::json;

#[test]
fn parses_short_and_long_hex() {
    assert_eq!(Rgb8::from_hex("#fff").unwrap(), Rgb8::WHITE);
    assert_eq!(Rgb8::from_hex("323232").unwrap(), Rgb8::new(50, 50, 50));
    assert_eq!(Rgb8::from_hex("#FF8000").unwrap(), Rgb8::new(255, 128, 0));
}

#[test]
fn rejects_bad_hex() {
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#zzzzzz").is_err());
    assert!(Rgb8::from_hex("#ééé").is_err());
}

#[test]
fn deserializes_hex_object_and_array() {
    let c: Rgb8 = serde_json::from_value(json!("#0a0b0c")).unwrap();
    assert_eq!(c, Rgb8::new(10, 11, 12));

    let c: Rgb8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));

    let c: Rgb8 = serde_json::from_value(json!([4, 5, 6])).unwrap();
    assert_eq!(c, Rgb8::new(4, 5, 6));
}

#[test]
fn serializes_as_lowercase_hex() {
    let v = serde_json::to_value(Rgb8::new(50, 50, 50)).unwrap();
    assert_eq!(v, json!("#323232"));
}
