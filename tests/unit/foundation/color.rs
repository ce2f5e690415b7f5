use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#FFD700")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xFF, 0xD7, 0x00));

    let c: Rgba8 = serde_json::from_value(json!("4a4a4a80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0x4A, 0x4A, 0x4A, 0x80));

    assert!(serde_json::from_value::<Rgba8>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#zz0000")).is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.5])).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(serde_json::from_value::<Rgba8>(json!([0.0, 1.0])).is_err());
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Rgba8::rgb(0xE0, 0xE0, 0xE0)).unwrap();
    assert_eq!(v, json!("#e0e0e0"));
}
