//! Building boxes and bounds from configuration objects.

use boxkit_common::BoxError;
use boxkit_geom::{Bounds, OffsetBox, Point};

#[test]
fn test_empty_config_is_zero() {
    assert_eq!(OffsetBox::from_json("{}").unwrap(), OffsetBox::default());
}

#[test]
fn test_partial_config_defaults_missing_sides() {
    let json = r#"{ "top": 50, "right": 100 }"#;
    let b = OffsetBox::from_json(json).unwrap();
    assert_eq!(b, OffsetBox::new(50.0, 100.0, 0.0, 0.0));
}

#[test]
fn test_full_config() {
    let json = r#"{ "top": 50, "left": 50, "bottom": 100, "right": 100 }"#;
    let b = OffsetBox::from_json(json).unwrap();
    assert_eq!(b.width(), 50.0);
    assert_eq!(b.height(), 50.0);
}

#[test]
fn test_box_serializes_all_sides() {
    let b = OffsetBox::new(1.0, 2.0, 3.0, 4.0);
    let value = serde_json::to_value(b).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "top": 1.0, "right": 2.0, "bottom": 3.0, "left": 4.0 })
    );
}

#[test]
fn test_invalid_config() {
    let err = OffsetBox::from_json(r#"{ "top": "fifty" }"#).unwrap_err();
    assert!(matches!(err, BoxError::InvalidConfig(_)));
}

#[test]
fn test_bounds_config_defaults_to_unbounded() {
    let bounds = Bounds::from_json(r#"{ "top": 70 }"#).unwrap();
    assert_eq!(bounds, Bounds::new().top(70.0));
    assert_eq!(bounds.left, f64::NEG_INFINITY);
    assert_eq!(bounds.right, f64::INFINITY);
}

#[test]
fn test_bounds_config_drives_constrain() {
    let bounds = Bounds::from_json(r#"{ "top": 70 }"#).unwrap();
    let b = OffsetBox::new(50.0, 100.0, 100.0, 50.0).constrain(bounds);
    assert_eq!(b, OffsetBox::new(70.0, 100.0, 120.0, 50.0));
}

#[test]
fn test_point_round_trips_through_json() {
    let point = Point::new(75.0, 50.0);
    let value = serde_json::to_value(point).unwrap();
    assert_eq!(value, serde_json::json!({ "x": 75.0, "y": 50.0 }));

    let decoded: Point = serde_json::from_value(value).unwrap();
    assert_eq!(<[f64; 2]>::from(decoded), [75.0, 50.0]);
}
