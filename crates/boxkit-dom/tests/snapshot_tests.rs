//! Tests for the in-memory rectangle provider.

use boxkit_dom::{BoundingRectProvider, ClientRect, RectSnapshot, ViewportSize};

#[test]
fn test_insert_and_remove() {
    let mut snapshot: RectSnapshot<String> = RectSnapshot::new(ViewportSize::new(800.0, 600.0));
    assert!(snapshot.is_empty());

    let rect = ClientRect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(snapshot.insert("a".to_string(), rect), None);
    assert_eq!(
        snapshot.insert("a".to_string(), ClientRect::default()),
        Some(rect)
    );
    assert_eq!(snapshot.len(), 1);

    assert_eq!(snapshot.remove("a"), Some(ClientRect::default()));
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.remove("a"), None);
}

#[test]
fn test_unknown_key_reports_zero_rect() {
    let snapshot: RectSnapshot<u32> = RectSnapshot::new(ViewportSize::new(800.0, 600.0));
    assert_eq!(snapshot.bounding_client_rect(&7), ClientRect::default());
    assert_eq!(snapshot.viewport_size(), ViewportSize::new(800.0, 600.0));
}

#[test]
fn test_from_origin_size_normalizes_negative_extent() {
    let rect = ClientRect::from_origin_size(50.0, 50.0, -20.0, -10.0);
    assert_eq!(rect, ClientRect::new(40.0, 50.0, 50.0, 30.0));
}

#[test]
fn test_rect_deserializes() {
    let json = r#"{ "top": 10, "right": 30, "bottom": 30, "left": 10 }"#;
    let rect: ClientRect = serde_json::from_str(json).unwrap();
    assert_eq!(rect, ClientRect::from_origin_size(10.0, 10.0, 20.0, 20.0));
    assert!(rect.is_finite());
}
