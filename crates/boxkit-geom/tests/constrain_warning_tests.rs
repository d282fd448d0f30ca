//! Oversized boxes are flagged when `constrain` cannot satisfy both sides.

use boxkit_common::warning::warned;
use boxkit_geom::{Bounds, OffsetBox};

const TALLER: &str = "box taller than constraint region; bottom bound takes precedence over top";
const WIDER: &str = "box wider than constraint region; right bound takes precedence over left";

#[test]
fn test_oversized_box_warns() {
    let tall = OffsetBox::new(0.0, 10.0, 100.0, 0.0);
    let b = tall.constrain(Bounds::new().top(0.0).bottom(50.0));
    assert_eq!(b.top, -50.0);
    assert!(warned("Geometry", TALLER));

    let wide = OffsetBox::new(0.0, 100.0, 10.0, 0.0);
    let b = wide.constrain(Bounds::new().left(0.0).right(50.0));
    assert_eq!(b.left, -50.0);
    assert!(warned("Geometry", WIDER));
}
