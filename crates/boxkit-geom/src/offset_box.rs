//! The box value object.

use boxkit_common::Result;
use boxkit_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use crate::{Anchor, Bounds, Corner, Edge, Point};

/// An axis-aligned region described by four offsets from one origin.
///
/// ```text
///   origin ──────────── left ──────── right ──▶ x
///     │                  ┌─────────────┐
///    top ─────────────── │             │
///     │                  │             │
///  bottom ────────────── └─────────────┘
///     ▼ y
/// ```
///
/// Nothing is enforced by construction: `right < left` or `bottom < top`
/// describe an inverted box, whose width or height is negative. Every
/// operation stays well defined for such boxes.
///
/// Transforms take the box by value and return the result, so they chain:
///
/// ```
/// use boxkit_geom::{Corner, OffsetBox};
///
/// let tooltip = OffsetBox::new(0.0, 40.0, 20.0, 0.0)
///     .point_to(Corner::TopLeft, [100.0, 100.0])
///     .grow(4.0);
/// assert_eq!(tooltip, OffsetBox::new(96.0, 144.0, 124.0, 96.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetBox {
    /// Offset of the top edge from the origin.
    pub top: f64,
    /// Offset of the right edge from the origin.
    pub right: f64,
    /// Offset of the bottom edge from the origin.
    pub bottom: f64,
    /// Offset of the left edge from the origin.
    pub left: f64,
}

impl OffsetBox {
    /// Create a box from its four offsets, in `top, right, bottom, left`
    /// order.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Decode a box from a JSON configuration object.
    ///
    /// Each side is optional and defaults to `0`, so `{}` is the zero box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::InvalidConfig`](boxkit_common::BoxError::InvalidConfig)
    /// if the input is not a JSON object with numeric sides.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // ---------------------------------------------------------------------
    // Measurement
    // ---------------------------------------------------------------------

    /// `right - left`. Negative for a horizontally inverted box.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `bottom - top`. Negative for a vertically inverted box.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal center.
    #[must_use]
    pub const fn mid_x(&self) -> f64 {
        self.left + self.width() / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub const fn mid_y(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    /// Whether `other` would fit inside this box if moved there.
    ///
    /// Only dimensions are compared; where the two boxes sit is ignored.
    #[must_use]
    pub const fn can_contain(&self, other: &Self) -> bool {
        self.width() >= other.width() && self.height() >= other.height()
    }

    /// The point at an edge midpoint or corner.
    ///
    /// | Anchor | Point |
    /// |---|---|
    /// | `top` | `[mid_x, top]` |
    /// | `left` | `[left, mid_y]` |
    /// | `bottom` | `[mid_x, bottom]` |
    /// | `right` | `[right, mid_y]` |
    /// | `top left` | `[left, top]` |
    /// | `top right` | `[right, top]` |
    /// | `bottom left` | `[left, bottom]` |
    /// | `bottom right` | `[right, bottom]` |
    #[must_use]
    pub fn point_at(&self, anchor: impl Into<Anchor>) -> Point {
        match anchor.into() {
            Anchor::Edge(Edge::Top) => Point::new(self.mid_x(), self.top),
            Anchor::Edge(Edge::Left) => Point::new(self.left, self.mid_y()),
            Anchor::Edge(Edge::Bottom) => Point::new(self.mid_x(), self.bottom),
            Anchor::Edge(Edge::Right) => Point::new(self.right, self.mid_y()),
            Anchor::Corner(Corner::TopLeft) => Point::new(self.left, self.top),
            Anchor::Corner(Corner::TopRight) => Point::new(self.right, self.top),
            Anchor::Corner(Corner::BottomLeft) => Point::new(self.left, self.bottom),
            Anchor::Corner(Corner::BottomRight) => Point::new(self.right, self.bottom),
        }
    }

    // ---------------------------------------------------------------------
    // Transforms
    // ---------------------------------------------------------------------

    /// Move every side outward by `amount`. A negative amount shrinks.
    #[must_use]
    pub const fn grow(mut self, amount: f64) -> Self {
        self.top -= amount;
        self.left -= amount;
        self.bottom += amount;
        self.right += amount;
        self
    }

    /// Move every side inward by `amount`; the inverse of [`grow`](Self::grow).
    #[must_use]
    pub const fn shrink(mut self, amount: f64) -> Self {
        self.top += amount;
        self.left += amount;
        self.bottom -= amount;
        self.right -= amount;
        self
    }

    /// Shift the whole box by `[dx, dy]`.
    #[must_use]
    pub fn translate(mut self, delta: impl Into<Point>) -> Self {
        let Point { x, y } = delta.into();
        self.top += y;
        self.left += x;
        self.bottom += y;
        self.right += x;
        self
    }

    /// Shift the box so that its point at `anchor` lands on `to`.
    #[must_use]
    pub fn point_to(self, anchor: impl Into<Anchor>, to: impl Into<Point>) -> Self {
        let from = self.point_at(anchor);
        self.translate(to.into() - from)
    }

    /// Slide the box back inside `bounds` without resizing it.
    ///
    /// Sides are corrected one at a time in the order top, left, bottom,
    /// right, and each correction moves the opposite side along with it.
    /// When the box is larger than `bounds` on an axis it cannot satisfy both
    /// sides: the bottom (or right) correction runs last and wins, leaving
    /// the top (or left) outside.
    #[must_use]
    pub fn constrain(mut self, bounds: impl Into<Bounds>) -> Self {
        let bounds = bounds.into();

        let top_shift = self.top.max(bounds.top) - self.top;
        self.top += top_shift;
        self.bottom += top_shift;

        let left_shift = self.left.max(bounds.left) - self.left;
        self.left += left_shift;
        self.right += left_shift;

        let bottom_shift = self.bottom.min(bounds.bottom) - self.bottom;
        self.bottom += bottom_shift;
        self.top += bottom_shift;

        let right_shift = self.right.min(bounds.right) - self.right;
        self.right += right_shift;
        self.left += right_shift;

        if self.top < bounds.top {
            warn_once(
                "Geometry",
                "box taller than constraint region; bottom bound takes precedence over top",
            );
        }
        if self.left < bounds.left {
            warn_once(
                "Geometry",
                "box wider than constraint region; right bound takes precedence over left",
            );
        }

        self
    }

    /// Clip each side to `bounds` independently.
    ///
    /// Unlike [`constrain`](Self::constrain) this changes the dimensions, and
    /// a box lying entirely outside `bounds` comes out inverted.
    #[must_use]
    pub fn crop(mut self, bounds: impl Into<Bounds>) -> Self {
        let bounds = bounds.into();
        self.top = self.top.max(bounds.top);
        self.left = self.left.max(bounds.left);
        self.bottom = self.bottom.min(bounds.bottom);
        self.right = self.right.min(bounds.right);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_box_has_negative_dimensions() {
        let inverted = OffsetBox::new(100.0, 50.0, 50.0, 100.0);
        assert_eq!(inverted.width(), -50.0);
        assert_eq!(inverted.height(), -50.0);
        assert_eq!(inverted.mid_x(), 75.0);
        assert_eq!(inverted.mid_y(), 75.0);
    }

    #[test]
    fn test_crop_outside_inverts() {
        let cropped = OffsetBox::new(0.0, 10.0, 10.0, 0.0).crop(Bounds::new().left(20.0));
        assert_eq!(cropped.left, 20.0);
        assert_eq!(cropped.right, 10.0);
        assert!(cropped.width() < 0.0);
    }
}
