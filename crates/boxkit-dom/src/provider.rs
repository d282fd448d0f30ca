//! The host capability consulted by [`from_element`](crate::from_element).

use serde::{Deserialize, Serialize};

/// [§ 6.1 `getBoundingClientRect()`](https://drafts.csswg.org/cssom-view/#dom-element-getboundingclientrect)
///
/// "The `getBoundingClientRect()` method, when invoked on an element element,
/// must return the result of getting the bounding box for element."
///
/// Unlike `DOMRect`, the sides are stored directly; all four are offsets
/// from the viewport origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    /// Offset of the top edge.
    pub top: f64,
    /// Offset of the right edge.
    pub right: f64,
    /// Offset of the bottom edge.
    pub bottom: f64,
    /// Offset of the left edge.
    pub left: f64,
}

impl ClientRect {
    /// Create a rectangle from its sides.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// [§ 2.1 `DOMRect`](https://drafts.fxtf.org/geometry/#DOMRect)
    ///
    /// Build from the `x`, `y`, `width`, `height` form. The sides are
    /// "min(x coordinate, x coordinate + width dimension)" and so on, so a
    /// negative width still yields `left <= right`.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y.min(y + height),
            right: x.max(x + width),
            bottom: y.max(y + height),
            left: x.min(x + width),
        }
    }

    /// Whether every side is a finite number.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
    }
}

/// [§ 4 Extensions to the Window Interface](https://drafts.csswg.org/cssom-view/#extensions-to-the-window-interface)
///
/// "The `innerWidth` attribute must return the viewport width including the
/// size of a rendered scroll bar (if any)". Likewise for `innerHeight`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    /// `innerWidth`
    pub width: f64,
    /// `innerHeight`
    pub height: f64,
}

impl ViewportSize {
    /// Create a viewport size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Reads on-screen geometry from whatever renders the elements.
///
/// Implementations answer every call from current state; callers never
/// cache what they get back.
pub trait BoundingRectProvider {
    /// Handle identifying an element.
    type Element: ?Sized;

    /// The element's border box relative to the viewport, as the host
    /// reports it.
    fn bounding_client_rect(&self, element: &Self::Element) -> ClientRect;

    /// Current viewport dimensions.
    fn viewport_size(&self) -> ViewportSize;
}

impl<P: BoundingRectProvider + ?Sized> BoundingRectProvider for &P {
    type Element = P::Element;

    fn bounding_client_rect(&self, element: &Self::Element) -> ClientRect {
        (**self).bounding_client_rect(element)
    }

    fn viewport_size(&self) -> ViewportSize {
        (**self).viewport_size()
    }
}

/// What to build a box from: the viewport itself or one element.
#[derive(Debug)]
pub enum Target<'a, E: ?Sized> {
    /// The whole viewport, anchored at the origin.
    Viewport,
    /// A single element.
    Element(&'a E),
}

impl<E: ?Sized> Clone for Target<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Target<'_, E> {}
