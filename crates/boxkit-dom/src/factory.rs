//! Building boxes from elements or the viewport.

use boxkit_common::warning::warn_once;
use boxkit_geom::OffsetBox;

use crate::provider::{BoundingRectProvider, ClientRect, Target};

impl From<ClientRect> for OffsetBox {
    fn from(rect: ClientRect) -> Self {
        Self::new(rect.top, rect.right, rect.bottom, rect.left)
    }
}

/// Build a box covering `target`.
///
/// - [`Target::Viewport`] gives `top = 0`, `left = 0`,
///   `bottom = innerHeight`, `right = innerWidth`.
/// - [`Target::Element`] takes the provider's bounding rectangle verbatim;
///   no scroll offset or transform is applied on top of it.
///
/// The provider is queried on every call.
///
/// ```
/// use boxkit_dom::{from_element, ClientRect, RectSnapshot, Target, ViewportSize};
///
/// let snapshot = RectSnapshot::new(ViewportSize::new(1024.0, 768.0))
///     .with_rect("button", ClientRect::new(10.0, 30.0, 30.0, 10.0));
///
/// let viewport = from_element(&snapshot, Target::Viewport);
/// assert_eq!(viewport.width(), 1024.0);
///
/// let button = from_element(&snapshot, Target::Element(&"button"));
/// assert_eq!(button.height(), 20.0);
/// ```
pub fn from_element<P>(provider: &P, target: Target<'_, P::Element>) -> OffsetBox
where
    P: BoundingRectProvider + ?Sized,
{
    match target {
        Target::Viewport => {
            let viewport = provider.viewport_size();
            OffsetBox::new(0.0, viewport.width, viewport.height, 0.0)
        }
        Target::Element(element) => {
            let rect = provider.bounding_client_rect(element);
            if !rect.is_finite() {
                warn_once(
                    "Element",
                    "bounding rect has a non-finite side; using it as reported",
                );
            }
            rect.into()
        }
    }
}
