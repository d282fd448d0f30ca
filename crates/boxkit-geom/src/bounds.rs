//! Bounding regions for [`OffsetBox::constrain`] and [`OffsetBox::crop`].

use boxkit_common::Result;
use serde::Deserialize;

use crate::OffsetBox;

/// A region to keep a box inside of.
///
/// Every side is optional: an absent side is unbounded, so `top` and `left`
/// default to negative infinity and `bottom` and `right` to positive
/// infinity.
///
/// ```
/// use boxkit_geom::Bounds;
///
/// let bounds = Bounds::new().top(70.0);
/// assert_eq!(bounds.top, 70.0);
/// assert_eq!(bounds.bottom, f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Smallest allowed top offset.
    pub top: f64,
    /// Largest allowed right offset.
    pub right: f64,
    /// Largest allowed bottom offset.
    pub bottom: f64,
    /// Smallest allowed left offset.
    pub left: f64,
}

impl Bounds {
    /// Bounds that restrict nothing.
    pub const UNBOUNDED: Self = Self {
        top: f64::NEG_INFINITY,
        right: f64::INFINITY,
        bottom: f64::INFINITY,
        left: f64::NEG_INFINITY,
    };

    /// Start from [`Bounds::UNBOUNDED`].
    #[must_use]
    pub const fn new() -> Self {
        Self::UNBOUNDED
    }

    /// Set the top bound.
    #[must_use]
    pub const fn top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Set the right bound.
    #[must_use]
    pub const fn right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }

    /// Set the bottom bound.
    #[must_use]
    pub const fn bottom(mut self, bottom: f64) -> Self {
        self.bottom = bottom;
        self
    }

    /// Set the left bound.
    #[must_use]
    pub const fn left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    /// Decode bounds from a JSON object such as `{"top": 70}`.
    ///
    /// Infinite bounds cannot be written in JSON, so they are expressed by
    /// leaving the side out.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::InvalidConfig`](boxkit_common::BoxError::InvalidConfig)
    /// if the input is not a JSON object with numeric sides.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<OffsetBox> for Bounds {
    fn from(region: OffsetBox) -> Self {
        Self {
            top: region.top,
            right: region.right,
            bottom: region.bottom,
            left: region.left,
        }
    }
}
