//! An in-memory [`BoundingRectProvider`].
//!
//! Useful when element geometry has already been measured elsewhere (for
//! example, dumped from a layout pass) and positioning math runs later.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::provider::{BoundingRectProvider, ClientRect, ViewportSize};

/// Precomputed element rectangles keyed by `K`, plus a viewport size.
#[derive(Debug, Clone, Default)]
pub struct RectSnapshot<K> {
    viewport: ViewportSize,
    rects: HashMap<K, ClientRect>,
}

impl<K: Eq + Hash> RectSnapshot<K> {
    /// An empty snapshot of a viewport.
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            rects: HashMap::new(),
        }
    }

    /// Record an element's rectangle, returning the one it replaces.
    pub fn insert(&mut self, key: K, rect: ClientRect) -> Option<ClientRect> {
        self.rects.insert(key, rect)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_rect(mut self, key: K, rect: ClientRect) -> Self {
        let _ = self.rects.insert(key, rect);
        self
    }

    /// Forget an element.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<ClientRect>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rects.remove(key)
    }

    /// Replace the viewport size, e.g. after a resize.
    pub const fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    /// Number of recorded elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no elements are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl<K: Eq + Hash> BoundingRectProvider for RectSnapshot<K> {
    type Element = K;

    /// Unknown elements report an all-zero rectangle, the same thing a
    /// browser reports for an element that is not being rendered.
    fn bounding_client_rect(&self, element: &K) -> ClientRect {
        self.rects.get(element).copied().unwrap_or_default()
    }

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }
}
