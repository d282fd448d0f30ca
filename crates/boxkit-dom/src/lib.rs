//! Element and viewport integration for boxkit.
//!
//! The geometry in `boxkit-geom` never talks to a host directly. Whatever
//! renders elements (a browser binding, a layout engine, a test fixture)
//! implements [`BoundingRectProvider`], and [`from_element`] turns what it
//! reports into an [`OffsetBox`](boxkit_geom::OffsetBox).
//!
//! # Relevant Specifications
//!
//! - [CSSOM View Module](https://drafts.csswg.org/cssom-view/)
//!
//! # Module Structure
//!
//! - [`provider`] - The host capability and the rectangles it reports
//! - [`factory`] - Building boxes from elements or the viewport
//! - [`snapshot`] - An in-memory provider over precomputed rectangles

pub mod factory;
pub mod provider;
pub mod snapshot;

// Re-exports for convenience
pub use factory::from_element;
pub use provider::{BoundingRectProvider, ClientRect, Target, ViewportSize};
pub use snapshot::RectSnapshot;
