//! Offset-based box geometry.
//!
//! An [`OffsetBox`] is an axis-aligned region described by four offsets
//! from a shared origin. Unlike CSS `bottom`/`right`, all four offsets are
//! measured from the same origin, so `right - left` is the width.
//!
//! # Module Structure
//!
//! - [`offset_box`] - The box value object and its operations
//! - [`anchor`] - Edge and corner designators
//! - [`bounds`] - Bounding regions for `constrain` and `crop`
//! - [`point`] - Coordinate pairs and translation vectors

pub mod anchor;
pub mod bounds;
pub mod offset_box;
pub mod point;

// Re-exports for convenience
pub use anchor::{Anchor, Corner, Edge};
pub use bounds::Bounds;
pub use offset_box::OffsetBox;
pub use point::Point;
