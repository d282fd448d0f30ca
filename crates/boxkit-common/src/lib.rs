//! Common utilities for boxkit.
//!
//! This crate provides shared infrastructure used by the geometry and
//! element crates:
//! - **Errors** - the [`BoxError`] type returned by fallible entry points
//! - **Warning System** - colored, deduplicated terminal output

pub mod error;
pub mod warning;

pub use error::{BoxError, Result};
