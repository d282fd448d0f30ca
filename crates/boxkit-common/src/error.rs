//! Error type shared by the boxkit crates.

use thiserror::Error;

/// Errors raised at the textual and configuration boundaries.
///
/// Geometry itself never fails: every operation is plain float arithmetic,
/// and inverted boxes propagate instead of erroring.
#[derive(Debug, Error)]
pub enum BoxError {
    /// A textual edge/corner label outside the eight known designators.
    #[error("unknown edge or corner designator '{0}'")]
    UnknownAnchor(String),

    /// A configuration object that could not be decoded.
    #[error("invalid box configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Convenience alias for results carrying a [`BoxError`].
pub type Result<T> = std::result::Result<T, BoxError>;
