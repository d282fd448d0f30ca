//! Edge and corner designators.
//!
//! Eight fixed labels address points on a box: the midpoints of the four
//! edges and the four corners. Their textual forms (`"top"`,
//! `"bottom left"`, ...) are what positioning options are written in.

use std::fmt;
use std::str::FromStr;

use boxkit_common::BoxError;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The midpoint of one of the four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Edge {
    /// Horizontal center of the top edge.
    Top,
    /// Vertical center of the left edge.
    Left,
    /// Horizontal center of the bottom edge.
    Bottom,
    /// Vertical center of the right edge.
    Right,
}

/// One of the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Corner {
    /// `[left, top]`
    #[strum(to_string = "top left")]
    TopLeft,
    /// `[right, top]`
    #[strum(to_string = "top right")]
    TopRight,
    /// `[left, bottom]`
    #[strum(to_string = "bottom left")]
    BottomLeft,
    /// `[right, bottom]`
    #[strum(to_string = "bottom right")]
    BottomRight,
}

/// Any of the eight designators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// An edge midpoint.
    Edge(Edge),
    /// A corner.
    Corner(Corner),
}

impl Anchor {
    /// All eight designators, edges first.
    pub const ALL: [Self; 8] = [
        Self::Edge(Edge::Top),
        Self::Edge(Edge::Left),
        Self::Edge(Edge::Bottom),
        Self::Edge(Edge::Right),
        Self::Corner(Corner::TopLeft),
        Self::Corner(Corner::TopRight),
        Self::Corner(Corner::BottomLeft),
        Self::Corner(Corner::BottomRight),
    ];

    /// Iterate over [`Anchor::ALL`].
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// The textual label, e.g. `"bottom right"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edge(edge) => edge.into(),
            Self::Corner(corner) => corner.into(),
        }
    }
}

impl From<Edge> for Anchor {
    fn from(edge: Edge) -> Self {
        Self::Edge(edge)
    }
}

impl From<Corner> for Anchor {
    fn from(corner: Corner) -> Self {
        Self::Corner(corner)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Anchor {
    type Err = BoxError;

    /// Parse one of the eight labels. Anything else is rejected rather than
    /// mapped to a nearby designator.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if let Ok(edge) = label.parse::<Edge>() {
            return Ok(Self::Edge(edge));
        }
        label
            .parse::<Corner>()
            .map(Self::Corner)
            .map_err(|_| BoxError::UnknownAnchor(label.to_string()))
    }
}
