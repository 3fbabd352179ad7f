//! Serialization orientation switch, global per run.

use core::fmt;

/// Which way the per-network JSON hierarchy is oriented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Root first, children nested beneath it.
    #[default]
    TopDown,
    /// Leaf first, each leaf's chain ascending to the root.
    BottomUp,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::TopDown => f.write_str("top_down"),
            Orientation::BottomUp => f.write_str("bottom_up"),
        }
    }
}
