//! Discipline and element-kind enums shared by every layer.

use core::fmt;

/// Discipline of a distribution network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Mechanical,
    Electrical,
    Piping,
}

impl Category {
    /// Branch label used in the combined output document.
    pub fn branch_label(self) -> &'static str {
        match self {
            Category::Mechanical => "Mechanical System",
            Category::Electrical => "Electrical System",
            Category::Piping => "Piping System",
        }
    }

    /// All categories in combined-document branch order.
    pub const ALL: [Category; 3] = [Category::Mechanical, Category::Electrical, Category::Piping];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Mechanical => "mechanical",
            Category::Electrical => "electrical",
            Category::Piping => "piping",
        };
        f.write_str(s)
    }
}

/// Role of a single element inside a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementKind {
    /// Primary equipment (air handler, panel, pump).
    Equipment,
    /// Duct, pipe, or conduit run between fittings.
    Segment,
    /// Fitting where runs branch or merge.
    Junction,
    /// End point of a run (diffuser, fixture, device).
    Terminal,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ElementKind::Equipment => "equipment",
            ElementKind::Segment => "segment",
            ElementKind::Junction => "junction",
            ElementKind::Terminal => "terminal",
        };
        f.write_str(s)
    }
}
