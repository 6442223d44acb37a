use super::state::RenderMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The color assigned to an atom for the current display pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleColor {
    /// The unhighlighted baseline.
    Grey,
    /// Region highlight: the atom shares the selected atom's region.
    Red,
    /// Domain highlight: the atom lies inside a configured domain window.
    Yellow,
}

impl fmt::Display for StyleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleColor::Grey => "grey",
            StyleColor::Red => "red",
            StyleColor::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// The render directive for one atom.
///
/// The serialized field names are what the rendering widget consumes, one
/// entry per atom in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    #[serde(rename = "visualization_type")]
    pub visualization: RenderMode,
    pub color: StyleColor,
}

impl StyleEntry {
    pub fn new(visualization: RenderMode, color: StyleColor) -> Self {
        Self {
            visualization,
            color,
        }
    }
}
