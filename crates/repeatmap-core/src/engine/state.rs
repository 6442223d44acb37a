use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The global rendering representation the viewer displays.
///
/// Render mode is a viewer-wide setting: style resolution applies the same
/// mode to every atom of the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Stick,
    #[default]
    Cartoon,
    Sphere,
}

impl FromStr for RenderMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stick" => Ok(RenderMode::Stick),
            "cartoon" => Ok(RenderMode::Cartoon),
            "sphere" => Ok(RenderMode::Sphere),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderMode::Stick => "stick",
            RenderMode::Cartoon => "cartoon",
            RenderMode::Sphere => "sphere",
        };
        f.write_str(name)
    }
}

/// A snapshot of the transient, user-controlled viewer state.
///
/// Owned and mutated by the UI layer; the engine only ever reads a snapshot.
/// Each interaction change produces a new snapshot and a full recomputation
/// of the style array, with no caching across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// The currently selected atom (positional index into the structure
    /// table), or `None` when nothing is selected.
    pub selection: Option<usize>,
    /// Whether domain windows are highlighted while a selection exists.
    pub domain_highlight: bool,
    /// The viewer-wide rendering representation.
    pub mode: RenderMode,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reduces a selection history to the atom it designates.
///
/// UI layers report selections as an ordered list of previously-selected
/// atom indices; only the most recent entry is semantically meaningful, and
/// an empty list means no selection.
pub fn latest_selection(history: &[usize]) -> Option<usize> {
    history.last().copied()
}
