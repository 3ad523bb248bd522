//! PlayerRecord: one entry of the roster.

use serde::{Deserialize, Serialize};

/// A player known to the planner.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Upper-case, unique within the roster.
    pub name: String,
    /// Included in the next draw.
    pub selected: bool,
    /// How many times this player has been drawn so far.
    pub selection_count: u32,
}

impl PlayerRecord {
    /// Create a new, unselected player that has never been drawn.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: false,
            selection_count: 0,
        }
    }

    /// Record that this player was drawn once more.
    pub fn record_drawn(&mut self) {
        self.selection_count += 1;
    }

    /// Lower-cased first character of the name, used as the sort tie-break.
    pub fn sort_initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_lowercase().next())
    }
}
