//! SessionState: page, court navigation and the last draw result.

use serde::{Deserialize, Serialize};

/// Courts used when the caller gives no valid court count.
pub const DEFAULT_NUMBER_OF_COURTS: usize = 4;

/// Fixed number of slots per court.
pub const PLAYERS_PER_COURT: usize = 4;

/// Which screen the user is on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Roster listing with selection toggles.
    #[default]
    Main,
    /// Court-by-court view of the last draw.
    Result,
}

/// Step direction when paging through courts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtDirection {
    Previous,
    Next,
}

/// Navigation state plus the flattened result of the last draw.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub page: Page,
    /// 1-based, always within `1..=number_of_courts`.
    pub court_index: usize,
    pub number_of_courts: usize,
    /// Court-major: court `c` (1-based) occupies `(c-1)*4 .. c*4`.
    pub drawn_players: Vec<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            page: Page::Main,
            court_index: 1,
            number_of_courts: DEFAULT_NUMBER_OF_COURTS,
            drawn_players: Vec::new(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new draw result and jump back to the first court.
    pub fn set_draw(&mut self, number_of_courts: usize, drawn_players: Vec<String>) {
        self.number_of_courts = number_of_courts.max(1);
        self.drawn_players = drawn_players;
        self.court_index = 1;
    }

    /// Move one court back or forward, wrapping at both ends.
    pub fn step_court(&mut self, direction: CourtDirection) {
        let count = self.number_of_courts.max(1);
        self.court_index = match direction {
            CourtDirection::Previous if self.court_index <= 1 => count,
            CourtDirection::Previous => self.court_index - 1,
            CourtDirection::Next if self.court_index >= count => 1,
            CourtDirection::Next => self.court_index + 1,
        };
    }

    /// Offset of the current court's first slot in `drawn_players`.
    ///
    /// Scales by the per-court slot count; `number_of_courts * (court_index - 1)` would
    /// only land on the right court when there are exactly 4 courts.
    pub fn court_offset(&self) -> usize {
        PLAYERS_PER_COURT.saturating_mul(self.court_index.max(1) - 1)
    }

    /// The four names on the current court; unfilled slots are empty strings.
    pub fn court_players(&self) -> [String; PLAYERS_PER_COURT] {
        let start = self.court_offset();
        std::array::from_fn(|i| {
            self.drawn_players
                .get(start.saturating_add(i))
                .cloned()
                .unwrap_or_default()
        })
    }

    /// Label shown above the court view, e.g. `Field: 2/4`.
    pub fn court_label(&self) -> String {
        format!("Field: {}/{}", self.court_index, self.number_of_courts)
    }
}
