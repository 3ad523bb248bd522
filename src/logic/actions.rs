//! The planner's action surface: every user action is a synchronous call that returns the
//! updated view. Roster mutations are persisted through a [`KeyValueStore`].

use crate::logic::codec;
use crate::logic::draw::{self, CourtCount};
use crate::logic::sort::sort_roster;
use crate::models::{
    AddOutcome, CourtDirection, Page, PlayerRecord, RosterStore, SessionState, PLAYERS_PER_COURT,
};
use crate::storage::{KeyValueStore, StoreError, EMPTY_SENTINEL, PERSISTENCE_KEY};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What the UI needs to render after any action.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ViewState {
    pub page: Page,
    pub selected_count: usize,
    pub roster_size: usize,
    /// e.g. `Selected Players: 3/10`
    pub selected_label: String,
    pub court_index: usize,
    pub number_of_courts: usize,
    /// e.g. `Field: 1/4`
    pub court_label: String,
    /// Names on the current court; empty strings for unfilled slots.
    pub court_players: [String; PLAYERS_PER_COURT],
    /// Roster in display order, filtered by the query if one was given.
    pub players: Vec<PlayerRecord>,
}

/// Outcome of an action together with the resulting view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ActionReply<T> {
    pub outcome: T,
    pub view: ViewState,
}

/// Summary of one draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DrawSummary {
    pub number_of_courts: usize,
    /// True when the court count fell back to the default.
    pub courts_defaulted: bool,
    pub drawn: usize,
}

/// Roster plus session, persisted to `S` under [`PERSISTENCE_KEY`].
#[derive(Debug)]
pub struct CourtPlanner<S> {
    roster: RosterStore,
    session: Mutex<SessionState>,
    store: S,
    // Held across encode and write so saves land in the order they were encoded.
    persist_lock: Mutex<()>,
}

/// Keep only players whose name contains the upper-cased `query`.
pub fn filter_players(players: Vec<PlayerRecord>, query: &str) -> Vec<PlayerRecord> {
    let needle = query.trim().to_uppercase();
    if needle.is_empty() {
        return players;
    }
    players
        .into_iter()
        .filter(|p| p.name.contains(&needle))
        .collect()
}

/// Trim and upper-case a typed name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

impl<S: KeyValueStore> CourtPlanner<S> {
    /// Build a planner from whatever `store` holds. A missing value or [`EMPTY_SENTINEL`]
    /// means nothing was ever saved and the roster starts empty.
    pub fn load(store: S) -> Self {
        let planner = Self {
            roster: RosterStore::new(),
            session: Mutex::new(SessionState::new()),
            store,
            persist_lock: Mutex::new(()),
        };
        match planner.store.get_string(PERSISTENCE_KEY) {
            Some(data) if data != EMPTY_SENTINEL => {
                let report = codec::decode_into(&planner.roster, &data);
                log::info!(
                    "Loaded {} player(s), dropped {} malformed record(s)",
                    report.players.len(),
                    report.dropped.len()
                );
            }
            _ => log::info!("No saved roster, starting empty"),
        }
        planner
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Copy of the current session.
    pub fn session(&self) -> SessionState {
        self.lock_session().clone()
    }

    fn lock_session(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the encoded roster to the store.
    pub fn persist(&self) -> Result<(), StoreError> {
        let _guard = self.persist_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let data = codec::encode(&self.roster);
        self.store.set_string(PERSISTENCE_KEY, &data)
    }

    // Actions still succeed when the write fails; at most this one change is lost.
    fn persist_or_warn(&self) {
        if let Err(e) = self.persist() {
            log::warn!("Failed to persist roster: {}", e);
        }
    }

    /// Current view with the full roster.
    pub fn view(&self) -> ViewState {
        self.view_filtered("")
    }

    /// Current view with the roster filtered by `query`.
    pub fn view_filtered(&self, query: &str) -> ViewState {
        let session = self.session();
        let players = filter_players(sort_roster(&self.roster), query);
        let (selected_count, roster_size) = self
            .roster
            .read(|all| (all.iter().filter(|p| p.selected).count(), all.len()));
        ViewState {
            page: session.page,
            selected_count,
            roster_size,
            selected_label: format!("Selected Players: {}/{}", selected_count, roster_size),
            court_index: session.court_index,
            number_of_courts: session.number_of_courts,
            court_label: session.court_label(),
            court_players: session.court_players(),
            players,
        }
    }

    /// Add a player. The name is trimmed and upper-cased; duplicates are ignored.
    pub fn add_player(&self, name: &str) -> ActionReply<AddOutcome> {
        let name = normalize_name(name);
        if codec::has_reserved_chars(&name) {
            log::warn!(
                "Player name {:?} contains '{}' or '{}' and will not reload correctly",
                name,
                codec::FIELD_SEPARATOR,
                codec::RECORD_SEPARATOR
            );
        }
        let outcome = self.roster.add(&name);
        log::debug!("add_player {:?}: {:?}", name, outcome);
        self.persist_or_warn();
        ActionReply {
            outcome,
            view: self.view(),
        }
    }

    /// Remove a player by exact name. Outcome is the number of records removed.
    pub fn remove_player(&self, name: &str) -> ActionReply<usize> {
        let removed = self.roster.remove(name);
        log::debug!("remove_player {:?}: removed {}", name, removed);
        self.persist_or_warn();
        ActionReply {
            outcome: removed,
            view: self.view(),
        }
    }

    /// Flip a player's selection. Outcome is the new state, `None` for an unknown name.
    pub fn toggle_select(&self, name: &str) -> ActionReply<Option<bool>> {
        let selected = self.roster.toggle(name);
        log::debug!("toggle_select {:?}: {:?}", name, selected);
        ActionReply {
            outcome: selected,
            view: self.view(),
        }
    }

    /// Draw courts from the selected players. `courts` is the raw user input; anything that
    /// is not a positive integer means 4 courts. Switches to the result page on court 1.
    pub fn draw(&self, courts: &str) -> ActionReply<DrawSummary> {
        let count = draw::parse_court_count(courts);
        self.draw_with_count(count)
    }

    /// Same as [`CourtPlanner::draw`] with an already parsed count.
    pub fn draw_with_count(&self, count: CourtCount) -> ActionReply<DrawSummary> {
        let number_of_courts = count.get();
        let summary = {
            // Held across the draw so two draws cannot interleave their results.
            let mut session = self.lock_session();
            let drawn = draw::draw_courts(&self.roster, number_of_courts);
            let summary = DrawSummary {
                number_of_courts,
                courts_defaulted: count == CourtCount::Defaulted,
                drawn: drawn.len(),
            };
            session.set_draw(number_of_courts, drawn);
            session.page = Page::Result;
            summary
        };
        self.persist_or_warn();
        ActionReply {
            outcome: summary,
            view: self.view(),
        }
    }

    pub fn navigate_page(&self, page: Page) -> ViewState {
        self.lock_session().page = page;
        self.view()
    }

    pub fn navigate_court(&self, direction: CourtDirection) -> ViewState {
        self.lock_session().step_court(direction);
        self.view()
    }
}
