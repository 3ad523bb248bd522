//! RosterStore: the lock-guarded collection of players.

use crate::models::player::PlayerRecord;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Result of [`RosterStore::add`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    /// A player with this name already exists; the roster is unchanged.
    Duplicate,
    /// The name was empty after trimming.
    EmptyName,
}

/// Owns every [`PlayerRecord`]. All reads and writes go through a single mutex, so each
/// method is atomic relative to the others. Readers get copies, never references.
#[derive(Debug, Default)]
pub struct RosterStore {
    players: Mutex<Vec<PlayerRecord>>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `players` in the given order.
    pub fn with_players(players: Vec<PlayerRecord>) -> Self {
        Self {
            players: Mutex::new(players),
        }
    }

    // Mutations never leave a partial roster behind, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<PlayerRecord>> {
        self.players.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a new player unless the name is already present (exact match).
    pub fn add(&self, name: &str) -> AddOutcome {
        if name.is_empty() {
            return AddOutcome::EmptyName;
        }
        let mut players = self.lock();
        if players.iter().any(|p| p.name == name) {
            return AddOutcome::Duplicate;
        }
        players.push(PlayerRecord::new(name));
        AddOutcome::Added
    }

    /// Remove every record named `name`. Returns how many were removed.
    pub fn remove(&self, name: &str) -> usize {
        let mut players = self.lock();
        let before = players.len();
        players.retain(|p| p.name != name);
        before - players.len()
    }

    /// Copy of the first record named `name`.
    pub fn find(&self, name: &str) -> Option<PlayerRecord> {
        self.lock().iter().find(|p| p.name == name).cloned()
    }

    /// Mark `name` for the next draw. Returns false if no such player exists.
    pub fn select(&self, name: &str) -> bool {
        self.set_selected(name, true)
    }

    /// Exclude `name` from the next draw. Returns false if no such player exists.
    pub fn deselect(&self, name: &str) -> bool {
        self.set_selected(name, false)
    }

    fn set_selected(&self, name: &str, selected: bool) -> bool {
        match self.lock().iter_mut().find(|p| p.name == name) {
            Some(p) => {
                p.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Flip the selection of `name` in one locked step. Returns the new state.
    pub fn toggle(&self, name: &str) -> Option<bool> {
        let mut players = self.lock();
        let p = players.iter_mut().find(|p| p.name == name)?;
        p.selected = !p.selected;
        Some(p.selected)
    }

    /// Add one to the selection count of `name`. Returns false if no such player exists.
    pub fn increment_selection_count(&self, name: &str) -> bool {
        match self.lock().iter_mut().find(|p| p.name == name) {
            Some(p) => {
                p.record_drawn();
                true
            }
            None => false,
        }
    }

    pub fn snapshot_all(&self) -> Vec<PlayerRecord> {
        self.lock().clone()
    }

    pub fn snapshot_selected(&self) -> Vec<PlayerRecord> {
        self.lock().iter().filter(|p| p.selected).cloned().collect()
    }

    pub fn count_selected(&self) -> usize {
        self.lock().iter().filter(|p| p.selected).count()
    }

    pub fn size(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Replace the whole roster (used when loading persisted state).
    pub fn replace_all(&self, players: Vec<PlayerRecord>) {
        *self.lock() = players;
    }

    /// Re-order the roster under the lock. `order` receives the current records and must
    /// return the new sequence; the result becomes the canonical order and a copy of it
    /// is returned.
    pub fn reorder<F>(&self, order: F) -> Vec<PlayerRecord>
    where
        F: FnOnce(Vec<PlayerRecord>) -> Vec<PlayerRecord>,
    {
        let mut players = self.lock();
        let reordered = order(players.clone());
        *players = reordered;
        players.clone()
    }

    /// Run `f` over the records without copying them, still under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&[PlayerRecord]) -> R) -> R {
        f(&self.lock())
    }
}
