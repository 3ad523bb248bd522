//! Data structures for the court planner: players, the roster, session navigation.

mod player;
mod roster;
mod session;

pub use player::PlayerRecord;
pub use roster::{AddOutcome, RosterStore};
pub use session::{
    CourtDirection, Page, SessionState, DEFAULT_NUMBER_OF_COURTS, PLAYERS_PER_COURT,
};
