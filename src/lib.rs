//! Court planner: player roster, randomized court draws and roster persistence.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    decode_players, draw_courts, draw_courts_with_rng, encode_players, filter_players,
    normalize_name, parse_court_count, sort_players, sort_roster, ActionReply, CourtCount,
    CourtPlanner, DecodeReport, DrawSummary, RecordError, ViewState, MAX_NUMBER_OF_COURTS,
};
pub use models::{
    AddOutcome, CourtDirection, Page, PlayerRecord, RosterStore, SessionState,
    DEFAULT_NUMBER_OF_COURTS, PLAYERS_PER_COURT,
};
pub use storage::{
    JsonFileStore, KeyValueStore, MemoryStore, StoreError, EMPTY_SENTINEL, PERSISTENCE_KEY,
};
