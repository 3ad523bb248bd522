//! Planner logic: persistence codec, display order, draws and the action surface.

mod actions;
pub mod codec;
mod draw;
mod sort;

pub use actions::{filter_players, normalize_name, ActionReply, CourtPlanner, DrawSummary, ViewState};
pub use codec::{decode_players, encode_players, DecodeReport, RecordError};
pub use draw::{
    draw_courts, draw_courts_with_rng, parse_court_count, CourtCount, MAX_NUMBER_OF_COURTS,
};
pub use sort::{sort_players, sort_roster};
