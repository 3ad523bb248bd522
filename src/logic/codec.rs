//! Flat string format for persisting the roster.
//!
//! Each player is written as `NAME_COUNT_SELECTED` followed by `|`, e.g. `ALICE_3_true|`.
//! Names are not escaped: a name containing `_` or `|` will not survive a round trip.

use crate::models::{PlayerRecord, RosterStore};

/// Separates the fields of one record.
pub const FIELD_SEPARATOR: char = '_';

/// Terminates each record.
pub const RECORD_SEPARATOR: char = '|';

/// Why a persisted record was dropped while decoding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordError {
    /// The record did not split into exactly name, count and selected.
    WrongFieldCount(usize),
    /// The name field was empty.
    EmptyName,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::WrongFieldCount(n) => write!(f, "expected 3 fields, found {}", n),
            RecordError::EmptyName => write!(f, "record has an empty name"),
        }
    }
}

/// Everything [`decode_players`] learned from a persisted string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DecodeReport {
    /// Accepted records, in persisted order.
    pub players: Vec<PlayerRecord>,
    /// Index (among non-empty records) and reason of every dropped record.
    pub dropped: Vec<(usize, RecordError)>,
    /// Records whose count was not a valid integer and was read as 0.
    pub defaulted_counts: usize,
}

/// True when `name` contains a character reserved by the format.
pub fn has_reserved_chars(name: &str) -> bool {
    name.contains(FIELD_SEPARATOR) || name.contains(RECORD_SEPARATOR)
}

/// Encode records in the given order. An empty slice gives an empty string.
pub fn encode_players(players: &[PlayerRecord]) -> String {
    let mut out = String::new();
    for p in players {
        out.push_str(&p.name);
        out.push(FIELD_SEPARATOR);
        out.push_str(&p.selection_count.to_string());
        out.push(FIELD_SEPARATOR);
        out.push_str(if p.selected { "true" } else { "false" });
        out.push(RECORD_SEPARATOR);
    }
    out
}

/// Encode the whole store in its current order.
pub fn encode(store: &RosterStore) -> String {
    store.read(encode_players)
}

/// Parse one record. `Ok((player, count_was_valid))`.
fn decode_record(record: &str) -> Result<(PlayerRecord, bool), RecordError> {
    let mut fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    // Trailing empty fields do not count: `A_1_` has two fields, not three.
    while fields.last() == Some(&"") {
        fields.pop();
    }
    let [name, count, selected] = fields.as_slice() else {
        return Err(RecordError::WrongFieldCount(fields.len()));
    };
    if name.is_empty() {
        return Err(RecordError::EmptyName);
    }
    let parsed = count.parse::<u32>().ok();
    let player = PlayerRecord {
        name: name.to_string(),
        selection_count: parsed.unwrap_or(0),
        selected: selected.eq_ignore_ascii_case("true"),
    };
    Ok((player, parsed.is_some()))
}

/// Decode a persisted string. Malformed records are skipped, never fatal.
pub fn decode_players(data: &str) -> DecodeReport {
    let mut report = DecodeReport::default();
    for (idx, record) in data
        .split(RECORD_SEPARATOR)
        .filter(|r| !r.is_empty())
        .enumerate()
    {
        match decode_record(record) {
            Ok((player, count_ok)) => {
                if !count_ok {
                    report.defaulted_counts += 1;
                }
                report.players.push(player);
            }
            Err(e) => {
                log::warn!("Dropping persisted record {} ({:?}): {}", idx, record, e);
                report.dropped.push((idx, e));
            }
        }
    }
    report
}

/// Decode `data` and replace the store's entire contents with the result.
pub fn decode_into(store: &RosterStore, data: &str) -> DecodeReport {
    let report = decode_players(data);
    store.replace_all(report.players.clone());
    report
}
