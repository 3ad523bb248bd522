//! Display order: most-drawn players first.

use crate::models::{PlayerRecord, RosterStore};

/// Order players by descending selection count.
///
/// Repeatedly takes the best remaining record: a higher count wins; on equal counts the
/// record whose lower-cased first letter sorts earlier wins. Anything still tied keeps
/// its current relative order, so running this twice gives the same result.
pub fn sort_players(mut remaining: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    let mut sorted = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let mut best = 0;
        for (i, p) in remaining.iter().enumerate().skip(1) {
            let cur = &remaining[best];
            if p.selection_count > cur.selection_count
                || (p.selection_count == cur.selection_count
                    && p.sort_initial() < cur.sort_initial())
            {
                best = i;
            }
        }
        sorted.push(remaining.remove(best));
    }
    sorted
}

/// Sort the store in place and return a copy of the new order.
pub fn sort_roster(store: &RosterStore) -> Vec<PlayerRecord> {
    store.reorder(sort_players)
}
