//! Draw engine: spread the selected players over courts at random.

use crate::models::{RosterStore, DEFAULT_NUMBER_OF_COURTS, PLAYERS_PER_COURT};
use rand::Rng;

/// Court count as understood from user input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CourtCount {
    /// A positive integer was given.
    Parsed(usize),
    /// Input was not a positive integer; [`DEFAULT_NUMBER_OF_COURTS`] applies.
    Defaulted,
}

impl CourtCount {
    pub fn get(self) -> usize {
        match self {
            CourtCount::Parsed(n) => n,
            CourtCount::Defaulted => DEFAULT_NUMBER_OF_COURTS,
        }
    }
}

/// Largest court count accepted from user input.
pub const MAX_NUMBER_OF_COURTS: usize = i32::MAX as usize;

/// Parse the number of courts typed by the user. Never fails.
pub fn parse_court_count(input: &str) -> CourtCount {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_NUMBER_OF_COURTS).contains(&n) => CourtCount::Parsed(n),
        _ => CourtCount::Defaulted,
    }
}

/// Draw with the thread-local RNG. See [`draw_courts_with_rng`].
pub fn draw_courts(store: &RosterStore, number_of_courts: usize) -> Vec<String> {
    draw_courts_with_rng(store, number_of_courts, &mut rand::thread_rng())
}

/// Fill `number_of_courts` courts of 4 from the currently selected players.
///
/// Each slot takes a uniformly random player from those not yet drawn, so nobody appears
/// twice. Stops early once the pool is empty. Every drawn player's selection count is
/// incremented in `store`. The result is court-major: court `c` (1-based) is
/// `result[(c-1)*4 .. c*4]`.
pub fn draw_courts_with_rng<R: Rng + ?Sized>(
    store: &RosterStore,
    number_of_courts: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut pool = store.snapshot_selected();
    let capacity = number_of_courts.saturating_mul(PLAYERS_PER_COURT);
    let mut drawn = Vec::with_capacity(capacity.min(pool.len()));

    'courts: for _court in 0..number_of_courts {
        for _slot in 0..PLAYERS_PER_COURT {
            if pool.is_empty() {
                break 'courts;
            }
            let idx = rng.gen_range(0..pool.len());
            let player = pool.swap_remove(idx);
            store.increment_selection_count(&player.name);
            drawn.push(player.name);
        }
    }

    log::info!(
        "Drew {} player(s) onto {} court(s), {} left over",
        drawn.len(),
        number_of_courts,
        pool.len()
    );
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn court_count_parsing() {
        assert_eq!(parse_court_count("3"), CourtCount::Parsed(3));
        assert_eq!(parse_court_count(" 2 "), CourtCount::Parsed(2));
        assert_eq!(parse_court_count("abc").get(), 4);
        assert_eq!(parse_court_count("").get(), 4);
        assert_eq!(parse_court_count("0"), CourtCount::Defaulted);
        assert_eq!(parse_court_count("-1"), CourtCount::Defaulted);
        assert_eq!(parse_court_count("2147483647"), CourtCount::Parsed(2_147_483_647));
        assert_eq!(parse_court_count("2147483648"), CourtCount::Defaulted);
        assert_eq!(parse_court_count("18446744073709551615"), CourtCount::Defaulted);
        assert_eq!(parse_court_count("99999999999999999999999"), CourtCount::Defaulted);
    }

    #[test]
    fn huge_court_count_draws_whole_pool() {
        let store = RosterStore::new();
        for name in ["ANNA", "BEN"] {
            store.add(name);
            store.select(name);
        }
        let drawn = draw_courts(&store, usize::MAX);
        assert_eq!(drawn.len(), 2);
    }
}
