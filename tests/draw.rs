//! Integration tests for court draws. Draws are random, so only properties are checked.

use court_planner::{draw_courts, draw_courts_with_rng, RosterStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn store_with_selected(selected: usize, unselected: usize) -> RosterStore {
    let store = RosterStore::new();
    for i in 0..selected {
        let name = format!("S{i}");
        store.add(&name);
        store.select(&name);
    }
    for i in 0..unselected {
        store.add(&format!("U{i}"));
    }
    store
}

fn assert_distinct(drawn: &[String]) {
    let unique: HashSet<_> = drawn.iter().collect();
    assert_eq!(unique.len(), drawn.len(), "player drawn twice: {drawn:?}");
}

#[test]
fn everyone_drawn_once_when_courts_have_room() {
    let store = store_with_selected(7, 3);
    let drawn = draw_courts(&store, 2);

    assert_eq!(drawn.len(), 7);
    assert_distinct(&drawn);
    for p in store.snapshot_all() {
        let expected = u32::from(p.selected);
        assert_eq!(p.selection_count, expected, "{}", p.name);
        assert_eq!(drawn.contains(&p.name), p.selected);
    }
}

#[test]
fn draw_stops_at_court_capacity() {
    let store = store_with_selected(9, 0);
    let drawn = draw_courts(&store, 2);

    assert_eq!(drawn.len(), 8);
    assert_distinct(&drawn);
    let counted: u32 = store.snapshot_all().iter().map(|p| p.selection_count).sum();
    assert_eq!(counted, 8);
    for p in store.snapshot_all() {
        assert_eq!(p.selection_count, u32::from(drawn.contains(&p.name)));
    }
}

#[test]
fn last_court_may_be_partial() {
    let store = store_with_selected(6, 0);
    let drawn = draw_courts(&store, 3);
    assert_eq!(drawn.len(), 6);
    assert_distinct(&drawn);
}

#[test]
fn nothing_selected_draws_nothing() {
    let store = store_with_selected(0, 5);
    assert!(draw_courts(&store, 4).is_empty());
    assert!(store.snapshot_all().iter().all(|p| p.selection_count == 0));
}

#[test]
fn repeated_draws_accumulate_counts() {
    let store = store_with_selected(4, 0);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..3 {
        assert_eq!(draw_courts_with_rng(&store, 1, &mut rng).len(), 4);
    }
    assert!(store.snapshot_all().iter().all(|p| p.selection_count == 3));
}

#[test]
fn every_player_can_land_on_first_court() {
    let store = store_with_selected(8, 0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen_first = HashSet::new();
    for _ in 0..200 {
        let drawn = draw_courts_with_rng(&store, 1, &mut rng);
        assert_eq!(drawn.len(), 4);
        assert_distinct(&drawn);
        seen_first.insert(drawn[0].clone());
    }
    assert_eq!(seen_first.len(), 8);
}
