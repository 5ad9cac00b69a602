//! Integration test: leaderboard ledger
//!
//! Ranking, capping, per-game views, high scores and clearing, exercised
//! through the public `Arcade` API over an in-memory medium.

use neon_arcade::{Arcade, Difficulty, GameKind, MemoryStore, StorageMedium};
use std::collections::HashSet;

fn arcade() -> Arcade<MemoryStore> {
    Arcade::with_store(MemoryStore::new())
}

/// Small deterministic pseudo-random sequence for score streams.
fn scores(seed: u64, count: usize) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) % 50
        })
        .collect()
}

#[test]
fn test_leaderboard_sorted_and_stable_for_any_sequence() {
    for seed in 1..6 {
        let mut arcade = arcade();
        let mut saved_ids = Vec::new();
        for (i, score) in scores(seed, 60).into_iter().enumerate() {
            let game = GameKind::ALL[i % GameKind::ALL.len()].id();
            saved_ids.push(arcade.save_score(game, score, 1, Difficulty::Normal).id);
        }

        let board = arcade.get_leaderboard(None);
        for pair in board.windows(2) {
            assert!(pair[0].score >= pair[1].score, "board out of order");
            if pair[0].score == pair[1].score {
                let first = saved_ids.iter().position(|id| *id == pair[0].id).unwrap();
                let second = saved_ids.iter().position(|id| *id == pair[1].id).unwrap();
                assert!(first < second, "tie not in insertion order");
            }
        }
    }
}

#[test]
fn test_leaderboard_never_exceeds_cap() {
    let mut arcade = arcade();
    for score in 0..250u64 {
        arcade.save_score("snake", score, 1, Difficulty::Easy);
        assert!(arcade.get_leaderboard(None).len() <= 100);
    }
    let board = arcade.get_leaderboard(None);
    assert_eq!(board.len(), 100);
    assert_eq!(board[0].score, 249);
    assert_eq!(board[99].score, 150);
}

#[test]
fn test_cap_is_global_across_games() {
    let mut arcade = arcade();
    for _ in 0..100 {
        arcade.save_score("quiz-game", 500, 11, Difficulty::Normal);
    }
    arcade.save_score("snake", 10, 1, Difficulty::Easy);

    // The snake score falls off the shared top 100.
    assert!(arcade.get_leaderboard(Some("snake")).is_empty());
    assert_eq!(arcade.get_high_score("snake"), 0);
}

#[test]
fn test_high_score_matches_filtered_head() {
    let mut arcade = arcade();
    for (i, score) in scores(42, 40).into_iter().enumerate() {
        let game = GameKind::ALL[i % 3].id();
        arcade.save_score(game, score, 1, Difficulty::Normal);
    }

    for game in GameKind::ALL {
        let board = arcade.get_leaderboard(Some(game.id()));
        let expected = board.first().map(|e| e.score).unwrap_or(0);
        assert_eq!(arcade.get_high_score(game.id()), expected, "{}", game.id());
        assert!(board.iter().all(|e| e.game == game.id()));
    }
}

#[test]
fn test_clear_leaderboard() {
    let mut arcade = arcade();
    arcade.save_score("snake", 300, 4, Difficulty::Hard);
    arcade.save_score("memory-game", 90, 1, Difficulty::Medium);
    arcade.clear_leaderboard();

    assert!(arcade.get_leaderboard(None).is_empty());
    for game in GameKind::ALL {
        assert_eq!(arcade.get_high_score(game.id()), 0);
    }
    // Stats survive a leaderboard clear.
    assert_eq!(arcade.get_stats().total_games_played, 2);
}

#[test]
fn test_saved_entry_reads_back_identically() {
    let mut arcade = arcade();
    let saved = arcade.save_score("block-blast", 1200, 3, Difficulty::Normal);
    let other = arcade.save_score("block-blast", 1200, 3, Difficulty::Normal);

    let board = arcade.get_leaderboard(Some("block-blast"));
    assert_eq!(board.len(), 2);
    assert_eq!(board[0], saved);
    assert_eq!(board[1], other);

    let ids: HashSet<&str> = board.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_malformed_leaderboard_reads_empty_and_recovers() {
    let mut store = MemoryStore::new();
    store.insert_raw("neonArcade_leaderboard", "[{\"broken\": true");
    let mut arcade = Arcade::with_store(store);

    assert!(arcade.get_leaderboard(None).is_empty());
    assert_eq!(arcade.get_high_score("snake"), 0);

    arcade.save_score("snake", 60, 2, Difficulty::Medium);
    assert_eq!(arcade.get_leaderboard(None).len(), 1);
}

#[test]
fn test_unavailable_storage_is_silent() {
    let mut arcade = Arcade::with_store(MemoryStore::unavailable());
    let entry = arcade.save_score("dodge-game", 77, 8, Difficulty::Normal);
    assert_eq!(entry.score, 77);
    assert!(arcade.get_leaderboard(None).is_empty());
    assert_eq!(arcade.get_stats().total_games_played, 0);
    arcade.clear_leaderboard();
}

#[test]
fn test_quota_exceeded_keeps_previous_board() {
    let mut arcade = Arcade::with_store(MemoryStore::new().with_quota(1024));
    arcade.save_score("snake", 10, 1, Difficulty::Easy);
    assert_eq!(arcade.get_leaderboard(None).len(), 1);

    for score in 0..20 {
        arcade.save_score("snake", score, 1, Difficulty::Easy);
    }
    let stored = arcade.store().get("neonArcade_leaderboard").unwrap().unwrap();
    assert!(stored.len() <= 1024);
    assert!(!arcade.get_leaderboard(None).is_empty());
}
