//! Ranking rules for the global leaderboard.

use super::types::ScoreEntry;

/// Append `entry`, re-rank by score descending and keep the top `cap`.
///
/// The sort is stable, so equal scores keep insertion order and the earlier
/// score ranks higher. A new entry that ties the last kept place is the one
/// dropped.
pub fn insert_ranked(board: &mut Vec<ScoreEntry>, entry: ScoreEntry, cap: usize) {
    board.push(entry);
    board.sort_by(|a, b| b.score.cmp(&a.score));
    board.truncate(cap);
}

/// Entries for one game, keeping the global order.
pub fn filter_by_game(board: &[ScoreEntry], game: &str) -> Vec<ScoreEntry> {
    board.iter().filter(|e| e.game == game).cloned().collect()
}

/// Best score recorded for `game`, or 0.
pub fn high_score(board: &[ScoreEntry], game: &str) -> u64 {
    board
        .iter()
        .find(|e| e.game == game)
        .map(|e| e.score)
        .unwrap_or(0)
}
