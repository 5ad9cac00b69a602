//! Leaderboard ledger.
//!
//! A single global list of [`ScoreEntry`] records shared by every game,
//! ranked by score (highest first) and capped. Per-game boards are filtered
//! views of the global list. Stored under the `leaderboard` key.

pub mod logic;
pub mod types;

pub use logic::{filter_by_game, high_score, insert_ranked};
pub use types::{Difficulty, ScoreEntry};
