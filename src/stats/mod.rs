//! Lifetime play counters, stored under the `stats` key.
//!
//! Counters only go up; a full data wipe is the only way back to zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names one counter in [`Stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    TotalGamesPlayed,
    TotalScore,
    PowerupsCollected,
}

impl StatKey {
    pub const ALL: [StatKey; 3] = [
        StatKey::TotalGamesPlayed,
        StatKey::TotalScore,
        StatKey::PowerupsCollected,
    ];

    /// Field name in the stored JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::TotalGamesPlayed => "totalGamesPlayed",
            StatKey::TotalScore => "totalScore",
            StatKey::PowerupsCollected => "powerupsCollected",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown stat '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_games_played: u64,
    pub total_score: u64,
    pub powerups_collected: u64,
}

impl Stats {
    /// Add `amount` to a counter, saturating at `u64::MAX`. Returns the new value.
    pub fn add(&mut self, key: StatKey, amount: u64) -> u64 {
        let slot = match key {
            StatKey::TotalGamesPlayed => &mut self.total_games_played,
            StatKey::TotalScore => &mut self.total_score,
            StatKey::PowerupsCollected => &mut self.powerups_collected,
        };
        *slot = slot.saturating_add(amount);
        *slot
    }
}
