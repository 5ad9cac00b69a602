//! Leaderboard data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty a score was earned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    /// Games without a difficulty selector record this.
    Normal,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Normal,
    ];

    /// Stable identifier used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Normal => "normal",
        }
    }

    /// Display name for leaderboard rows.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Normal => "Normal",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty '{s}' (expected easy, medium, hard or normal)"))
    }
}

/// One finished game. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: String,
    pub game: String,
    pub score: u64,
    pub level: u32,
    pub difficulty: Difficulty,
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Build a fresh entry with a unique id stamped with the current time.
    pub fn new(game: &str, score: u64, level: u32, difficulty: Difficulty) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            game: game.to_string(),
            score,
            level,
            difficulty,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("NORMAL".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_entry_json_layout() {
        let entry = ScoreEntry::new("snake", 120, 3, Difficulty::Easy);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["game"], "snake");
        assert_eq!(json["score"], 120);
        assert_eq!(json["level"], 3);
        assert_eq!(json["difficulty"], "easy");
        assert!(json["date"].is_string());
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = ScoreEntry::new("snake", 1, 1, Difficulty::Normal);
        let b = ScoreEntry::new("snake", 1, 1, Difficulty::Normal);
        assert_ne!(a.id, b.id);
    }
}
