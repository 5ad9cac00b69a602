//! Achievement system types and data structures.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstGame,
    // First play of each game
    SnakeBeginner,
    BlockBeginner,
    FlappyBeginner,
    DodgeBeginner,
    MemoryBeginner,
    QuizBeginner,
    // Score thresholds, any game
    #[serde(rename = "score_100")]
    Score100,
    #[serde(rename = "score_500")]
    Score500,
    #[serde(rename = "score_1000")]
    Score1000,
    NightOwl,
    SpeedDemon,
    // Games played
    #[serde(rename = "play_10")]
    Play10,
    #[serde(rename = "play_50")]
    Play50,
    PowerupMaster,
    ComboMaster,
}

impl AchievementId {
    pub const ALL: [AchievementId; 16] = [
        AchievementId::FirstGame,
        AchievementId::SnakeBeginner,
        AchievementId::BlockBeginner,
        AchievementId::FlappyBeginner,
        AchievementId::DodgeBeginner,
        AchievementId::MemoryBeginner,
        AchievementId::QuizBeginner,
        AchievementId::Score100,
        AchievementId::Score500,
        AchievementId::Score1000,
        AchievementId::NightOwl,
        AchievementId::SpeedDemon,
        AchievementId::Play10,
        AchievementId::Play50,
        AchievementId::PowerupMaster,
        AchievementId::ComboMaster,
    ];

    /// Key used in the stored unlock map.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstGame => "first_game",
            AchievementId::SnakeBeginner => "snake_beginner",
            AchievementId::BlockBeginner => "block_beginner",
            AchievementId::FlappyBeginner => "flappy_beginner",
            AchievementId::DodgeBeginner => "dodge_beginner",
            AchievementId::MemoryBeginner => "memory_beginner",
            AchievementId::QuizBeginner => "quiz_beginner",
            AchievementId::Score100 => "score_100",
            AchievementId::Score500 => "score_500",
            AchievementId::Score1000 => "score_1000",
            AchievementId::NightOwl => "night_owl",
            AchievementId::SpeedDemon => "speed_demon",
            AchievementId::Play10 => "play_10",
            AchievementId::Play50 => "play_50",
            AchievementId::PowerupMaster => "powerup_master",
            AchievementId::ComboMaster => "combo_master",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AchievementId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown achievement '{s}'"))
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A catalog entry merged with its unlock time, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStatus {
    pub def: &'static AchievementDef,
    pub unlocked: bool,
    /// Unlock time, when the stored value can be read as one.
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl AchievementStatus {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

/// Unlock map: achievement key to the time it was first unlocked.
///
/// Keys and values are kept as raw JSON so that entries written by other
/// versions survive a load/save cycle untouched. Any value other than
/// `null`, `false`, `0` or `""` counts as unlocked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements {
    unlocked: BTreeMap<String, Value>,
}

impl Achievements {
    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.get(id.as_str()).is_some_and(is_truthy)
    }

    /// Unlock time, accepting RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
    pub fn unlocked_at(&self, id: AchievementId) -> Option<DateTime<Utc>> {
        if !self.is_unlocked(id) {
            return None;
        }
        let raw = self.unlocked.get(id.as_str())?.as_str()?;
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }

    /// Unlock an achievement now. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        self.unlock_at(id, Utc::now())
    }

    /// Unlock with an explicit timestamp. An existing record is never replaced.
    pub fn unlock_at(&mut self, id: AchievementId, at: DateTime<Utc>) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        let stamp = at.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        self.unlocked.insert(id.as_str().to_string(), Value::String(stamp));
        true
    }

    /// Number of catalog achievements unlocked (unknown keys are not counted).
    pub fn unlocked_count(&self) -> usize {
        AchievementId::ALL
            .iter()
            .filter(|id| self.is_unlocked(**id))
            .count()
    }

    /// Get the total number of achievements.
    pub fn total_count() -> usize {
        super::data::ALL_ACHIEVEMENTS.len()
    }

    /// Catalog in display order with unlock times filled in.
    pub fn statuses(&self) -> Vec<AchievementStatus> {
        super::data::ALL_ACHIEVEMENTS
            .iter()
            .map(|def| AchievementStatus {
                def,
                unlocked: self.is_unlocked(def.id),
                unlocked_at: self.unlocked_at(def.id),
            })
            .collect()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
