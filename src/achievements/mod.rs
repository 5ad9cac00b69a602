//! Achievement system module.
//!
//! A fixed catalog of badges plus the per-player unlock map stored under the
//! `achievements` key. Unlocks are one-way: the first unlock's timestamp is
//! kept and later attempts are no-ops.

pub mod data;
pub mod rules;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use rules::{evaluate, Rule, ScoreEvent, StatEvent, SCORE_RULES, STAT_RULES};
pub use types::{AchievementDef, AchievementId, AchievementStatus, Achievements};
