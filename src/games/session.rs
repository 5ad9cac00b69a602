//! Per-game session adapter.
//!
//! A [`GameSession`] lives from the moment a game starts until its final
//! score is reported. It holds the arcade mutably for that span, so nothing
//! else can write progress while a game is running.

use super::GameKind;
use crate::achievements::AchievementId;
use crate::arcade::Arcade;
use crate::leaderboard::{Difficulty, ScoreEntry};
use crate::stats::StatKey;
use crate::utils::persistence::StorageMedium;

/// Combo multiplier that earns Combo Master.
pub const COMBO_MASTER_MULTIPLIER: u32 = 3;

/// What happened when a session was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub entry: ScoreEntry,
    /// Best score for this game before the session started.
    pub previous_high_score: u64,
    pub new_high_score: bool,
    /// Achievements unlocked at any point during the session.
    pub newly_unlocked: Vec<AchievementId>,
}

pub struct GameSession<'a, S: StorageMedium> {
    arcade: &'a mut Arcade<S>,
    kind: GameKind,
    difficulty: Difficulty,
    previous_high_score: u64,
    newly_unlocked: Vec<AchievementId>,
}

impl<'a, S: StorageMedium> GameSession<'a, S> {
    /// Start a session. Unlocks the game's first-play achievement and
    /// snapshots the current high score.
    pub(crate) fn start(arcade: &'a mut Arcade<S>, kind: GameKind, difficulty: Difficulty) -> Self {
        let difficulty = if kind.difficulties().contains(&difficulty) {
            difficulty
        } else {
            log::warn!(
                "{} has no {} difficulty, using {}",
                kind.name(),
                difficulty,
                kind.default_difficulty()
            );
            kind.default_difficulty()
        };

        let mut newly_unlocked = Vec::new();
        if arcade.unlock_achievement(kind.beginner_achievement()) {
            newly_unlocked.push(kind.beginner_achievement());
        }
        let previous_high_score = arcade.get_high_score(kind.id());
        log::debug!("started {} on {}", kind.name(), difficulty);

        Self {
            arcade,
            kind,
            difficulty,
            previous_high_score,
            newly_unlocked,
        }
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// High score to beat, as of session start.
    pub fn high_score(&self) -> u64 {
        self.previous_high_score
    }

    pub fn collect_powerup(&mut self) {
        let unlocked = self.arcade.increment_stat(StatKey::PowerupsCollected, 1);
        self.newly_unlocked.extend(unlocked);
    }

    /// Report a combo; a multiplier of 3 or more earns Combo Master.
    pub fn record_combo(&mut self, multiplier: u32) {
        if multiplier >= COMBO_MASTER_MULTIPLIER
            && self.arcade.unlock_achievement(AchievementId::ComboMaster)
        {
            self.newly_unlocked.push(AchievementId::ComboMaster);
        }
    }

    /// Report the final result and end the session.
    ///
    /// `level` overrides the game's own score-to-level formula; games that
    /// track levels themselves (Snake) must pass it or get level 1.
    pub fn finish(mut self, score: u64, level: Option<u32>) -> SessionOutcome {
        let level = level
            .or_else(|| self.kind.level_for_score(score))
            .unwrap_or(1);

        let (entry, unlocked) = self
            .arcade
            .record_score(self.kind.id(), score, level, self.difficulty);
        self.newly_unlocked.extend(unlocked);

        let unlocked = self.arcade.check_score_achievements(score, self.difficulty);
        self.newly_unlocked.extend(unlocked);

        let new_high_score = score > self.previous_high_score;
        log::debug!(
            "finished {} with {} (best before: {})",
            self.kind.name(),
            score,
            self.previous_high_score
        );

        SessionOutcome {
            entry,
            previous_high_score: self.previous_high_score,
            new_high_score,
            newly_unlocked: self.newly_unlocked,
        }
    }
}
