//! Unlock rules.
//!
//! Each rule pairs an achievement with a predicate over one event. Every
//! event re-evaluates its whole rule list; rules are level-triggered, and
//! the unlock map's first-write-wins semantics keeps repeats harmless.
//!
//! Achievements with explicit triggers (first play of a game, dark mode,
//! combos) have no rule here and are unlocked directly by their callers.

use super::types::AchievementId;
use crate::leaderboard::Difficulty;
use crate::stats::{StatKey, Stats};

/// A finished game's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub score: u64,
    pub difficulty: Difficulty,
}

/// A counter change; `stats` holds the values after the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatEvent {
    pub key: StatKey,
    pub stats: Stats,
}

/// One tagged unlock rule.
pub struct Rule<E> {
    pub id: AchievementId,
    pub predicate: fn(&E) -> bool,
}

pub const SCORE_RULES: &[Rule<ScoreEvent>] = &[
    Rule {
        id: AchievementId::Score100,
        predicate: score_at_least_100,
    },
    Rule {
        id: AchievementId::Score500,
        predicate: score_at_least_500,
    },
    Rule {
        id: AchievementId::Score1000,
        predicate: score_at_least_1000,
    },
    Rule {
        id: AchievementId::SpeedDemon,
        predicate: scored_on_hard,
    },
];

pub const STAT_RULES: &[Rule<StatEvent>] = &[
    Rule {
        id: AchievementId::FirstGame,
        predicate: first_game_played,
    },
    Rule {
        id: AchievementId::Play10,
        predicate: played_10,
    },
    Rule {
        id: AchievementId::Play50,
        predicate: played_50,
    },
    Rule {
        id: AchievementId::PowerupMaster,
        predicate: collected_10_powerups,
    },
];

/// Ids of every rule whose predicate holds for `event`, in rule order.
pub fn evaluate<E>(rules: &[Rule<E>], event: &E) -> Vec<AchievementId> {
    rules
        .iter()
        .filter(|rule| (rule.predicate)(event))
        .map(|rule| rule.id)
        .collect()
}

fn score_at_least_100(e: &ScoreEvent) -> bool {
    e.score >= 100
}

fn score_at_least_500(e: &ScoreEvent) -> bool {
    e.score >= 500
}

fn score_at_least_1000(e: &ScoreEvent) -> bool {
    e.score >= 1000
}

fn scored_on_hard(e: &ScoreEvent) -> bool {
    e.difficulty == Difficulty::Hard && e.score > 0
}

// Only an increment of the games counter itself fires these.
fn first_game_played(e: &StatEvent) -> bool {
    e.key == StatKey::TotalGamesPlayed && e.stats.total_games_played == 1
}

fn played_10(e: &StatEvent) -> bool {
    e.key == StatKey::TotalGamesPlayed && e.stats.total_games_played >= 10
}

fn played_50(e: &StatEvent) -> bool {
    e.key == StatKey::TotalGamesPlayed && e.stats.total_games_played >= 50
}

fn collected_10_powerups(e: &StatEvent) -> bool {
    e.key == StatKey::PowerupsCollected && e.stats.powerups_collected >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(score: u64, difficulty: Difficulty) -> Vec<AchievementId> {
        evaluate(SCORE_RULES, &ScoreEvent { score, difficulty })
    }

    fn games_played(n: u64) -> Vec<AchievementId> {
        let stats = Stats {
            total_games_played: n,
            ..Default::default()
        };
        evaluate(
            STAT_RULES,
            &StatEvent {
                key: StatKey::TotalGamesPlayed,
                stats,
            },
        )
    }

    #[test]
    fn test_score_thresholds_are_cumulative() {
        assert_eq!(
            score(1500, Difficulty::Normal),
            vec![
                AchievementId::Score100,
                AchievementId::Score500,
                AchievementId::Score1000
            ]
        );
        assert_eq!(score(500, Difficulty::Easy).len(), 2);
        assert!(score(99, Difficulty::Medium).is_empty());
    }

    #[test]
    fn test_hard_difficulty_needs_nonzero_score() {
        assert_eq!(score(1, Difficulty::Hard), vec![AchievementId::SpeedDemon]);
        assert!(score(0, Difficulty::Hard).is_empty());
        assert_eq!(
            score(1000, Difficulty::Hard),
            vec![
                AchievementId::Score100,
                AchievementId::Score500,
                AchievementId::Score1000,
                AchievementId::SpeedDemon
            ]
        );
    }

    #[test]
    fn test_first_game_is_exactly_one() {
        assert_eq!(games_played(1), vec![AchievementId::FirstGame]);
        assert!(games_played(2).is_empty());
    }

    #[test]
    fn test_games_played_milestones() {
        let milestones = [
            (9, vec![]),
            (10, vec![AchievementId::Play10]),
            (49, vec![AchievementId::Play10]),
            (50, vec![AchievementId::Play10, AchievementId::Play50]),
        ];

        for (played, expected) in milestones {
            assert_eq!(
                games_played(played),
                expected,
                "unexpected unlocks at {} games",
                played
            );
        }
    }

    #[test]
    fn test_rules_only_fire_for_their_counter() {
        let stats = Stats {
            total_games_played: 12,
            total_score: 0,
            powerups_collected: 10,
        };
        let powerup = evaluate(
            STAT_RULES,
            &StatEvent {
                key: StatKey::PowerupsCollected,
                stats,
            },
        );
        assert_eq!(powerup, vec![AchievementId::PowerupMaster]);

        let score_only = evaluate(
            STAT_RULES,
            &StatEvent {
                key: StatKey::TotalScore,
                stats,
            },
        );
        assert!(score_only.is_empty());
    }
}
