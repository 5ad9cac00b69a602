//! The arcade's game lineup and the session adapter that reports finished
//! games to the leaderboard, stats and achievements.

pub mod session;

pub use session::{GameSession, SessionOutcome};

use crate::achievements::AchievementId;
use crate::leaderboard::Difficulty;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    BlockBlast,
    FlappyBird,
    DodgeGame,
    MemoryGame,
    QuizGame,
}

impl GameKind {
    /// All games in menu order.
    pub const ALL: [GameKind; 6] = [
        GameKind::Snake,
        GameKind::BlockBlast,
        GameKind::FlappyBird,
        GameKind::DodgeGame,
        GameKind::MemoryGame,
        GameKind::QuizGame,
    ];

    /// Identifier stored in [`ScoreEntry::game`](crate::leaderboard::ScoreEntry).
    pub fn id(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::BlockBlast => "block-blast",
            GameKind::FlappyBird => "flappy-bird",
            GameKind::DodgeGame => "dodge-game",
            GameKind::MemoryGame => "memory-game",
            GameKind::QuizGame => "quiz-game",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Snake => "Snake",
            GameKind::BlockBlast => "Block Blast",
            GameKind::FlappyBird => "Flappy Bird",
            GameKind::DodgeGame => "Dodge Game",
            GameKind::MemoryGame => "Memory Game",
            GameKind::QuizGame => "Quiz Game",
        }
    }

    /// Unlocked the first time a session of this game starts.
    pub fn beginner_achievement(&self) -> AchievementId {
        match self {
            GameKind::Snake => AchievementId::SnakeBeginner,
            GameKind::BlockBlast => AchievementId::BlockBeginner,
            GameKind::FlappyBird => AchievementId::FlappyBeginner,
            GameKind::DodgeGame => AchievementId::DodgeBeginner,
            GameKind::MemoryGame => AchievementId::MemoryBeginner,
            GameKind::QuizGame => AchievementId::QuizBeginner,
        }
    }

    /// Difficulties the game lets the player pick.
    pub fn difficulties(&self) -> &'static [Difficulty] {
        match self {
            GameKind::Snake | GameKind::MemoryGame => {
                &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            }
            _ => &[Difficulty::Normal],
        }
    }

    pub fn default_difficulty(&self) -> Difficulty {
        match self {
            GameKind::Snake | GameKind::MemoryGame => Difficulty::Medium,
            _ => Difficulty::Normal,
        }
    }

    /// Level recorded for a final score. Snake tracks its own level and
    /// returns `None`.
    pub fn level_for_score(&self, score: u64) -> Option<u32> {
        let level = match self {
            GameKind::Snake => return None,
            GameKind::BlockBlast => score / 500 + 1,
            GameKind::FlappyBird | GameKind::DodgeGame => score / 10 + 1,
            GameKind::QuizGame => score / 50 + 1,
            GameKind::MemoryGame => 1,
        };
        Some(u32::try_from(level).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|g| g.id() == s)
            .ok_or_else(|| {
                let ids: Vec<&str> = GameKind::ALL.iter().map(|g| g.id()).collect();
                format!("unknown game '{s}' (expected one of {})", ids.join(", "))
            })
    }
}
