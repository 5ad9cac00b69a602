//! Neon Arcade - score, achievement and settings engine
//!
//! Shared progress tracking for a set of small arcade games: a ranked global
//! leaderboard, lifetime stats, a fixed achievement catalog with unlock rules,
//! and presentation settings. Everything is persisted as JSON blobs in a
//! key-value [`StorageMedium`](utils::persistence::StorageMedium).

pub mod achievements;
pub mod arcade;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod games;
pub mod leaderboard;
pub mod settings;
pub mod stats;
pub mod utils;

pub use achievements::{AchievementId, AchievementStatus};
pub use arcade::Arcade;
pub use config::ArcadeConfig;
pub use errors::StoreError;
pub use games::{GameKind, GameSession, SessionOutcome};
pub use leaderboard::{Difficulty, ScoreEntry};
pub use settings::{SoundSettings, Theme};
pub use stats::{StatKey, Stats};
pub use utils::persistence::{FileStore, MemoryStore, StorageMedium};
