//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // FIRST PLAY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstGame,
        name: "First Steps",
        description: "Play your first game",
        icon: "🎮",
    },
    AchievementDef {
        id: AchievementId::SnakeBeginner,
        name: "Snake Beginner",
        description: "Play Snake for the first time",
        icon: "🐍",
    },
    AchievementDef {
        id: AchievementId::BlockBeginner,
        name: "Block Beginner",
        description: "Play Block Blast for the first time",
        icon: "🧱",
    },
    AchievementDef {
        id: AchievementId::FlappyBeginner,
        name: "Bird Watcher",
        description: "Play Flappy Bird for the first time",
        icon: "🐦",
    },
    AchievementDef {
        id: AchievementId::DodgeBeginner,
        name: "Dodger",
        description: "Play Dodge Game for the first time",
        icon: "🎯",
    },
    AchievementDef {
        id: AchievementId::MemoryBeginner,
        name: "Memory Master",
        description: "Play Memory Game for the first time",
        icon: "🧠",
    },
    AchievementDef {
        id: AchievementId::QuizBeginner,
        name: "Quiz Starter",
        description: "Play Quiz Game for the first time",
        icon: "❓",
    },
    // ═══════════════════════════════════════════════════════════════
    // SCORE ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Score100,
        name: "Getting Started",
        description: "Score 100 points in any game",
        icon: "💯",
    },
    AchievementDef {
        id: AchievementId::Score500,
        name: "On Fire",
        description: "Score 500 points in any game",
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::Score1000,
        name: "Pro Gamer",
        description: "Score 1000 points in any game",
        icon: "👑",
    },
    // ═══════════════════════════════════════════════════════════════
    // SPECIAL ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::NightOwl,
        name: "Night Owl",
        description: "Enable dark mode",
        icon: "🌙",
    },
    AchievementDef {
        id: AchievementId::SpeedDemon,
        name: "Speed Demon",
        description: "Win on Hard difficulty",
        icon: "⚡",
    },
    // ═══════════════════════════════════════════════════════════════
    // DEDICATION ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Play10,
        name: "Dedicated Player",
        description: "Play 10 games",
        icon: "🏅",
    },
    AchievementDef {
        id: AchievementId::Play50,
        name: "Arcade Regular",
        description: "Play 50 games",
        icon: "🎖️",
    },
    AchievementDef {
        id: AchievementId::PowerupMaster,
        name: "Power-up Master",
        description: "Collect 10 power-ups",
        icon: "⭐",
    },
    AchievementDef {
        id: AchievementId::ComboMaster,
        name: "Combo Master",
        description: "Get a 3x combo in Block Blast",
        icon: "💥",
    },
];

/// Look up the definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}
