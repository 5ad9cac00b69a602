//! The arcade context: every score, achievement, stat and setting operation,
//! bound to one storage medium and configuration.
//!
//! Nothing is cached. Each call reads the records it needs straight from the
//! medium and writes them straight back, so two `Arcade`s sharing a medium
//! see each other's writes (last write wins).

use crate::achievements::{
    self, AchievementId, AchievementStatus, Achievements, ScoreEvent, StatEvent,
};
use crate::config::ArcadeConfig;
use crate::games::{GameKind, GameSession};
use crate::leaderboard::{self, Difficulty, ScoreEntry};
use crate::settings::{SoundSettings, Theme};
use crate::stats::{StatKey, Stats};
use crate::utils::persistence::{
    read_json_or_default, remove_key, write_json, FileStore, StorageMedium,
};
use std::io;

const LEADERBOARD_KEY: &str = "leaderboard";
const ACHIEVEMENTS_KEY: &str = "achievements";
const STATS_KEY: &str = "stats";
const THEME_KEY: &str = "theme";
const SOUND_KEY: &str = "sound";

pub struct Arcade<S: StorageMedium> {
    store: S,
    config: ArcadeConfig,
}

impl Arcade<FileStore> {
    /// Open the on-disk store described by `config`.
    pub fn open(config: ArcadeConfig) -> io::Result<Self> {
        let dir = config.resolve_data_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        let store = FileStore::open(dir, config.quota_bytes)?;
        Ok(Self::new(store, config))
    }
}

impl<S: StorageMedium> Arcade<S> {
    pub fn new(store: S, config: ArcadeConfig) -> Self {
        Self { store, config }
    }

    /// Arcade over `store` with the default configuration.
    pub fn with_store(store: S) -> Self {
        Self::new(store, ArcadeConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: Default + serde::de::DeserializeOwned>(&self, name: &str) -> T {
        read_json_or_default(&self.store, &self.config.key(name))
    }

    fn write<T: serde::Serialize>(&mut self, name: &str, data: &T) -> bool {
        let key = self.config.key(name);
        write_json(&mut self.store, &key, data)
    }

    // =========================================================================
    // Leaderboard
    // =========================================================================

    /// Record a finished game and count it towards the games played.
    pub fn save_score(
        &mut self,
        game: &str,
        score: u64,
        level: u32,
        difficulty: Difficulty,
    ) -> ScoreEntry {
        self.record_score(game, score, level, difficulty).0
    }

    /// [`save_score`](Self::save_score), also returning the achievements the
    /// stat updates unlocked.
    pub(crate) fn record_score(
        &mut self,
        game: &str,
        score: u64,
        level: u32,
        difficulty: Difficulty,
    ) -> (ScoreEntry, Vec<AchievementId>) {
        let entry = ScoreEntry::new(game, score, level, difficulty);

        let mut board: Vec<ScoreEntry> = self.read(LEADERBOARD_KEY);
        leaderboard::insert_ranked(&mut board, entry.clone(), self.config.leaderboard_cap);
        self.write(LEADERBOARD_KEY, &board);

        let mut unlocked = self.increment_stat(StatKey::TotalGamesPlayed, 1);
        unlocked.extend(self.increment_stat(StatKey::TotalScore, score));
        (entry, unlocked)
    }

    /// Ranked entries, optionally limited to one game.
    pub fn get_leaderboard(&self, game: Option<&str>) -> Vec<ScoreEntry> {
        let board: Vec<ScoreEntry> = self.read(LEADERBOARD_KEY);
        match game {
            Some(game) => leaderboard::filter_by_game(&board, game),
            None => board,
        }
    }

    pub fn get_high_score(&self, game: &str) -> u64 {
        let board: Vec<ScoreEntry> = self.read(LEADERBOARD_KEY);
        leaderboard::high_score(&board, game)
    }

    /// High score of every game in menu order.
    pub fn high_scores(&self) -> Vec<(GameKind, u64)> {
        let board: Vec<ScoreEntry> = self.read(LEADERBOARD_KEY);
        GameKind::ALL
            .iter()
            .map(|game| (*game, leaderboard::high_score(&board, game.id())))
            .collect()
    }

    pub fn clear_leaderboard(&mut self) {
        let key = self.config.key(LEADERBOARD_KEY);
        remove_key(&mut self.store, &key);
        log::info!("leaderboard cleared");
    }

    // =========================================================================
    // Achievements
    // =========================================================================

    /// Unlock `id`. True only when this call recorded the unlock.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> bool {
        let mut unlocked: Achievements = self.read(ACHIEVEMENTS_KEY);
        if !unlocked.unlock(id) {
            return false;
        }
        let saved = self.write(ACHIEVEMENTS_KEY, &unlocked);
        if saved {
            log::debug!("achievement unlocked: {id}");
        }
        saved
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.read::<Achievements>(ACHIEVEMENTS_KEY).is_unlocked(id)
    }

    /// The catalog in display order with unlock times.
    pub fn get_achievements(&self) -> Vec<AchievementStatus> {
        self.read::<Achievements>(ACHIEVEMENTS_KEY).statuses()
    }

    /// The achievements screen. Opening it in dark mode earns Night Owl.
    pub fn view_achievements(&mut self) -> Vec<AchievementStatus> {
        if self.theme() == Theme::Dark {
            self.unlock_achievement(AchievementId::NightOwl);
        }
        self.get_achievements()
    }

    pub fn unlocked_count(&self) -> usize {
        self.read::<Achievements>(ACHIEVEMENTS_KEY).unlocked_count()
    }

    /// Run every score rule. Returns the achievements this call unlocked.
    pub fn check_score_achievements(
        &mut self,
        score: u64,
        difficulty: Difficulty,
    ) -> Vec<AchievementId> {
        let event = ScoreEvent { score, difficulty };
        self.unlock_all(achievements::evaluate(achievements::SCORE_RULES, &event))
    }

    fn unlock_all(&mut self, ids: Vec<AchievementId>) -> Vec<AchievementId> {
        ids.into_iter()
            .filter(|id| self.unlock_achievement(*id))
            .collect()
    }

    // =========================================================================
    // Stats
    // =========================================================================

    /// Bump a counter, then run every stat rule against the new totals.
    /// Returns the achievements this call unlocked; none if the counters
    /// could not be saved.
    pub fn increment_stat(&mut self, key: StatKey, amount: u64) -> Vec<AchievementId> {
        let mut stats = self.get_stats();
        stats.add(key, amount);
        if !self.write(STATS_KEY, &stats) {
            return Vec::new();
        }

        let event = StatEvent { key, stats };
        self.unlock_all(achievements::evaluate(achievements::STAT_RULES, &event))
    }

    pub fn get_stats(&self) -> Stats {
        self.read(STATS_KEY)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.read(THEME_KEY)
    }

    /// Persist the theme. Switching to dark earns Night Owl.
    pub fn set_theme(&mut self, theme: Theme) {
        self.write(THEME_KEY, &theme);
        if theme == Theme::Dark {
            self.unlock_achievement(AchievementId::NightOwl);
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }

    pub fn sound_settings(&self) -> SoundSettings {
        self.read(SOUND_KEY)
    }

    fn update_sound<R>(&mut self, f: impl FnOnce(&mut SoundSettings) -> R) -> R {
        let mut sound = self.sound_settings();
        let result = f(&mut sound);
        self.write(SOUND_KEY, &sound);
        result
    }

    pub fn toggle_music(&mut self) -> bool {
        self.update_sound(SoundSettings::toggle_music)
    }

    pub fn toggle_sfx(&mut self) -> bool {
        self.update_sound(SoundSettings::toggle_sfx)
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.update_sound(|s| s.set_music_volume(volume));
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.update_sound(|s| s.set_sfx_volume(volume));
    }

    // =========================================================================
    // Sessions and reset
    // =========================================================================

    pub fn start_session(&mut self, kind: GameKind, difficulty: Difficulty) -> GameSession<'_, S> {
        GameSession::start(self, kind, difficulty)
    }

    /// Wipe scores, achievements and stats. Theme and sound are kept.
    pub fn reset_all(&mut self) {
        for name in [LEADERBOARD_KEY, ACHIEVEMENTS_KEY, STATS_KEY] {
            let key = self.config.key(name);
            remove_key(&mut self.store, &key);
        }
        log::info!("all progress reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::MemoryStore;

    fn arcade() -> Arcade<MemoryStore> {
        Arcade::with_store(MemoryStore::new())
    }

    #[test]
    fn test_keys_are_prefixed() {
        let mut arcade = arcade();
        arcade.save_score("snake", 10, 1, Difficulty::Easy);
        assert!(arcade.store().raw("neonArcade_leaderboard").is_some());
        assert!(arcade.store().raw("neonArcade_stats").is_some());
        assert!(arcade.store().raw("neonArcade_achievements").is_some());
    }

    #[test]
    fn test_save_score_counts_games_and_score() {
        let mut arcade = arcade();
        arcade.save_score("snake", 120, 2, Difficulty::Medium);
        arcade.save_score("quiz-game", 30, 1, Difficulty::Normal);
        let stats = arcade.get_stats();
        assert_eq!(stats.total_games_played, 2);
        assert_eq!(stats.total_score, 150);
        assert_eq!(stats.powerups_collected, 0);
    }

    #[test]
    fn test_save_score_does_not_run_score_rules() {
        let mut arcade = arcade();
        arcade.save_score("snake", 5000, 9, Difficulty::Hard);
        assert!(!arcade.is_unlocked(AchievementId::Score1000));
        assert!(!arcade.is_unlocked(AchievementId::SpeedDemon));
        assert!(arcade.is_unlocked(AchievementId::FirstGame));
    }

    #[test]
    fn test_unlock_persists_failure_as_false() {
        let mut arcade = Arcade::with_store(MemoryStore::new().with_fail_writes(true));
        assert!(!arcade.unlock_achievement(AchievementId::NightOwl));
        assert!(!arcade.is_unlocked(AchievementId::NightOwl));
    }

    #[test]
    fn test_theme_and_night_owl() {
        let mut arcade = arcade();
        assert_eq!(arcade.theme(), Theme::Dark);
        assert_eq!(arcade.toggle_theme(), Theme::Light);
        assert!(!arcade.is_unlocked(AchievementId::NightOwl));
        assert_eq!(arcade.toggle_theme(), Theme::Dark);
        assert!(arcade.is_unlocked(AchievementId::NightOwl));
        assert_eq!(arcade.store().raw("neonArcade_theme"), Some("\"dark\""));
    }

    #[test]
    fn test_viewing_achievements_in_default_dark_theme() {
        let mut arcade = arcade();
        assert!(!arcade.get_achievements().iter().any(|a| a.is_unlocked()));
        assert!(!arcade.is_unlocked(AchievementId::NightOwl));

        let shown = arcade.view_achievements();
        let night_owl = shown
            .iter()
            .find(|a| a.def.id == AchievementId::NightOwl)
            .unwrap();
        assert!(night_owl.is_unlocked());
    }

    #[test]
    fn test_viewing_achievements_in_light_theme() {
        let mut arcade = arcade();
        arcade.set_theme(Theme::Light);
        arcade.view_achievements();
        assert!(!arcade.is_unlocked(AchievementId::NightOwl));
    }

    #[test]
    fn test_unsaved_stats_unlock_nothing() {
        // Room for a small unlock map but not for the stats record.
        let mut arcade = Arcade::with_store(MemoryStore::new().with_quota(50));
        assert!(arcade.increment_stat(StatKey::TotalGamesPlayed, 1).is_empty());
        assert_eq!(arcade.get_stats().total_games_played, 0);
        assert!(!arcade.is_unlocked(AchievementId::FirstGame));

        // The same map fits on its own, so only the stats write blocked it.
        assert!(arcade.unlock_achievement(AchievementId::FirstGame));
    }

    #[test]
    fn test_sound_settings_persist() {
        let mut arcade = arcade();
        assert!(!arcade.toggle_music());
        arcade.set_sfx_volume(2.0);
        let sound = arcade.sound_settings();
        assert!(!sound.music_enabled);
        assert!(sound.sfx_enabled);
        assert_eq!(sound.sfx_volume, 1.0);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut arcade = arcade();
        arcade.set_theme(Theme::Light);
        arcade.save_score("snake", 300, 3, Difficulty::Easy);
        arcade.increment_stat(StatKey::PowerupsCollected, 4);
        arcade.reset_all();

        assert!(arcade.get_leaderboard(None).is_empty());
        assert_eq!(arcade.get_stats(), Stats::default());
        assert_eq!(arcade.unlocked_count(), 0);
        assert_eq!(arcade.theme(), Theme::Light);
    }

    #[test]
    fn test_high_scores_cover_every_game() {
        let mut arcade = arcade();
        arcade.save_score("memory-game", 80, 1, Difficulty::Hard);
        let scores = arcade.high_scores();
        assert_eq!(scores.len(), GameKind::ALL.len());
        assert!(scores.contains(&(GameKind::MemoryGame, 80)));
        assert!(scores.contains(&(GameKind::Snake, 0)));
    }

    #[test]
    fn test_custom_cap() {
        let config = ArcadeConfig {
            leaderboard_cap: 3,
            ..Default::default()
        };
        let mut arcade = Arcade::new(MemoryStore::new(), config);
        for score in [5, 1, 9, 7, 3] {
            arcade.save_score("snake", score, 1, Difficulty::Easy);
        }
        let scores: Vec<u64> = arcade.get_leaderboard(None).iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 7, 5]);
    }

    #[test]
    fn test_open_file_store() {
        let dir = crate::utils::persistence::test_dir();
        let config = ArcadeConfig {
            data_dir: Some(dir.clone()),
            ..Default::default()
        };
        let mut arcade = Arcade::open(config.clone()).expect("open should succeed");
        arcade.save_score("dodge-game", 42, 5, Difficulty::Normal);
        drop(arcade);

        let reopened = Arcade::open(config).expect("reopen should succeed");
        assert_eq!(reopened.get_high_score("dodge-game"), 42);
        assert!(dir.join("neonArcade_leaderboard.json").exists());
        std::fs::remove_dir_all(dir).ok();
    }
}
