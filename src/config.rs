//! Arcade configuration.

use crate::utils::persistence::DEFAULT_QUOTA_BYTES;
use std::path::PathBuf;

/// Leaderboard entries kept across all games.
pub const DEFAULT_LEADERBOARD_CAP: usize = 100;

/// Prefix applied to every storage key.
pub const DEFAULT_KEY_PREFIX: &str = "neonArcade_";

/// Name of the data directory created under the home directory.
pub const DATA_DIR_NAME: &str = ".neon-arcade";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    /// Where a [`FileStore`](crate::utils::persistence::FileStore) keeps its
    /// files (None = `~/.neon-arcade`)
    pub data_dir: Option<PathBuf>,

    /// Prefix for storage keys
    pub key_prefix: String,

    /// Maximum number of leaderboard entries retained
    pub leaderboard_cap: usize,

    /// Byte quota of the storage medium
    pub quota_bytes: usize,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            leaderboard_cap: DEFAULT_LEADERBOARD_CAP,
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl ArcadeConfig {
    /// Defaults overlaid with `NEON_ARCADE_DIR`, `NEON_ARCADE_LEADERBOARD_CAP`
    /// and `NEON_ARCADE_QUOTA_BYTES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("NEON_ARCADE_DIR").filter(|d| !d.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(cap) = parse_var(&lookup, "NEON_ARCADE_LEADERBOARD_CAP") {
            config.leaderboard_cap = cap;
        }
        if let Some(quota) = parse_var(&lookup, "NEON_ARCADE_QUOTA_BYTES") {
            config.quota_bytes = quota;
        }
        config
    }

    /// Full storage key for a logical record name.
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.key_prefix, name)
    }

    /// Concrete data directory, or `None` when no home directory exists.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        match &self.data_dir {
            Some(dir) => Some(dir.clone()),
            None => dirs::home_dir().map(|home| home.join(DATA_DIR_NAME)),
        }
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<usize> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a number");
            None
        }
    }
}
