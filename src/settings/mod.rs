//! Presentation settings persisted alongside game progress: the colour theme
//! (`theme` key) and audio preferences (`sound` key).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("unknown theme '{s}' (expected dark or light)")),
        }
    }
}

/// Audio preferences. Volumes are in `0.0..=1.0`.
///
/// Missing fields in stored JSON take their defaults, so older partial
/// records load cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoundSettings {
    pub music_enabled: bool,
    pub sfx_enabled: bool,
    pub music_volume: f32,
    pub sfx_volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sfx_enabled: true,
            music_volume: 0.3,
            sfx_volume: 0.5,
        }
    }
}

impl SoundSettings {
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    pub fn toggle_sfx(&mut self) -> bool {
        self.sfx_enabled = !self.sfx_enabled;
        self.sfx_enabled
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = clamp_volume(volume);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = clamp_volume(volume);
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_volume_clamped() {
        let mut sound = SoundSettings::default();
        sound.set_music_volume(1.7);
        sound.set_sfx_volume(-0.2);
        assert_eq!(sound.music_volume, 1.0);
        assert_eq!(sound.sfx_volume, 0.0);
        sound.set_sfx_volume(f32::NAN);
        assert_eq!(sound.sfx_volume, 0.0);
    }

    #[test]
    fn test_toggles_return_new_state() {
        let mut sound = SoundSettings::default();
        assert!(!sound.toggle_music());
        assert!(sound.toggle_music());
        assert!(!sound.toggle_sfx());
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let sound: SoundSettings = serde_json::from_str(r#"{"sfxEnabled": false}"#).unwrap();
        assert!(!sound.sfx_enabled);
        assert!(sound.music_enabled);
        assert_eq!(sound.music_volume, 0.3);
    }
}
