//! Game settings
//!
//! Read from a JSON file next to the binary. Settings are a convenience, not
//! an asset: a missing or broken file falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_SCALE, WINDOW_TITLE};
use crate::platform::KeyScheme;
use crate::tuning::Tuning;

/// Default settings file name
pub const SETTINGS_FILE: &str = "vaxerman.json";

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Window size multiplier over the logical screen
    pub window_scale: u32,
    /// Keyboard layout
    pub key_scheme: KeyScheme,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Level file; `None` uses the built-in level
    pub level_path: Option<PathBuf>,
    /// Gameplay balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_scale: WINDOW_SCALE,
            key_scheme: KeyScheme::default(),
            seed: None,
            level_path: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.window_scale = settings.window_scale.max(1);
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Malformed settings in {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        let scale = self.window_scale.max(1);
        (
            crate::consts::SCREEN_WIDTH as u32 * scale,
            crate::consts::SCREEN_HEIGHT as u32 * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.title, "VaxerMan");
        assert_eq!(settings.window_size(), (480, 480));
        assert_eq!(settings.key_scheme, KeyScheme::Vim);
        assert!(settings.seed.is_none());
        assert!(settings.level_path.is_none());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            r#"{ "key_scheme": "Arrows", "seed": 42, "tuning": { "enemy": { "spawn_chance": 7.0 } } }"#,
        )
        .unwrap();
        assert_eq!(settings.key_scheme, KeyScheme::Arrows);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.title, "VaxerMan");
        // Sanitised on load
        assert_eq!(settings.tuning.enemy.spawn_chance, 1.0);
    }

    #[test]
    fn test_key_scheme_aliases() {
        let settings = Settings::from_json(r#"{ "key_scheme": "arrow" }"#).unwrap();
        assert_eq!(settings.key_scheme, KeyScheme::Arrows);
        let settings = Settings::from_json(r#"{ "key_scheme": "HJKL" }"#).unwrap();
        assert_eq!(settings.key_scheme, KeyScheme::Vim);

        let err = Settings::from_json(r#"{ "key_scheme": "wasd" }"#).unwrap_err();
        assert!(err.to_string().contains("unknown key scheme"));
    }

    #[test]
    fn test_zero_scale_is_bumped() {
        let settings = Settings::from_json(r#"{ "window_scale": 0 }"#).unwrap();
        assert_eq!(settings.window_scale, 1);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("no/such/vaxerman.json"));
        assert_eq!(settings, Settings::default());
    }
}
