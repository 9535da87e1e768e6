//! Game settings and preferences
//!
//! Persisted separately from the score file, as JSON. Anything that fails
//! to load falls back to defaults; the game never blocks on preferences.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_PATH;

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Play the background heartbeat
    pub beat_enabled: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            beat_enabled: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(SETTINGS_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.as_ref().display());
                    settings
                }
                Err(err) => {
                    log::warn!("Malformed settings file, using defaults: {}", err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings to the default path. Failure is logged, not fatal.
    pub fn save(&self) {
        self.save_to(SETTINGS_PATH);
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    log::warn!("Could not save settings: {}", err);
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {}", err),
        }
    }

    /// Volume actually applied to effect playback.
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load_from("definitely/not/here/settings.json");
        assert_eq!(settings.master_volume, Settings::default().master_volume);
        assert!(settings.beat_enabled);
    }

    #[test]
    fn malformed_json_yields_defaults() {
        let path = std::env::temp_dir().join(format!(
            "astro_blast_settings_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.sfx_volume, Settings::default().sfx_volume);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "astro_blast_settings_rt_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::default();
        settings.master_volume = 0.25;
        settings.show_fps = true;
        settings.save_to(&path);

        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.master_volume, 0.25);
        assert!(reloaded.show_fps);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn effective_volume_is_clamped_product() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        };
        assert!((settings.effective_sfx_volume() - 0.25).abs() < 1e-6);
    }
}
