//! Player preferences
//!
//! Persisted separately from the high score.

use serde::{Deserialize, Serialize};

use crate::consts::POINTER_LOCK_DIVISOR;
use crate::platform::Storage;
use crate::tuning::TuningPreset;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Balance preset for new games
    pub preset: TuningPreset,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Input ===
    /// Pointer-lock mouse movement is divided by this
    pub pointer_divisor: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: TuningPreset::Classic,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pointer_divisor: POINTER_LOCK_DIVISOR,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "kibel_settings";

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Flip mute and return the new state
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn load(storage: &impl Storage) -> Self {
        if let Some(json) = storage.get_item(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings");
                return settings;
            }
            log::warn!("Ignoring unreadable settings");
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, storage: &mut impl Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_item(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_save_load() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            preset: TuningPreset::Gentle,
            muted: true,
            ..Settings::default()
        };
        settings.save(&mut storage);
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_toggle_mute_survives_reload() {
        let mut storage = MemoryStorage::new();
        let mut settings = Settings::load(&storage);
        assert!(settings.toggle_muted());
        settings.save(&mut storage);

        let mut reloaded = Settings::load(&storage);
        assert!(reloaded.muted);
        assert_eq!(reloaded.effective_volume(), 0.0);
        assert!(!reloaded.toggle_muted());
        assert!(reloaded.effective_volume() > 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set_item(Settings::STORAGE_KEY, r#"{"muted":true}"#);
        let settings = Settings::load(&storage);
        assert!(settings.muted);
        assert_eq!(settings.preset, TuningPreset::Classic);
        assert_eq!(settings.pointer_divisor, 2.0);
    }
}
