//! Game balance parameters
//!
//! Everything that shapes the difficulty curve lives here so alternate
//! balances can be swapped in without touching the simulation.

use serde::{Deserialize, Serialize};

/// Named balance presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TuningPreset {
    /// Starts hot at difficulty 10
    #[default]
    Classic,
    /// Starts at difficulty 1 with a wider bounce band
    Gentle,
}

impl TuningPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::Classic => "Classic",
            TuningPreset::Gentle => "Gentle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(TuningPreset::Classic),
            "gentle" | "easy" => Some(TuningPreset::Gentle),
            _ => None,
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            TuningPreset::Classic => Tuning::classic(),
            TuningPreset::Gentle => Tuning::gentle(),
        }
    }
}

/// Balance constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Difficulty at game start and the floor after losing a life
    pub base_difficulty: u32,
    /// Added after each completed round
    pub difficulty_increment: u32,
    /// Rounds only raise difficulty while it is at or below this
    pub difficulty_cap: u32,
    /// Bombs per round before difficulty is factored in
    pub base_bombs: u32,
    /// Extra bombs per point of difficulty
    pub bomb_multiplier: f32,
    /// Milliseconds between drops
    pub drop_interval_ms: u32,
    /// Fall speed of a bomb at difficulty 0 (px/s)
    pub bomb_base_speed: f32,
    /// Bomber run speed at difficulty 0 (px/s)
    pub bomber_base_speed: f32,
    /// Distance from the screen edge where the bomber turns around
    pub bounce_band: f32,
    /// Points needed for the first extra life
    pub extra_life_threshold: u64,
    /// Added to the threshold after each extra life
    pub extra_life_step: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

impl Tuning {
    pub fn classic() -> Self {
        Self {
            base_difficulty: 10,
            difficulty_increment: 20,
            difficulty_cap: 180,
            base_bombs: 8,
            bomb_multiplier: 0.2,
            drop_interval_ms: 200,
            bomb_base_speed: 50.0,
            bomber_base_speed: 50.0,
            bounce_band: 8.0,
            extra_life_threshold: 5000,
            extra_life_step: 1000,
        }
    }

    pub fn gentle() -> Self {
        Self {
            base_difficulty: 1,
            bounce_band: 12.0,
            ..Self::classic()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_round_trip_names() {
        for preset in [TuningPreset::Classic, TuningPreset::Gentle] {
            assert_eq!(TuningPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(TuningPreset::from_str("EASY"), Some(TuningPreset::Gentle));
        assert_eq!(TuningPreset::from_str("nightmare"), None);
    }

    #[test]
    fn test_preset_selects_tuning() {
        let tuning = TuningPreset::from_str("gentle").map(|p| p.tuning());
        assert_eq!(tuning, Some(Tuning::gentle()));
    }

    #[test]
    fn test_gentle_only_changes_start_and_band() {
        let classic = Tuning::classic();
        let gentle = Tuning::gentle();
        assert_eq!(gentle.base_difficulty, 1);
        assert_eq!(gentle.bounce_band, 12.0);
        assert_eq!(gentle.difficulty_cap, classic.difficulty_cap);
        assert_eq!(gentle.extra_life_threshold, classic.extra_life_threshold);
    }

    #[test]
    fn test_partial_json_is_rejected_not_guessed() {
        assert!(serde_json::from_str::<Tuning>(r#"{"base_difficulty": 3}"#).is_err());
    }
}
