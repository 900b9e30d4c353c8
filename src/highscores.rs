//! Persisted high score
//!
//! A single `{ "score": n }` record. Missing or unreadable records count as 0.

use serde::{Deserialize, Serialize};

use crate::platform::Storage;

/// The best score ever recorded on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScore {
    pub score: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "kibel_highscore";

    pub fn new(score: u64) -> Self {
        Self { score }
    }

    /// Read the record, defaulting to 0 when absent or corrupt
    pub fn load(storage: &impl Storage) -> Self {
        let Some(json) = storage.get_item(Self::STORAGE_KEY) else {
            log::info!("No high score found, starting fresh");
            return Self::default();
        };

        match serde_json::from_str::<HighScore>(&json) {
            Ok(record) => {
                log::info!("Loaded high score {}", record.score);
                record
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score ({}): {}", e, json);
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(self) {
            Ok(json) => {
                storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved ({})", self.score);
            }
            Err(e) => log::warn!("Could not encode high score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        HighScore::new(500).save(&mut storage);
        assert_eq!(HighScore::load(&storage).score, 500);
    }

    #[test]
    fn test_wire_format() {
        let mut storage = MemoryStorage::new();
        HighScore::new(42).save(&mut storage);
        assert_eq!(
            storage.get_item(HighScore::STORAGE_KEY).as_deref(),
            Some(r#"{"score":42}"#)
        );
    }

    #[test]
    fn test_missing_record_is_zero() {
        let storage = MemoryStorage::new();
        assert_eq!(HighScore::load(&storage), HighScore::new(0));
    }

    #[test]
    fn test_corrupt_record_is_zero() {
        let mut storage = MemoryStorage::new();
        storage.set_item(HighScore::STORAGE_KEY, "{not json");
        assert_eq!(HighScore::load(&storage).score, 0);

        storage.set_item(HighScore::STORAGE_KEY, r#"{"score":-3}"#);
        assert_eq!(HighScore::load(&storage).score, 0);
    }
}
