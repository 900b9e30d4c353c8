//! Kibel - catch the bombs before they hit the grass
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rounds, scoring, bomb pool, drop timer)
//! - `input`: Pointer-lock and swipe mapping onto the bucket
//! - `platform`: Browser/native storage abstraction
//! - `highscores`: Persisted best score
//! - `session`: Owns the game state and wires engine callbacks into it
//! - `audio`: Sound cues for simulation events
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz keeps fast bombs from skipping the bucket)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame; one clamped frame fits exactly
    pub const MAX_SUBSTEPS: u32 = 12;

    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 256.0;
    pub const SCREEN_HEIGHT: f32 = 160.0;

    /// Bomber sprite and spawn point (anchor is the sprite center)
    pub const BOMBER_WIDTH: f32 = 16.0;
    pub const BOMBER_HEIGHT: f32 = 32.0;
    pub const BOMBER_START_X: f32 = 132.0;
    pub const BOMBER_Y: f32 = 16.0;

    /// Bucket sprite and spawn point (anchor is the sprite center)
    pub const BUCKET_WIDTH: f32 = 16.0;
    pub const BUCKET_HEIGHT: f32 = 32.0;
    pub const BUCKET_START_X: f32 = 132.0;
    pub const BUCKET_Y: f32 = 108.0;
    /// Top rim of the bucket that never catches
    pub const BUCKET_RIM: f32 = 10.0;
    /// Catch area lost per missing life
    pub const BUCKET_SHRINK_PER_LIFE: f32 = 9.0;

    /// Bomb sprite (anchor is the top-left corner)
    pub const BOMB_SIZE: f32 = 8.0;
    /// Bombs leave the bomber this far below its center
    pub const BOMB_DROP_OFFSET: f32 = 8.0;

    /// Full bucket: the starting life count and the extra-life cap
    pub const MAX_LIVES: u8 = 3;

    /// Pointer-lock movement is halved before it reaches the bucket
    pub const POINTER_LOCK_DIVISOR: f32 = 2.0;
    /// Viewport pixels per unit of swipe multiplier
    pub const SWIPE_VIEWPORT_STEP: f32 = 200.0;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
