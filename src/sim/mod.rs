//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame deltas only
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies

pub mod body;
pub mod difficulty;
pub mod pool;
pub mod round;
pub mod scoring;
pub mod state;
pub mod timer;

pub use body::{Aabb, Body};
pub use difficulty::{bomb_count, next_difficulty, reduced_difficulty};
pub use pool::{Bomb, BombPool};
pub use round::{TickInput, drop_bomb, start_round, tick};
pub use scoring::{Lives, ScoreBoard, on_bomb_caught, on_life_lost};
pub use state::{Bomber, Bucket, GameEvent, GameState, RoundState};
pub use timer::DropTimer;
