//! Game state and core simulation types
//!
//! One owned record holds everything a run needs; engine callbacks get a
//! mutable reference to it instead of reaching for globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Aabb, Body, clamp_center_x};
use super::pool::BombPool;
use super::scoring::{Lives, ScoreBoard};
use super::timer::DropTimer;
use crate::consts::*;
use crate::tuning::Tuning;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player to start a round
    Idle,
    /// Bomber is dropping and bombs are falling
    Active,
    /// A bomb was missed; the board is cleared and the lost life is settled
    /// on the next completion check
    Resolving,
}

/// Things that happened during a tick, for audio and HUD feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { bombs: u32 },
    BombDropped,
    BombCaught { points: u64 },
    BombMissed,
    ExtraLife { lives: u8 },
    RoundCleared { difficulty: u32 },
    LifeLost { lives: u8 },
    /// The stored best should become `score`
    NewHighScore { score: u64 },
    GameOver { score: u64 },
}

/// The character at the top of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Bomber {
    /// Sprite center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Currently working through a round's bombs
    pub dropping: bool,
    /// Grins after taking one of the player's lives
    pub smiling: bool,
}

impl Default for Bomber {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BOMBER_START_X, BOMBER_Y),
            vel: Vec2::ZERO,
            dropping: false,
            smiling: false,
        }
    }
}

impl Bomber {
    /// Where a dropped bomb's top-left corner appears
    pub fn drop_point(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + BOMB_DROP_OFFSET)
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

impl Body for Bomber {
    fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(BOMBER_WIDTH, BOMBER_HEIGHT))
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn clamp_to_world(&mut self) {
        // The bomber turns around near the edges instead of being clamped
    }
}

/// The player's bucket
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Sprite center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Lives missing from a full bucket; shrinks the catch area
    pub reduced: u8,
    pub visible: bool,
}

impl Default for Bucket {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BUCKET_START_X, BUCKET_Y),
            vel: Vec2::ZERO,
            reduced: 0,
            visible: true,
        }
    }
}

impl Bucket {
    /// Match the catch area to the current life count
    pub fn sync_lives(&mut self, lives: Lives) {
        self.reduced = lives.reduced();
    }

    /// Place the bucket at `x`, kept inside the world
    pub fn move_to(&mut self, x: f32) {
        self.pos.x = x;
        self.clamp_to_world();
    }
}

impl Body for Bucket {
    /// Catch area: the lower part of the sprite, minus the rim and one band
    /// per missing life
    fn aabb(&self) -> Aabb {
        let shrink = self.reduced as f32 * BUCKET_SHRINK_PER_LIFE;
        let top = self.pos.y - BUCKET_HEIGHT / 2.0 + BUCKET_RIM + shrink;
        let bottom = self.pos.y + BUCKET_HEIGHT / 2.0;
        let half_w = BUCKET_WIDTH / 2.0;
        Aabb::new(
            Vec2::new(self.pos.x - half_w, top),
            Vec2::new(self.pos.x + half_w, bottom),
        )
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn clamp_to_world(&mut self) {
        self.pos.x = clamp_center_x(self.pos.x, BUCKET_WIDTH);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Seeded once per session; a restart keeps drawing from the same stream
    pub rng: Pcg32,
    pub round: RoundState,
    pub game_over: bool,
    pub difficulty: u32,
    /// Bombs still to drop this round (not bombs on screen)
    pub bomb_count: u32,
    pub rounds_cleared: u32,
    pub lives: Lives,
    pub board: ScoreBoard,
    pub bomber: Bomber,
    pub bucket: Bucket,
    pub bombs: BombPool,
    pub drop_timer: DropTimer,
}

impl GameState {
    /// Create a fresh run. `persisted_best` is the high score read from storage.
    pub fn new(seed: u64, tuning: Tuning, persisted_best: u64) -> Self {
        let board = ScoreBoard::new(persisted_best, &tuning);
        Self {
            difficulty: tuning.base_difficulty,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            round: RoundState::Idle,
            game_over: false,
            bomb_count: 0,
            rounds_cleared: 0,
            lives: Lives::full(),
            board,
            bomber: Bomber::default(),
            bucket: Bucket::default(),
            bombs: BombPool::new(),
            drop_timer: DropTimer::default(),
        }
    }

    /// Start over after a game over, keeping the seed stream and the bomb pool
    pub fn reset_for_new_game(&mut self, persisted_best: u64) {
        self.board = ScoreBoard::new(persisted_best, &self.tuning);
        self.lives = Lives::full();
        self.game_over = false;
        self.round = RoundState::Idle;
        self.difficulty = self.tuning.base_difficulty;
        self.bomb_count = 0;
        self.rounds_cleared = 0;
        self.bomber = Bomber::default();
        self.bucket = Bucket::default();
        self.bombs.release_all();
        self.drop_timer.pause();
        log::info!("New game (high score {})", persisted_best);
    }

    pub fn score(&self) -> u64 {
        self.board.score
    }

    pub fn high_score(&self) -> u64 {
        self.board.high_score
    }
}
