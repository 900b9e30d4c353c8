//! Lives and score tracking
//!
//! Score, the extra-life accumulator and the in-memory high score move
//! together on every catch. Lives double as the bucket's catch capacity.

use super::state::GameEvent;
use crate::consts::MAX_LIVES;
use crate::tuning::Tuning;

/// Remaining lives, shown as how full the bucket is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives(u8);

impl Default for Lives {
    fn default() -> Self {
        Self::full()
    }
}

impl Lives {
    pub fn full() -> Self {
        Self(MAX_LIVES)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_full(&self) -> bool {
        self.0 >= MAX_LIVES
    }

    /// Lives missing from a full bucket
    pub fn reduced(&self) -> u8 {
        MAX_LIVES - self.0
    }

    /// Add one life unless already full. Returns true if a life was added.
    pub fn grant(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.0 += 1;
        true
    }

    /// Take one life. Returns false if this was the last one.
    pub fn take(&mut self) -> bool {
        self.0 = self.0.saturating_sub(1);
        self.0 > 0
    }
}

/// Score-related counters for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    pub score: u64,
    /// Best score seen this session; moves up live as `score` passes it
    pub high_score: u64,
    /// Best score as last read from or written to storage
    pub persisted_best: u64,
    /// Points collected toward the next extra life
    pub to_extra_life: u64,
    /// Points needed for the next extra life
    pub extra_life_threshold: u64,
    /// Extra lives earned this run, including ones the full bucket could not hold
    pub extra_lives: u32,
    /// Set when this run has beaten the stored best
    pub better_score: bool,
}

impl ScoreBoard {
    pub fn new(persisted_best: u64, tuning: &Tuning) -> Self {
        Self {
            score: 0,
            high_score: persisted_best,
            persisted_best,
            to_extra_life: 0,
            extra_life_threshold: tuning.extra_life_threshold,
            extra_lives: 0,
            better_score: false,
        }
    }
}

/// Credit a caught bomb worth `difficulty` points
pub fn on_bomb_caught(
    board: &mut ScoreBoard,
    lives: &mut Lives,
    difficulty: u32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let points = difficulty as u64;
    board.score += points;
    board.to_extra_life += points;
    events.push(GameEvent::BombCaught { points });

    if board.score > board.high_score {
        board.high_score = board.score;
        board.better_score = true;
    }

    if board.to_extra_life >= board.extra_life_threshold {
        board.to_extra_life -= board.extra_life_threshold;
        board.extra_life_threshold += tuning.extra_life_step;
        board.extra_lives += 1;
        if lives.grant() {
            log::info!("Extra life! ({} lives)", lives.get());
            events.push(GameEvent::ExtraLife { lives: lives.get() });
        } else {
            log::debug!("Extra life earned with a full bucket");
        }
    }
}

/// Take a life. Returns true if that ended the game.
///
/// On game over a run that beat the stored best settles the record as
/// `max(score, persisted_best)` and reports it so the caller can write it out.
pub fn on_life_lost(board: &mut ScoreBoard, lives: &mut Lives, events: &mut Vec<GameEvent>) -> bool {
    if lives.take() {
        events.push(GameEvent::LifeLost { lives: lives.get() });
        return false;
    }

    if board.better_score {
        let record = board.score.max(board.persisted_best);
        board.persisted_best = record;
        board.high_score = record;
        log::info!("New high score: {}", record);
        events.push(GameEvent::NewHighScore { score: record });
    }
    board.better_score = false;
    events.push(GameEvent::GameOver { score: board.score });
    true
}
