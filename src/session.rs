//! A play session
//!
//! Owns the game state together with the pieces the simulation must not
//! touch: storage and pointer input. Platform callbacks forward into these
//! methods and read events back out to drive audio and the HUD.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::highscores::HighScore;
use crate::input::{InputMapper, InputMode, PointerMotion};
use crate::platform::Storage;
use crate::sim::{self, GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

pub struct Session<S: Storage> {
    pub state: GameState,
    pub input: InputMapper,
    storage: S,
    /// Applied on the next simulation step
    pending: TickInput,
    /// Frame time not yet consumed by fixed steps
    accumulator: f32,
    events: Vec<GameEvent>,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S, tuning: Tuning, seed: u64, mode: InputMode, viewport_width: f32) -> Self {
        let best = HighScore::load(&storage).score;
        Self {
            state: GameState::new(seed, tuning, best),
            input: InputMapper::new(mode, viewport_width),
            storage,
            pending: TickInput::default(),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Click/tap: start a round (or a new game after game over) and arm swiping
    pub fn pointer_down(&mut self, x: f32) {
        self.start_round();
        self.input.press(x);
    }

    pub fn pointer_move(&mut self, motion: &PointerMotion) {
        if !self.state.bucket.visible {
            return;
        }
        if let Some(x) = self.input.pointer_moved(motion, self.state.bucket.pos.x) {
            self.state.bucket.move_to(x);
        }
    }

    pub fn pointer_up(&mut self) {
        self.input.release(self.state.bucket.pos.x);
    }

    /// Start the next round. After a game over this resets the run instead
    /// and picks up the stored high score.
    pub fn start_round(&mut self) {
        if self.state.game_over {
            let best = HighScore::load(&self.storage).score;
            self.state.reset_for_new_game(best);
            return;
        }
        sim::start_round(&mut self.state, &mut self.events);
    }

    /// Steer the bucket directly on the next frame
    pub fn set_bucket_target(&mut self, x: f32) {
        self.pending.bucket_x = Some(x);
    }

    /// Advance one rendered frame in fixed `SIM_DT` steps and return what
    /// happened. Leftover time carries into the next frame.
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // One-shot input goes to the first step only
            let input = std::mem::take(&mut self.pending);
            sim::tick(&mut self.state, &input, SIM_DT, &mut self.events);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        for event in &self.events {
            if let GameEvent::NewHighScore { score } = *event {
                HighScore::new(score).save(&mut self.storage);
            }
        }
        std::mem::take(&mut self.events)
    }
}
