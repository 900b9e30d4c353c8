//! Round controller
//!
//! Advances the simulation one frame at a time: drop timer, movement,
//! bomber bounce, round completion, missed bombs and catches. All round
//! state transitions happen in this file.

use glam::Vec2;
use rand::Rng;

use super::body::{Body, bounce_horizontal, world_bounds};
use super::difficulty::{bomb_count, bomb_speed, bomber_speed, next_difficulty, reduced_difficulty};
use super::scoring::{on_bomb_caught, on_life_lost};
use super::state::{GameEvent, GameState, RoundState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Where the player wants the bucket (sprite center x)
    pub bucket_x: Option<f32>,
}

/// Begin a round if none is running. Returns true if a round started.
///
/// Called straight from the click/tap handler; a finished game is not
/// restarted here, see `Session::start_round`.
pub fn start_round(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if state.round != RoundState::Idle || state.game_over || state.bomber.dropping {
        return false;
    }

    state.bomber.dropping = true;
    state.bomber.smiling = false;
    state.round = RoundState::Active;
    state.bomb_count = bomb_count(state.difficulty, &state.tuning);
    state
        .drop_timer
        .start(state.tuning.drop_interval_ms, state.bomb_count);

    log::info!(
        "Round started: difficulty {}, {} bombs",
        state.difficulty,
        state.bomb_count
    );
    events.push(GameEvent::RoundStarted {
        bombs: state.bomb_count,
    });
    true
}

/// Release one bomb from the bomber and send the bomber off in a random
/// direction
pub fn drop_bomb(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.bomb_count == 0 || state.round != RoundState::Active {
        return;
    }

    let pos = state.bomber.drop_point();
    let vel = Vec2::new(0.0, bomb_speed(state.difficulty, &state.tuning));
    state.bombs.acquire(pos, vel);

    let speed = bomber_speed(state.difficulty, &state.tuning);
    state.bomber.vel.x = if state.rng.random_bool(0.5) { speed } else { -speed };

    state.bomb_count -= 1;
    events.push(GameEvent::BombDropped);
}

/// Advance the game state by one step of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    if let Some(x) = input.bucket_x {
        if state.bucket.visible {
            state.bucket.move_to(x);
        }
    }

    if state.game_over {
        return;
    }

    let due = state.drop_timer.advance(dt * 1000.0);
    for _ in 0..due {
        drop_bomb(state, events);
    }

    state.bomber.integrate(dt);
    for bomb in state.bombs.iter_alive_mut() {
        bomb.integrate(dt);
    }

    bounce_horizontal(&mut state.bomber, state.tuning.bounce_band);

    check_round_complete(state, events);
    check_missed_bombs(state, events);
    collect_catches(state, events);
}

/// Close the round once every bomb is dropped and none is still falling,
/// settling a pending life loss
fn check_round_complete(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.round == RoundState::Idle || state.bomb_count > 0 || state.bombs.airborne() > 0 {
        return;
    }

    let losing_life = state.round == RoundState::Resolving;
    state.round = RoundState::Idle;
    state.bomber.dropping = false;
    state.bomber.vel.x = 0.0;
    state.difficulty = next_difficulty(state.difficulty, &state.tuning);

    if !losing_life {
        state.rounds_cleared += 1;
        log::info!("Round cleared, difficulty now {}", state.difficulty);
        events.push(GameEvent::RoundCleared {
            difficulty: state.difficulty,
        });
        return;
    }

    state.bomber.smiling = true;
    let game_over = on_life_lost(&mut state.board, &mut state.lives, events);
    state.bucket.sync_lives(state.lives);
    if game_over {
        state.game_over = true;
        state.bucket.visible = false;
        log::info!("Game over with {} points", state.board.score);
    }
    state.difficulty = reduced_difficulty(state.difficulty, &state.tuning);
    log::debug!("Life lost, difficulty now {}", state.difficulty);
}

/// A bomb past the bottom edge costs a life: stop dropping and clear the board
fn check_missed_bombs(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let floor = world_bounds().max.y;
    let missed = state
        .bombs
        .iter_alive()
        .any(|(_, bomb)| bomb.pos.y > floor);
    if !missed {
        return;
    }

    state.bombs.release_all();
    state.drop_timer.pause();
    state.bomb_count = 0;
    state.round = RoundState::Resolving;
    log::debug!("Bomb missed");
    events.push(GameEvent::BombMissed);
}

fn collect_catches(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.bucket.visible {
        return;
    }
    let bucket = &state.bucket;
    let caught: Vec<usize> = state
        .bombs
        .iter_alive()
        .filter(|(_, bomb)| bomb.touches(bucket))
        .map(|(idx, _)| idx)
        .collect();

    for idx in caught {
        state.bombs.release(idx);
        on_bomb_caught(
            &mut state.board,
            &mut state.lives,
            state.difficulty,
            &state.tuning,
            events,
        );
        state.bucket.sync_lives(state.lives);
    }
}
