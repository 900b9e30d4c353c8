//! Bomb pool
//!
//! Bombs are recycled across rounds: releasing one only marks it inactive,
//! and `acquire` hands back an inactive slot before growing the pool.

use glam::Vec2;

use super::body::{Aabb, Body};
use crate::consts::BOMB_SIZE;

/// A bomb entity
#[derive(Debug, Clone, PartialEq)]
pub struct Bomb {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub vel: Vec2,
    pub alive: bool,
}

impl Bomb {
    fn spawn(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            alive: true,
        }
    }

    /// Reset into a freshly dropped state
    pub fn reset(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
        self.alive = true;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

impl Body for Bomb {
    fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(BOMB_SIZE))
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn clamp_to_world(&mut self) {
        // Bombs fall freely; leaving the screen is how they get missed
    }
}

#[derive(Debug, Clone, Default)]
pub struct BombPool {
    bombs: Vec<Bomb>,
}

impl BombPool {
    pub fn new() -> Self {
        Self { bombs: Vec::new() }
    }

    /// Activate a bomb at `pos` with `vel`, reusing a dead slot if possible.
    /// Returns the slot index.
    pub fn acquire(&mut self, pos: Vec2, vel: Vec2) -> usize {
        if let Some(idx) = self.bombs.iter().position(|b| !b.alive) {
            self.bombs[idx].reset(pos, vel);
            idx
        } else {
            self.bombs.push(Bomb::spawn(pos, vel));
            self.bombs.len() - 1
        }
    }

    /// Deactivate one bomb
    pub fn release(&mut self, idx: usize) {
        if let Some(bomb) = self.bombs.get_mut(idx) {
            bomb.alive = false;
        }
    }

    /// Deactivate every bomb, keeping the allocations
    pub fn release_all(&mut self) {
        for bomb in &mut self.bombs {
            bomb.alive = false;
        }
    }

    /// Number of bombs currently falling
    pub fn airborne(&self) -> usize {
        self.bombs.iter().filter(|b| b.alive).count()
    }

    /// Total slots ever allocated
    pub fn capacity(&self) -> usize {
        self.bombs.len()
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Bomb)> {
        self.bombs.iter().enumerate().filter(|(_, b)| b.alive)
    }

    pub fn iter_alive_mut(&mut self) -> impl Iterator<Item = &mut Bomb> {
        self.bombs.iter_mut().filter(|b| b.alive)
    }
}
