//! Minimal physics bodies
//!
//! Everything on screen is an axis-aligned box with a velocity. Any engine
//! that can answer these questions can host the simulation.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of `size` whose top-left corner sits at `pos`
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    /// Box of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Strict overlap; boxes that only share an edge do not touch
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Capabilities the simulation needs from a moving entity
pub trait Body {
    /// Collision box in screen space
    fn aabb(&self) -> Aabb;

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, vel: Vec2);

    /// Move so the collision box lies inside the world horizontally
    fn clamp_to_world(&mut self);

    /// True if the box overlaps `other`
    fn touches(&self, other: &dyn Body) -> bool {
        self.aabb().overlaps(&other.aabb())
    }
}

/// The visible play area
pub fn world_bounds() -> Aabb {
    Aabb::new(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
}

/// Horizontal center position that keeps a box of `width` on screen
pub fn clamp_center_x(x: f32, width: f32) -> f32 {
    let half = width / 2.0;
    x.clamp(half, SCREEN_WIDTH - half)
}

/// Flip a body's horizontal velocity when its center is within `band` of a
/// side of the world and still heading outward. Returns true if the velocity
/// was reflected.
pub fn bounce_horizontal(body: &mut dyn Body, band: f32) -> bool {
    let world = world_bounds();
    let x = body.aabb().center().x;
    let mut vel = body.velocity();
    let heading_out =
        (x < world.min.x + band && vel.x < 0.0) || (x > world.max.x - band && vel.x > 0.0);
    if heading_out {
        vel.x = -vel.x;
        body.set_velocity(vel);
    }
    heading_out
}
