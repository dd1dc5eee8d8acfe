//! The controllable actor
//!
//! Only the vertical axis moves; x stays where the round placed it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::GameConfig;

/// The falling/jumping actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            velocity: 0.0,
        }
    }

    /// Actor at the configured spawn point, at rest
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Vec2::new(config.actor_x, config.actor_start_y),
            Vec2::new(config.actor_width, config.actor_height),
        )
    }

    /// Integrate one frame of gravity.
    ///
    /// The ceiling is soft: y is clamped to 0 but velocity is kept. Returns true
    /// when the actor's bottom edge has gone past `floor`; that breach is left
    /// unclamped for the round to end on.
    pub fn apply_gravity(&mut self, gravity: f32, floor: f32) -> bool {
        self.velocity += gravity;
        self.pos.y += self.velocity;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        }
        self.bottom() > floor
    }

    /// Replace the current velocity with an upward impulse
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// Back to a resting spawn point
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.velocity = 0.0;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}
