//! Deterministic simulation module
//!
//! All per-round gameplay logic lives here. This module must be pure and deterministic:
//! - Driver-supplied ticks only (no clocks, no callbacks)
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{actor_obstacle_collision, cleared, horizontal_overlap, outside_gap};
pub use obstacles::{Obstacle, ObstacleField};
pub use state::{EndCause, GameEvent, RoundPhase, RoundState};
pub use tick::{TickInput, TickOutcome, autopilot_wants_jump, countdown_tick, tick};
