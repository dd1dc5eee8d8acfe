//! Gap Flyer - a one-button arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (actor physics, obstacles, collisions)
//! - `session`: Attempt tracking for the current player
//! - `highscores`: Top-3 leaderboard
//! - `game`: Process-wide game context tying the above together
//! - `settings`: Difficulty presets and configuration loading

pub mod error;
pub mod game;
pub mod highscores;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use game::{Frame, Game, GameInput};
pub use highscores::{HighScoreEntry, HighScores};
pub use session::Session;
pub use settings::{DifficultyPreset, GameConfig, Tuning};

/// Game configuration constants
pub mod consts {
    /// Expected frame tick rate of the driver (one tick per display refresh)
    pub const FRAME_RATE_HZ: u32 = 60;
    /// Interval between countdown timer ticks
    pub const COUNTDOWN_INTERVAL_MS: u64 = 700;
    /// Countdown starting value
    pub const COUNTDOWN_START: u32 = 3;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_START_Y: f32 = 300.0;
    pub const ACTOR_SIZE: f32 = 30.0;

    /// Attempts per player
    pub const ATTEMPT_LIMIT: u32 = 3;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    /// Horizontal distance the newest obstacle must travel before the next spawns
    pub const SPAWN_SPACING: f32 = 200.0;
    /// Minimum distance between a gap and the top/bottom of the field
    pub const GAP_MARGIN: f32 = 50.0;

    /// Undrained events kept before the oldest are dropped
    pub const MAX_QUEUED_EVENTS: usize = 256;

    /// Name used for leaderboard entries when the player gives none
    pub const PLACEHOLDER_NAME: &str = "Anonymous";
}
