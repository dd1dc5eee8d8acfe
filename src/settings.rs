//! Game configuration and difficulty presets
//!
//! Loaded from a JSON file by the native driver; every field falls back to the
//! normal preset when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    #[default]
    Normal,
    Easy,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Easy => "Easy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "norm" => Some(DifficultyPreset::Normal),
            "easy" => Some(DifficultyPreset::Easy),
            _ => None,
        }
    }

    /// Physics and obstacle tuning for this preset
    pub fn tuning(&self) -> Tuning {
        match self {
            DifficultyPreset::Normal => Tuning::default(),
            DifficultyPreset::Easy => Tuning {
                jump_impulse: -8.0,
                speed: 2.0,
                gap_min: 170,
                gap_max: 170,
                ..Tuning::default()
            },
        }
    }
}

/// Per-frame physics and obstacle parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the actor's velocity every frame
    pub gravity: f32,
    /// Velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Obstacle scroll speed (pixels per frame)
    pub speed: f32,
    /// Smallest gap size (inclusive)
    pub gap_min: u32,
    /// Largest gap size (inclusive)
    pub gap_max: u32,
    pub spawn_spacing: f32,
    pub obstacle_width: f32,
    pub gap_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -9.0,
            speed: 3.0,
            gap_min: 150,
            gap_max: 230,
            spawn_spacing: SPAWN_SPACING,
            obstacle_width: OBSTACLE_WIDTH,
            gap_margin: GAP_MARGIN,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,

    // === Actor ===
    pub actor_x: f32,
    pub actor_start_y: f32,
    pub actor_width: f32,
    pub actor_height: f32,

    // === Session ===
    /// Attempts each player gets before their total is ranked
    pub attempt_limit: u32,
    /// Countdown value shown before each attempt
    pub countdown_start: u32,

    pub tuning: Tuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            actor_x: ACTOR_X,
            actor_start_y: ACTOR_START_Y,
            actor_width: ACTOR_SIZE,
            actor_height: ACTOR_SIZE,

            attempt_limit: ATTEMPT_LIMIT,
            countdown_start: COUNTDOWN_START,

            tuning: Tuning::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration from a difficulty preset
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        Self {
            tuning: preset.tuning(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Check that the configuration describes a playable field
    pub fn validate(&self) -> Result<()> {
        let t = &self.tuning;
        let invalid = |msg: String| -> Result<()> { Err(GameError::InvalidConfig(msg)) };

        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return invalid(format!(
                "field must have a positive size, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if self.actor_width <= 0.0 || self.actor_height <= 0.0 {
            return invalid("actor must have a positive size".to_string());
        }
        if self.actor_start_y < 0.0 || self.actor_start_y + self.actor_height > self.field_height {
            return invalid(format!(
                "actor start y {} does not fit inside the field",
                self.actor_start_y
            ));
        }
        if self.attempt_limit == 0 {
            return invalid("attempt_limit must be at least 1".to_string());
        }
        if self.countdown_start == 0 {
            return invalid("countdown_start must be at least 1".to_string());
        }
        if t.gap_min == 0 || t.gap_min > t.gap_max {
            return invalid(format!("bad gap range [{}, {}]", t.gap_min, t.gap_max));
        }
        if self.field_height - t.gap_max as f32 - 2.0 * t.gap_margin <= 0.0 {
            return invalid(format!(
                "field height {} leaves no room for a {} gap with {} margins",
                self.field_height, t.gap_max, t.gap_margin
            ));
        }
        if t.gap_margin < 0.0 {
            return invalid("gap_margin must not be negative".to_string());
        }
        if t.jump_impulse >= 0.0 {
            return invalid(format!("jump_impulse must be negative, got {}", t.jump_impulse));
        }
        if t.gravity <= 0.0 || t.speed <= 0.0 {
            return invalid("gravity and speed must be positive".to_string());
        }
        if t.obstacle_width <= 0.0 || t.spawn_spacing <= 0.0 {
            return invalid("obstacle_width and spawn_spacing must be positive".to_string());
        }

        Ok(())
    }
}
