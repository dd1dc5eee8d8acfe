//! Gap obstacles and the field that spawns, scrolls and recycles them

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::{actor_obstacle_collision, cleared};
use crate::settings::Tuning;

/// A pair of columns with a vertical opening between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (decreases as the field scrolls)
    pub x: f32,
    /// Top of the opening
    pub gap_top: f32,
    /// Bottom of the opening (always below `gap_top`)
    pub gap_bottom: f32,
    pub width: f32,
    /// Set once the actor has cleared this obstacle; never unset
    #[serde(default)]
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32, gap_bottom: f32, width: f32) -> Self {
        debug_assert!(gap_top < gap_bottom);
        Self {
            x,
            gap_top,
            gap_bottom,
            width,
            passed: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_size(&self) -> f32 {
        self.gap_bottom - self.gap_top
    }

    /// Entirely left of the field
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Obstacles currently in play, oldest (leftmost) first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Most recently spawned obstacle
    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    /// Spawn a new obstacle at the right edge once the newest one has scrolled
    /// `spawn_spacing` into the field. Spawns at most one obstacle per call.
    ///
    /// Gap size is drawn from `[gap_min, gap_max]` and the gap top from
    /// `[gap_margin, field_height - gap - gap_margin)`. Expects a validated
    /// config; an inverted gap range collapses to `gap_min` and a field too
    /// short for the gap pins it to the top margin.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        field_width: f32,
        field_height: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> bool {
        let due = match self.newest() {
            None => true,
            Some(newest) => newest.x < field_width - tuning.spawn_spacing,
        };
        if !due {
            return false;
        }

        let gap_max = tuning.gap_max.max(tuning.gap_min);
        let gap = rng.random_range(tuning.gap_min..=gap_max) as f32;
        let span = (field_height - gap - 2.0 * tuning.gap_margin).max(0.0);
        let gap_top = tuning.gap_margin + rng.random::<f32>() * span;

        log::debug!(
            "Spawned obstacle: gap {}..{} ({}px)",
            gap_top,
            gap_top + gap,
            gap
        );
        self.obstacles.push(Obstacle::new(
            field_width,
            gap_top,
            gap_top + gap,
            tuning.obstacle_width,
        ));
        true
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop obstacles that have left the field. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.off_screen());
        before - self.obstacles.len()
    }

    /// Whether the actor hits any obstacle
    pub fn check_collision(&self, actor: &Actor) -> bool {
        self.obstacles
            .iter()
            .any(|o| actor_obstacle_collision(actor, o))
    }

    /// Mark obstacles the actor has cleared. Returns the number newly passed;
    /// each obstacle is counted at most once.
    pub fn check_scoring(&mut self, actor: &Actor) -> u32 {
        let mut newly_passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if cleared(actor, obstacle) {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Number of obstacles still in play that have been passed
    pub fn passed_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.passed).count()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
