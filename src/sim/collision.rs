//! Collision tests between the actor and gap obstacles
//!
//! An obstacle is two solid columns sharing the same x span, with an open gap
//! between `gap_top` and `gap_bottom`. The actor hits it when the x spans overlap
//! and any part of the actor sits outside the gap.

use super::actor::Actor;
use super::obstacles::Obstacle;

/// Whether the actor and obstacle x spans overlap (touching edges do not count)
#[inline]
pub fn horizontal_overlap(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.left() < obstacle.right() && actor.right() > obstacle.x
}

/// Whether any part of the actor is above or below the obstacle's gap
#[inline]
pub fn outside_gap(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.top() < obstacle.gap_top || actor.bottom() > obstacle.gap_bottom
}

/// Check collision between the actor and a single obstacle
pub fn actor_obstacle_collision(actor: &Actor, obstacle: &Obstacle) -> bool {
    horizontal_overlap(actor, obstacle) && outside_gap(actor, obstacle)
}

/// Whether the obstacle has fully scrolled past the actor's left edge
#[inline]
pub fn cleared(actor: &Actor, obstacle: &Obstacle) -> bool {
    obstacle.right() < actor.left()
}
