//! Per-frame simulation tick and countdown timer
//!
//! The core never schedules itself: a driver calls [`tick`] once per display
//! frame and [`countdown_tick`] on a coarse interval timer.

use super::state::{EndCause, GameEvent, RoundPhase, RoundState};
use crate::settings::GameConfig;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (click/tap/space)
    pub jump: bool,
    /// Idle/demo mode - autopilot decides when to jump
    pub idle_mode: bool,
}

/// What a frame tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round not Active; nothing simulated
    Skipped,
    /// Frame simulated, `scored` obstacles newly cleared
    Running { scored: u32 },
    /// Frame simulated and the round ended on it
    Ended(EndCause),
}

/// Advance one countdown step. On reaching zero the round is reset and goes
/// Active. Returns true when play has just begun.
pub fn countdown_tick(state: &mut RoundState, config: &GameConfig) -> bool {
    if state.phase != RoundPhase::Countdown {
        return false;
    }

    state.countdown = state.countdown.saturating_sub(1);
    if state.countdown > 0 {
        log::debug!("Countdown: {}", state.countdown);
        state.push_event(GameEvent::CountdownTick {
            remaining: state.countdown,
        });
        return false;
    }

    state.begin_play(config);
    true
}

/// Advance the round by one frame
///
/// Order: gravity, floor check, spawn, scroll, prune, obstacle collision,
/// scoring. A freshly spawned obstacle is scrolled once on its spawn frame.
pub fn tick(state: &mut RoundState, input: &TickInput, config: &GameConfig) -> TickOutcome {
    if !state.is_active() {
        return TickOutcome::Skipped;
    }

    let tuning = &config.tuning;

    let wants_jump = input.jump || (input.idle_mode && autopilot_wants_jump(state, config));
    if wants_jump {
        state.jump(tuning.jump_impulse);
    }

    state.frames += 1;

    if state.actor.apply_gravity(tuning.gravity, config.field_height) {
        state.end(EndCause::Ground);
        return TickOutcome::Ended(EndCause::Ground);
    }

    state.spawn_obstacle(config);
    state.obstacles.advance(tuning.speed);
    state.obstacles.prune();

    if state.obstacles.check_collision(&state.actor) {
        state.end(EndCause::Obstacle);
        return TickOutcome::Ended(EndCause::Obstacle);
    }

    let scored = state.obstacles.check_scoring(&state.actor);
    if scored > 0 {
        state.score += scored;
        state.push_event(GameEvent::Scored { score: state.score });
        log::debug!("Score: {}", state.score);
    }

    TickOutcome::Running { scored }
}

/// Demo-mode controller: keep the actor's bottom edge just above the bottom
/// of the next gap it has to clear (or mid-field when none is in play).
pub fn autopilot_wants_jump(state: &RoundState, config: &GameConfig) -> bool {
    let actor = &state.actor;
    if actor.velocity < 0.0 {
        return false;
    }

    let target_bottom = state
        .obstacles
        .obstacles()
        .iter()
        .find(|o| o.right() >= actor.left())
        .map(|o| o.gap_bottom - 10.0)
        .unwrap_or((config.field_height + actor.size.y) / 2.0);

    let predicted_bottom = actor.bottom() + actor.velocity + config.tuning.gravity;
    predicted_bottom > target_bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::Obstacle;

    fn active_round(config: &GameConfig, seed: u64) -> RoundState {
        let mut state = RoundState::new(config, seed);
        state.begin_countdown(config.countdown_start);
        while !countdown_tick(&mut state, config) {}
        state.events.clear();
        state
    }

    #[test]
    fn test_countdown_to_active() {
        let config = GameConfig::default();
        let mut state = RoundState::new(&config, 1);
        state.begin_countdown(3);

        assert!(!countdown_tick(&mut state, &config));
        assert_eq!(state.countdown, 2);
        assert!(!countdown_tick(&mut state, &config));
        assert_eq!(state.countdown, 1);
        assert_eq!(state.phase, RoundPhase::Countdown);
        assert!(countdown_tick(&mut state, &config));
        assert_eq!(state.phase, RoundPhase::Active);

        assert_eq!(
            state.events,
            vec![
                GameEvent::CountdownStarted { from: 3 },
                GameEvent::CountdownTick { remaining: 2 },
                GameEvent::CountdownTick { remaining: 1 },
                GameEvent::RoundStarted,
            ]
        );

        // Timer ticks outside Countdown do nothing
        assert!(!countdown_tick(&mut state, &config));
        assert_eq!(state.phase, RoundPhase::Active);
    }

    #[test]
    fn test_tick_skipped_unless_active() {
        let config = GameConfig::default();
        let mut state = RoundState::new(&config, 1);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, &config), TickOutcome::Skipped);

        state.begin_countdown(3);
        assert_eq!(tick(&mut state, &input, &config), TickOutcome::Skipped);
        assert_eq!(state.actor.velocity, 0.0);
        assert_eq!(state.frames, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_first_frame_spawns_and_scrolls_once() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        tick(&mut state, &TickInput::default(), &config);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(
            state.obstacles.obstacles()[0].x,
            config.field_width - config.tuning.speed
        );
        assert_eq!(state.actor.pos.y, config.actor_start_y + 0.5);
    }

    #[test]
    fn test_falls_to_ground_and_ends_once() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        let input = TickInput::default();

        let mut ended = 0;
        for _ in 0..200 {
            match tick(&mut state, &input, &config) {
                TickOutcome::Ended(cause) => {
                    assert_eq!(cause, EndCause::Ground);
                    ended += 1;
                }
                TickOutcome::Running { .. } => assert!(state.actor.pos.y >= 0.0),
                TickOutcome::Skipped => {}
            }
        }

        assert_eq!(ended, 1);
        assert_eq!(state.phase, RoundPhase::Ended);
        let frozen_frames = state.frames;
        let frozen_y = state.actor.pos.y;
        tick(&mut state, &input, &config);
        assert_eq!(state.frames, frozen_frames);
        assert_eq!(state.actor.pos.y, frozen_y);
    }

    #[test]
    fn test_obstacle_hit_ends_round() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        state.obstacles.push(Obstacle::new(60.0, 0.0, 100.0, 50.0));

        let outcome = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(outcome, TickOutcome::Ended(EndCause::Obstacle));
        assert_eq!(state.end_cause, Some(EndCause::Obstacle));
        assert_eq!(
            state.events.last(),
            Some(&GameEvent::RoundEnded {
                score: 0,
                cause: EndCause::Obstacle
            })
        );
    }

    #[test]
    fn test_clearing_an_obstacle_scores() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        state.obstacles.push(Obstacle::new(-2.0, 100.0, 500.0, 50.0));

        let outcome = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(outcome, TickOutcome::Running { scored: 1 });
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.passed_count(), 1);
        assert!(state.events.contains(&GameEvent::Scored { score: 1 }));

        let outcome = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(outcome, TickOutcome::Running { scored: 0 });
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_jump_input_applied_before_gravity() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &input, &config);
        assert_eq!(state.actor.velocity, -8.5);
        assert_eq!(state.actor.pos.y, config.actor_start_y - 8.5);
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig::default();
        let mut state1 = active_round(&config, 99999);
        let mut state2 = active_round(&config, 99999);

        for frame in 0..300u32 {
            let input = TickInput {
                jump: frame % 17 == 0,
                idle_mode: true,
            };
            let a = tick(&mut state1, &input, &config);
            let b = tick(&mut state2, &input, &config);
            assert_eq!(a, b);
        }

        assert_eq!(state1.obstacles.obstacles(), state2.obstacles.obstacles());
        assert_eq!(state1.actor, state2.actor);
        assert_eq!(state1.score, state2.score);
    }

    #[test]
    fn test_autopilot_jumps_when_sinking_below_gap() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        state.obstacles.push(Obstacle::new(200.0, 100.0, 300.0, 50.0));

        // Bottom at 330, below the 290 target
        assert!(autopilot_wants_jump(&state, &config));

        // Rising: leave it alone
        state.actor.velocity = -4.0;
        assert!(!autopilot_wants_jump(&state, &config));

        // Comfortably inside the gap
        state.actor.velocity = 0.0;
        state.actor.pos.y = 150.0;
        assert!(!autopilot_wants_jump(&state, &config));
    }

    #[test]
    fn test_autopilot_ignores_cleared_obstacles() {
        let config = GameConfig::default();
        let mut state = active_round(&config, 5);
        state.actor.pos.y = 250.0;
        // Cleared obstacle with a high gap, then a low one still ahead
        state.obstacles.push(Obstacle::new(-20.0, 50.0, 200.0, 50.0));
        state.obstacles.push(Obstacle::new(150.0, 350.0, 520.0, 50.0));
        assert!(!autopilot_wants_jump(&state, &config));
    }
}
