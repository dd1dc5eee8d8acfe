//! Round state and core simulation types
//!
//! Everything a single attempt needs lives here; attempts and rankings are
//! tracked one level up in [`crate::game::Game`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacles::ObstacleField;
use crate::consts::MAX_QUEUED_EVENTS;
use crate::settings::GameConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for start input
    Idle,
    /// Counting down before play, ignores input
    Countdown,
    /// Physics and obstacles running, jump accepted
    Active,
    /// Round over, score frozen
    Ended,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Actor dropped past the floor
    Ground,
    /// Actor hit an obstacle outside its gap
    Obstacle,
}

/// Notable things that happened since the last drain, for UI and audio hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CountdownStarted { from: u32 },
    CountdownTick { remaining: u32 },
    RoundStarted,
    Jumped,
    Scored { score: u32 },
    RoundEnded { score: u32, cause: EndCause },
    AttemptRecorded { score: u32, attempts_left: u32 },
    SessionOver { total: u32 },
    /// A qualifying total is waiting for a display name
    NameRequested { total: u32 },
    /// An entry was ranked at `rank` (1-based)
    LeaderboardUpdated { rank: usize },
    PlayerReset,
}

/// Complete state of the current round (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub phase: RoundPhase,
    /// Countdown value (meaningful during Countdown)
    pub countdown: u32,
    /// Obstacles cleared this round
    pub score: u32,
    /// Frames simulated this round
    pub frames: u64,
    pub actor: Actor,
    pub obstacles: ObstacleField,
    /// Set when the round enters Ended
    pub end_cause: Option<EndCause>,
    /// Events raised since the last drain, capped at [`MAX_QUEUED_EVENTS`].
    /// Drivers must drain this (or go through `Game::drain_events`).
    pub events: Vec<GameEvent>,
}

impl RoundState {
    /// Create an idle round with the given seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundPhase::Idle,
            countdown: 0,
            score: 0,
            frames: 0,
            actor: Actor::from_config(config),
            obstacles: ObstacleField::new(),
            end_cause: None,
            events: Vec::new(),
        }
    }

    /// Spawn the next obstacle if one is due, drawing from the round's RNG
    pub fn spawn_obstacle(&mut self, config: &GameConfig) -> bool {
        self.obstacles.maybe_spawn(
            config.field_width,
            config.field_height,
            &config.tuning,
            &mut self.rng,
        )
    }

    /// Enter Countdown from Idle. Returns false (and does nothing) otherwise.
    pub fn begin_countdown(&mut self, from: u32) -> bool {
        if self.phase != RoundPhase::Idle {
            return false;
        }
        self.phase = RoundPhase::Countdown;
        self.countdown = from;
        self.push_event(GameEvent::CountdownStarted { from });
        true
    }

    /// Fresh actor, empty field and zero score, then go Active
    pub fn begin_play(&mut self, config: &GameConfig) {
        let spawn = Actor::from_config(config).pos;
        self.actor.reset(spawn);
        self.obstacles.clear();
        self.score = 0;
        self.frames = 0;
        self.end_cause = None;
        self.phase = RoundPhase::Active;
        self.push_event(GameEvent::RoundStarted);
        log::info!("Round started (seed {})", self.seed);
    }

    /// Apply a jump impulse if the round is Active
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.phase != RoundPhase::Active {
            return false;
        }
        self.actor.jump(impulse);
        self.push_event(GameEvent::Jumped);
        true
    }

    /// Freeze the round
    pub fn end(&mut self, cause: EndCause) {
        self.phase = RoundPhase::Ended;
        self.end_cause = Some(cause);
        self.push_event(GameEvent::RoundEnded {
            score: self.score,
            cause,
        });
        log::info!(
            "Round ended after {} frames: {:?}, score {}",
            self.frames,
            cause,
            self.score
        );
    }

    /// Back to Idle with the actor at its spawn point and an empty field
    pub fn reset(&mut self, config: &GameConfig) {
        self.actor = Actor::from_config(config);
        self.obstacles.clear();
        self.score = 0;
        self.frames = 0;
        self.countdown = 0;
        self.end_cause = None;
        self.phase = RoundPhase::Idle;
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
        trim_events(&mut self.events);
    }
}

/// Drop the oldest events beyond [`MAX_QUEUED_EVENTS`]
pub(crate) fn trim_events(events: &mut Vec<GameEvent>) {
    if events.len() > MAX_QUEUED_EVENTS {
        let excess = events.len() - MAX_QUEUED_EVENTS;
        events.drain(..excess);
        log::warn!("Event queue full, dropped {} undrained events", excess);
    }
}
