//! Process-wide game context
//!
//! Owns the current round, the current player's session and the leaderboard.
//! A driver feeds it input events, frame ticks and countdown timer ticks; a
//! renderer reads [`Frame`] snapshots back out.

use serde::Serialize;

use crate::error::Result;
use crate::highscores::{HighScoreEntry, HighScores, sanitize_name};
use crate::session::Session;
use crate::settings::{DifficultyPreset, GameConfig};
use crate::sim::{
    Actor, GameEvent, Obstacle, RoundPhase, RoundState, TickInput, TickOutcome, countdown_tick,
    tick,
};
use crate::sim::state::trim_events;

/// Discrete input events for one handling pass
#[derive(Debug, Clone, Default)]
pub struct GameInput {
    /// Click/tap/space
    pub jump: bool,
    /// Start button
    pub start: bool,
    /// Next player button
    pub reset_player: bool,
}

/// Read-only snapshot for a renderer
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub phase: RoundPhase,
    pub countdown: u32,
    pub score: u32,
    pub actor: &'a Actor,
    pub obstacles: &'a [Obstacle],
    pub attempts_left: u32,
    pub attempt_limit: u32,
    pub attempt_scores: &'a [u32],
    /// Total waiting for a display name, if any
    pub awaiting_name: Option<u32>,
    pub top_scores: &'a [HighScoreEntry],
}

/// The whole game: round controller, session tracker and leaderboard
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    round: RoundState,
    session: Session,
    leaderboard: HighScores,
    /// Qualifying session total waiting for `complete_qualifying_entry`
    pending_entry: Option<u32>,
    /// This session's total has already been offered to the leaderboard
    entry_made: bool,
    /// Undrained events; capped, so callers must drain them regularly
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a game from a validated configuration
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Create a game using a built-in difficulty preset
    pub fn with_preset(preset: DifficultyPreset, seed: u64) -> Self {
        Self::build(GameConfig::from_preset(preset), seed)
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        log::info!(
            "New game: {} attempts per player, seed {}",
            config.attempt_limit,
            seed
        );
        Self {
            round: RoundState::new(&config, seed),
            session: Session::new(config.attempt_limit),
            leaderboard: HighScores::new(),
            pending_entry: None,
            entry_made: false,
            events: Vec::new(),
            config,
        }
    }

    /// Replace the leaderboard (e.g. one restored by an outer persistence layer)
    pub fn with_leaderboard(mut self, leaderboard: HighScores) -> Self {
        self.leaderboard = leaderboard;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn leaderboard(&self) -> &HighScores {
        &self.leaderboard
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    /// Session total waiting for a display name
    pub fn pending_entry(&self) -> Option<u32> {
        self.pending_entry
    }

    /// Snapshot of everything a renderer draws
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            phase: self.round.phase,
            countdown: self.round.countdown,
            score: self.round.score,
            actor: &self.round.actor,
            obstacles: self.round.obstacles.obstacles(),
            attempts_left: self.session.attempts_left(),
            attempt_limit: self.session.attempt_limit(),
            attempt_scores: self.session.scores(),
            awaiting_name: self.pending_entry,
            top_scores: self.leaderboard.entries(),
        }
    }

    /// Events raised since the last call, oldest first.
    ///
    /// Only the newest [`MAX_QUEUED_EVENTS`](crate::consts::MAX_QUEUED_EVENTS)
    /// are kept, so a driver should drain once per frame.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.sync_events();
        std::mem::take(&mut self.events)
    }

    /// Apply one batch of input events. Invalid ones are ignored.
    pub fn handle_input(&mut self, input: &GameInput) {
        if input.reset_player {
            self.reset_player();
        }
        if input.start {
            self.start();
        }
        if input.jump {
            self.jump();
        }
    }

    /// Start the countdown for the next attempt. Only valid from Idle with
    /// attempts remaining.
    pub fn start(&mut self) -> bool {
        if self.session.is_session_over() {
            log::debug!("Start ignored: no attempts left");
            return false;
        }
        let started = self.round.begin_countdown(self.config.countdown_start);
        self.sync_events();
        started
    }

    /// Jump, if a round is Active
    pub fn jump(&mut self) -> bool {
        let jumped = self.round.jump(self.config.tuning.jump_impulse);
        self.sync_events();
        jumped
    }

    /// Coarse timer tick driving the countdown. Returns true when play begins.
    pub fn countdown_tick(&mut self) -> bool {
        let began = countdown_tick(&mut self.round, &self.config);
        self.sync_events();
        began
    }

    /// Per-frame tick
    pub fn frame_tick(&mut self) -> TickOutcome {
        self.frame_tick_with(&TickInput::default())
    }

    /// Per-frame tick with frame-local input (jump, autopilot)
    pub fn frame_tick_with(&mut self, input: &TickInput) -> TickOutcome {
        let outcome = tick(&mut self.round, input, &self.config);
        self.sync_events();
        if let TickOutcome::Ended(_) = outcome {
            self.finish_attempt();
        }
        outcome
    }

    /// Hand the finished round's score to the session and decide what's next
    fn finish_attempt(&mut self) {
        let score = self.round.score;
        self.session.record_attempt(score);
        self.push_event(GameEvent::AttemptRecorded {
            score,
            attempts_left: self.session.attempts_left(),
        });

        if !self.session.is_session_over() {
            // Keep the crash frame on screen; the next countdown resets it
            self.round.phase = RoundPhase::Idle;
            return;
        }

        let total = self.session.total_score();
        log::info!(
            "Session over: scores {:?}, total {}",
            self.session.scores(),
            total
        );
        self.push_event(GameEvent::SessionOver { total });

        if !self.begin_qualifying_entry() {
            log::info!("Total {} did not make the leaderboard", total);
        }
    }

    /// Open a leaderboard entry for the finished session's total, waiting on
    /// a display name.
    ///
    /// Only valid once the session is over and the total qualifies. Each
    /// session opens at most one entry; `reset_player` allows the next.
    pub fn begin_qualifying_entry(&mut self) -> bool {
        if !self.session.is_session_over() || self.entry_made {
            return false;
        }
        let total = self.session.total_score();
        if !self.leaderboard.qualifies(total) {
            return false;
        }
        self.entry_made = true;
        self.pending_entry = Some(total);
        self.push_event(GameEvent::NameRequested { total });
        true
    }

    /// Finish the pending entry with the player's name (trimmed; empty or
    /// absent becomes the placeholder). Returns the rank achieved.
    pub fn complete_qualifying_entry(&mut self, name: Option<&str>) -> Option<usize> {
        let total = self.pending_entry.take()?;
        let name = sanitize_name(name);
        let rank = self.leaderboard.insert(total, name);
        if let Some(rank) = rank {
            self.push_event(GameEvent::LeaderboardUpdated { rank });
        }
        rank
    }

    /// Next player: clear the session and return to Idle. Ignored mid-round
    /// and while a name entry is pending.
    pub fn reset_player(&mut self) -> bool {
        if self.pending_entry.is_some() {
            log::debug!("Reset ignored: leaderboard name pending");
            return false;
        }
        if matches!(self.round.phase, RoundPhase::Countdown | RoundPhase::Active) {
            return false;
        }
        self.session.reset_session();
        self.round.reset(&self.config);
        self.entry_made = false;
        self.push_event(GameEvent::PlayerReset);
        log::info!("Next player");
        true
    }

    fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
        trim_events(&mut self.events);
    }

    fn sync_events(&mut self) {
        self.events.append(&mut self.round.events);
        trim_events(&mut self.events);
    }
}
