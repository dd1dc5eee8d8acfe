//! Attempt tracking for the current player

use serde::{Deserialize, Serialize};

/// One player's attempts, bounded by `attempt_limit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    attempt_limit: u32,
    /// Score of each finished attempt, in play order
    scores: Vec<u32>,
}

impl Session {
    pub fn new(attempt_limit: u32) -> Self {
        Self {
            attempt_limit,
            scores: Vec::with_capacity(attempt_limit as usize),
        }
    }

    /// Record a finished attempt
    pub fn record_attempt(&mut self, score: u32) {
        self.scores.push(score);
    }

    pub fn attempts_used(&self) -> u32 {
        self.scores.len() as u32
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempt_limit.saturating_sub(self.attempts_used())
    }

    pub fn attempt_limit(&self) -> u32 {
        self.attempt_limit
    }

    pub fn is_session_over(&self) -> bool {
        self.attempts_used() >= self.attempt_limit
    }

    pub fn total_score(&self) -> u32 {
        self.scores.iter().sum()
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Clear all attempts for the next player
    pub fn reset_session(&mut self) {
        self.scores.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_over_only_after_last_attempt() {
        let mut session = Session::new(3);
        assert!(!session.is_session_over());

        session.record_attempt(4);
        assert!(!session.is_session_over());
        session.record_attempt(7);
        assert!(!session.is_session_over());
        assert_eq!(session.attempts_left(), 1);

        session.record_attempt(2);
        assert!(session.is_session_over());
        assert_eq!(session.total_score(), 13);
        assert_eq!(session.scores(), &[4, 7, 2]);
        assert_eq!(session.attempts_left(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = Session::new(3);
        session.record_attempt(5);
        session.record_attempt(1);

        session.reset_session();
        let once = session.clone();
        session.reset_session();
        assert_eq!(session, once);
        assert_eq!(session.attempts_used(), 0);
        assert!(session.scores().is_empty());
        assert_eq!(session.total_score(), 0);
    }

    #[test]
    fn test_zero_scores_still_use_attempts() {
        let mut session = Session::new(2);
        session.record_attempt(0);
        session.record_attempt(0);
        assert!(session.is_session_over());
        assert_eq!(session.total_score(), 0);
    }
}
