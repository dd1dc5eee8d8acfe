//! High score leaderboard
//!
//! Keeps the top 3 session totals in memory. The entry list serializes to JSON
//! so an outer layer can persist it if it wants to.

use serde::{Deserialize, Serialize};

use crate::consts::PLACEHOLDER_NAME;
use crate::error::Result;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 3;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Session total
    pub score: u32,
    /// Display name (may be empty)
    pub name: String,
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_HIGH_SCORES + 1),
        }
    }

    /// Check if a score qualifies for the leaderboard.
    ///
    /// With a full table the score must beat at least one entry outright; ties
    /// with the lowest entry do not get in.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.iter().any(|e| score > e.score)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a score, keeping the table sorted and capped.
    ///
    /// Equal scores rank in insertion order (the newcomer goes below). Returns
    /// the rank achieved (1-indexed), or None if the entry fell off the table.
    pub fn insert(&mut self, score: u32, name: impl Into<String>) -> Option<usize> {
        let entry = HighScoreEntry {
            score,
            name: name.into(),
        };

        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        if pos < MAX_HIGH_SCORES {
            log::info!("High score {} ranked #{}", score, pos + 1);
            Some(pos + 1)
        } else {
            None
        }
    }

    /// Ranked entries, best first. Each call starts a fresh pass.
    pub fn top_n(&self) -> impl Iterator<Item = &HighScoreEntry> + '_ {
        self.entries.iter()
    }

    /// Ranked entries paired with their 1-indexed rank
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &HighScoreEntry)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Import a table, re-ranking it so the ordering and size hold
    pub fn from_json(json: &str) -> Result<Self> {
        let mut scores: HighScores = serde_json::from_str(json)?;
        // Stable sort keeps the stored order for ties
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(MAX_HIGH_SCORES);
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }
}

/// Trim a player-supplied name, falling back to the placeholder when empty
pub fn sanitize_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => PLACEHOLDER_NAME.to_string(),
    }
}

/// Format an entry as a list line, e.g. `#1: 90 - Ada`
pub fn format_entry(rank: usize, entry: &HighScoreEntry) -> String {
    if entry.name.is_empty() {
        format!("#{}: {}", rank, entry.score)
    } else {
        format!("#{}: {} - {}", rank, entry.score, entry.name)
    }
}
