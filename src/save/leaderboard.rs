//! Leaderboard rules
//!
//! Qualification, name validation and insertion for the per-difficulty
//! leaderboards. Every mutation leaves the list sorted descending by score
//! and capped at [`MAX_ENTRIES`].

use super::types::{LeaderboardEntry, Leaderboards};
use crate::game::types::Difficulty;

/// Entries kept per difficulty
pub const MAX_ENTRIES: usize = 10;

/// Longest name the entry screen accepts
pub const MAX_NAME_LEN: usize = 10;

/// Why a submitted name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong,
    Duplicate(String),
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::Empty => write!(f, "Name cannot be empty"),
            NameError::TooLong => write!(f, "Name is limited to {} characters", MAX_NAME_LEN),
            NameError::Duplicate(name) => write!(f, "{} is already taken", name),
        }
    }
}

impl std::error::Error for NameError {}

impl Leaderboards {
    /// Whether `score` earns a place on the board for `difficulty`:
    /// the board has free slots, or the score beats its lowest entry.
    pub fn qualifies(&self, difficulty: Difficulty, score: u32) -> bool {
        let entries = self.entries(difficulty);
        if entries.len() < MAX_ENTRIES {
            return true;
        }
        entries.last().is_some_and(|lowest| score > lowest.score)
    }

    /// Trim and check a submitted name, returning the name to store.
    ///
    /// Names must be non-empty after trimming and unique (ignoring case)
    /// within the difficulty's board.
    pub fn validate_name(&self, difficulty: Difficulty, raw: &str) -> Result<String, NameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }

        let taken = self
            .entries(difficulty)
            .iter()
            .any(|entry| entry.name.to_lowercase() == name.to_lowercase());
        if taken {
            return Err(NameError::Duplicate(name.to_string()));
        }

        Ok(name.to_string())
    }

    /// Insert an entry, keeping the board sorted and capped.
    ///
    /// Ties keep earlier entries ahead of the new one.
    pub fn insert(&mut self, difficulty: Difficulty, entry: LeaderboardEntry) {
        let entries = self.entries_mut(difficulty);
        entries.push(entry);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
    }

    /// Restore the invariants on data read from disk
    pub fn normalize(&mut self) {
        for difficulty in Difficulty::all() {
            let entries = self.entries_mut(difficulty);
            entries.sort_by(|a, b| b.score.cmp(&a.score));
            entries.truncate(MAX_ENTRIES);
        }
    }
}
