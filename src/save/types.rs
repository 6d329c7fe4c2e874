//! Score document types
//!
//! This module defines the two persisted documents and the error type for
//! reading and writing them. Both documents are keyed by difficulty using the
//! lowercase names "easy", "medium" and "hard".

use crate::game::types::Difficulty;
use serde::{Deserialize, Serialize};

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        LeaderboardEntry {
            name: name.into(),
            score,
        }
    }
}

/// Best score ever achieved per difficulty (`high_scores.json`)
///
/// Values only ever go up, except when an authorized reset clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScoreTable {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl HighScoreTable {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Record `score` if it beats the current best; returns true when it did
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let best = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };

        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }
}

/// Leaderboard per difficulty (`leaderboards.json`)
///
/// Each list is sorted descending by score and holds at most
/// [`MAX_ENTRIES`](super::MAX_ENTRIES) entries. The rules that keep it that
/// way live in the `leaderboard` module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboards {
    pub easy: Vec<LeaderboardEntry>,
    pub medium: Vec<LeaderboardEntry>,
    pub hard: Vec<LeaderboardEntry>,
}

impl Leaderboards {
    pub fn entries(&self, difficulty: Difficulty) -> &[LeaderboardEntry] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub(super) fn entries_mut(&mut self, difficulty: Difficulty) -> &mut Vec<LeaderboardEntry> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Error types for score file operations
#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::SerializationError(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::IoError(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::SerializationError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_scores_default_to_zero() {
        let table = HighScoreTable::default();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({"easy": 0, "medium": 0, "hard": 0}));
    }

    #[test]
    fn test_high_score_is_monotonic() {
        let mut table = HighScoreTable::default();
        assert!(table.record(Difficulty::Medium, 40));
        assert!(!table.record(Difficulty::Medium, 30));
        assert!(!table.record(Difficulty::Medium, 40));
        assert_eq!(table.get(Difficulty::Medium), 40);
        assert_eq!(table.get(Difficulty::Easy), 0);
    }

    #[test]
    fn test_partial_document_fills_missing_keys() {
        let boards: Leaderboards =
            serde_json::from_str(r#"{"hard": [{"name": "ACE", "score": 90}]}"#).unwrap();

        assert!(boards.entries(Difficulty::Easy).is_empty());
        assert_eq!(boards.entries(Difficulty::Hard), &[LeaderboardEntry::new("ACE", 90)]);
    }

    #[test]
    fn test_leaderboard_document_shape() {
        let mut boards = Leaderboards::default();
        boards.easy.push(LeaderboardEntry::new("PILOT", 120));

        let json = serde_json::to_value(&boards).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "easy": [{"name": "PILOT", "score": 120}],
                "medium": [],
                "hard": []
            })
        );
    }
}
