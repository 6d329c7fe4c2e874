//! Score store for reading and writing the score documents
//!
//! This module provides the ScoreStore struct which handles:
//! - Locating `high_scores.json` and `leaderboards.json` in the data directory
//! - Loading them, falling back to empty defaults on any failure
//! - Overwriting them in full on save

use super::types::*;
use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const HIGH_SCORES_FILE: &str = "high_scores.json";
pub const LEADERBOARDS_FILE: &str = "leaderboards.json";

pub struct ScoreStore {
    data_directory: PathBuf,
}

impl ScoreStore {
    /// Creates a new ScoreStore rooted at the given directory
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(data_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let data_dir = data_directory.as_ref().to_path_buf();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }

        Ok(ScoreStore {
            data_directory: data_dir,
        })
    }

    pub fn high_scores_path(&self) -> PathBuf {
        self.data_directory.join(HIGH_SCORES_FILE)
    }

    pub fn leaderboards_path(&self) -> PathBuf {
        self.data_directory.join(LEADERBOARDS_FILE)
    }

    /// Load the high-score table, or zeros if the file is absent or unreadable
    pub fn load_high_scores(&self) -> HighScoreTable {
        load_or_default(&self.high_scores_path())
    }

    /// Load the leaderboards, or empty lists if the file is absent or unreadable
    pub fn load_leaderboards(&self) -> Leaderboards {
        let mut boards: Leaderboards = load_or_default(&self.leaderboards_path());
        boards.normalize();
        boards
    }

    pub fn save_high_scores(&self, table: &HighScoreTable) -> Result<PathBuf, SaveError> {
        write_document(&self.high_scores_path(), table)
    }

    pub fn save_leaderboards(&self, boards: &Leaderboards) -> Result<PathBuf, SaveError> {
        write_document(&self.leaderboards_path(), boards)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, SaveError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        info!("{} not found, starting empty", path.display());
        return T::default();
    }

    match read_document(path) {
        Ok(document) => {
            info!("Loaded {}", path.display());
            document
        }
        Err(e) => {
            warn!("Ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }
    }
}

fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<PathBuf, SaveError> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;

    info!("Saved {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Difficulty;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, ScoreStore) {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let (_dir, store) = temp_store();

        assert_eq!(store.load_high_scores(), HighScoreTable::default());
        assert_eq!(store.load_leaderboards(), Leaderboards::default());
    }

    #[test]
    fn test_corrupt_files_give_defaults() {
        let (_dir, store) = temp_store();
        fs::write(store.high_scores_path(), "{ not json").unwrap();
        fs::write(store.leaderboards_path(), "[1, 2, 3]").unwrap();

        assert_eq!(store.load_high_scores(), HighScoreTable::default());
        assert_eq!(store.load_leaderboards(), Leaderboards::default());
    }

    #[test]
    fn test_high_scores_round_trip() {
        let (_dir, store) = temp_store();
        let table = HighScoreTable {
            easy: 120,
            medium: 0,
            hard: 40,
        };

        store.save_high_scores(&table).unwrap();
        assert_eq!(store.load_high_scores(), table);
    }

    #[test]
    fn test_leaderboards_round_trip() {
        let (_dir, store) = temp_store();
        let mut boards = Leaderboards::default();
        boards.insert(Difficulty::Easy, LeaderboardEntry::new("ACE", 300));
        boards.insert(Difficulty::Easy, LeaderboardEntry::new("ROOKIE", 20));
        boards.insert(Difficulty::Hard, LeaderboardEntry::new("VIPER", 90));

        store.save_leaderboards(&boards).unwrap();
        assert_eq!(store.load_leaderboards(), boards);
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let (_dir, store) = temp_store();
        let mut table = HighScoreTable::default();
        table.record(Difficulty::Hard, 70);
        store.save_high_scores(&table).unwrap();

        store.save_high_scores(&HighScoreTable::default()).unwrap();
        assert_eq!(store.load_high_scores(), HighScoreTable::default());
    }

    #[test]
    fn test_new_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = ScoreStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.high_scores_path(), nested.join(HIGH_SCORES_FILE));
    }
}
