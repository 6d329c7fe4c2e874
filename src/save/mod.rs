//! Persistence gateway for scores
//!
//! Two independent JSON documents live in the data directory:
//! - `high_scores.json`: best score ever achieved per difficulty
//! - `leaderboards.json`: top-10 `{name, score}` list per difficulty
//!
//! # Architecture
//!
//! - `types`: document structures and error types
//! - `leaderboard`: ordering, qualification and name rules for leaderboards
//! - `manager`: ScoreStore for file operations
//!
//! Loading never fails: a missing or corrupt file yields the empty defaults.
//! Saving is a full overwrite of the document.
//!
//! # Example Usage
//!
//! ```ignore
//! let store = ScoreStore::new(data_dir)?;
//! let mut boards = store.load_leaderboards();
//! boards.insert(Difficulty::Hard, LeaderboardEntry::new("ACE", 50));
//! store.save_leaderboards(&boards)?;
//! ```

pub mod leaderboard;
pub mod manager;
pub mod types;

// Re-export commonly used types
pub use leaderboard::{MAX_ENTRIES, MAX_NAME_LEN, NameError};
pub use manager::ScoreStore;
pub use types::*;
