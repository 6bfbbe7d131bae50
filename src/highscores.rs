//! High score leaderboard
//!
//! Fed by the game-over hand-off, persisted as a JSON blob, tracks the top
//! 10 scores.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::KvStore;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: i64,
    /// Motion ticks survived
    pub ticks: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Storage key for the persisted blob
    const STORAGE_KEY: &'static str = "astro_drop_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: i64) -> bool {
        if score <= 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, score: i64, ticks: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let entry = HighScoreEntry {
            score,
            ticks,
            timestamp,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<i64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from storage
    pub fn load(store: &dyn KvStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
                Err(err) => log::warn!("Discarding corrupt high score blob: {err}"),
            }
        }
        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to storage (best-effort)
    pub fn save(&self, store: &mut dyn KvStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
            Err(err) => log::warn!("Failed to serialize high scores: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(10));
    }

    #[test]
    fn test_ranks_and_ordering() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(100, 50), Some(1));
        assert_eq!(scores.add_score(300, 80), Some(1));
        assert_eq!(scores.add_score(200, 60), Some(2));

        let listed: Vec<_> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(listed, [300, 200, 100]);
        assert_eq!(scores.top_score(), Some(300));
    }

    #[test]
    fn test_board_is_capped() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.add_score(i * 10, 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Lowest surviving score is 60 (150 down to 60)
        assert_eq!(scores.entries.last().map(|e| e.score), Some(60));
        assert!(!scores.qualifies(50));
        assert!(scores.qualifies(70));
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut kv = MemoryStore::new();
        let mut scores = HighScores::new();
        scores.add_score(40, 120);
        scores.add_score(90, 300);
        scores.save(&mut kv);

        let restored = HighScores::load(&kv);
        assert_eq!(restored.entries, scores.entries);
    }
}
