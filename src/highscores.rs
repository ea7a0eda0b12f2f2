//! High score leaderboard
//!
//! Tracks the top 10 runs. Stored as JSON by the persistence backend.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Metres run
    pub distance: u32,
    /// Car runner tier; `None` for the classic runner
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted by descending score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Must beat the lowest entry
        self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a run to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        // Ties go below existing entries
        let pos = self.entries.iter().position(|e| entry.score > e.score);
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
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

/// Format `timestamp` relative to `now` (both Unix seconds)
pub fn format_date(timestamp: u64, now: u64) -> String {
    let mins = now.saturating_sub(timestamp) / 60;
    let hours = mins / 60;
    let days = hours / 24;

    match (days, hours, mins) {
        (1, _, _) => "Yesterday".to_string(),
        (d, _, _) if d > 1 => format!("{d} days ago"),
        (_, 1, _) => "1 hour ago".to_string(),
        (_, h, _) if h > 1 => format!("{h} hours ago"),
        (_, _, 1) => "1 min ago".to_string(),
        (_, _, m) if m > 1 => format!("{m} mins ago"),
        _ => "Just now".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry {
            score,
            distance: score as u32 / 2,
            difficulty: Some(Difficulty::Medium),
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn zero_never_qualifies() {
        assert!(!HighScores::new().qualifies(0));
        assert!(HighScores::new().qualifies(1));
    }

    #[test]
    fn entries_stay_sorted_and_capped() {
        let mut scores = HighScores::new();
        for s in [50, 10, 90, 30, 70, 20, 80, 60, 40, 100, 5] {
            scores.add_score(entry(s));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(100));
        assert_eq!(scores.entries.last().unwrap().score, 10);
        assert!(scores.entries.windows(2).all(|w| w[0].score >= w[1].score));

        assert!(!scores.qualifies(10));
        assert_eq!(scores.potential_rank(55), Some(6));
        assert_eq!(scores.add_score(entry(55)), Some(6));
        assert_eq!(scores.entries.last().unwrap().score, 20);
    }

    #[test]
    fn ties_rank_below_existing() {
        let mut scores = HighScores::new();
        scores.add_score(entry(40));
        assert_eq!(scores.add_score(entry(40)), Some(2));
    }

    #[test]
    fn relative_dates() {
        let now = 1_000_000;
        assert_eq!(format_date(now - 10, now), "Just now");
        assert_eq!(format_date(now - 60, now), "1 min ago");
        assert_eq!(format_date(now - 600, now), "10 mins ago");
        assert_eq!(format_date(now - 3 * 3600, now), "3 hours ago");
        assert_eq!(format_date(now - 86_400, now), "Yesterday");
        assert_eq!(format_date(now - 5 * 86_400, now), "5 days ago");
        assert_eq!(format_date(now + 50, now), "Just now");
    }
}
