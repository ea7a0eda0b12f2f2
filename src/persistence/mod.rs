//! Persistence of scores, save data, settings and the leaderboard
//!
//! Games never see storage errors. Backends log failures and fall back to
//! defaults so a broken disk costs at most the data that failed to write.

pub mod file;
pub mod save;

use std::time::{SystemTime, UNIX_EPOCH};

pub use file::FileStore;
pub use save::SaveData;

use crate::highscores::HighScores;
use crate::settings::Settings;

/// One finished run as written to the score log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub score: u64,
    pub distance: u32,
    /// Unix seconds
    pub timestamp: u64,
}

impl ScoreRecord {
    /// `Score:{score} Dist:{distance}m {timestamp}`
    pub fn to_line(&self) -> String {
        format!("Score:{} Dist:{}m {}", self.score, self.distance, self.timestamp)
    }

    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let score = parts.next()?.strip_prefix("Score:")?.parse().ok()?;
        let distance = parts
            .next()?
            .strip_prefix("Dist:")?
            .strip_suffix('m')?
            .parse()
            .ok()?;
        let timestamp = parts.next()?.parse().ok()?;
        Some(Self {
            score,
            distance,
            timestamp,
        })
    }
}

/// Storage backend used by [`crate::GameContext`]
pub trait Persistence {
    /// Append a finished run to the score log
    fn record_score(&mut self, record: ScoreRecord);
    /// Every well-formed score log entry, oldest first
    fn score_log(&self) -> Vec<ScoreRecord>;
    fn load_settings(&self) -> Settings;
    fn save_settings(&mut self, settings: &Settings);
    fn load_save(&self) -> SaveData;
    fn save(&mut self, data: &SaveData);
    fn load_high_scores(&self) -> HighScores;
    fn save_high_scores(&mut self, scores: &HighScores);
}

/// In-memory backend for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub scores: Vec<ScoreRecord>,
    pub settings: Option<Settings>,
    pub save_data: Option<SaveData>,
    pub high_scores: Option<HighScores>,
    /// Number of save file writes
    pub saves: usize,
}

impl Persistence for MemoryStore {
    fn record_score(&mut self, record: ScoreRecord) {
        self.scores.push(record);
    }

    fn score_log(&self) -> Vec<ScoreRecord> {
        self.scores.clone()
    }

    fn load_settings(&self) -> Settings {
        self.settings.clone().unwrap_or_default()
    }

    fn save_settings(&mut self, settings: &Settings) {
        self.settings = Some(settings.clone());
    }

    fn load_save(&self) -> SaveData {
        self.save_data.clone().unwrap_or_default()
    }

    fn save(&mut self, data: &SaveData) {
        self.save_data = Some(data.clone());
        self.saves += 1;
    }

    fn load_high_scores(&self) -> HighScores {
        self.high_scores.clone().unwrap_or_default()
    }

    fn save_high_scores(&mut self, scores: &HighScores) {
        self.high_scores = Some(scores.clone());
    }
}

/// Current wall clock as Unix seconds (0 if the clock is before 1970)
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
