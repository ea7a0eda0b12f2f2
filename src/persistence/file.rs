//! Local filesystem backend
//!
//! Layout inside the data directory:
//! - `scores.txt`: one `Score:{score} Dist:{distance}m {timestamp}` line per run
//! - `savegame.json`, `settings.json`, `highscores.json`: pretty JSON

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Persistence, SaveData, ScoreRecord, unix_now};
use crate::highscores::HighScores;
use crate::settings::Settings;

pub const SCORES_FILE: &str = "scores.txt";
pub const SAVE_FILE: &str = "savegame.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const HIGH_SCORES_FILE: &str = "highscores.json";

/// Stores everything as files under one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Per-user data directory, or the working directory when there is none
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lane-runner")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("creating {}", self.base_dir.display()))
    }

    fn append_score(&self, record: ScoreRecord) -> Result<()> {
        self.ensure_dir()?;
        let path = self.resolve(SCORES_FILE);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        writeln!(file, "{}", record.to_line())
            .with_context(|| format!("writing {}", path.display()))
    }

    /// `Ok(None)` when the file doesn't exist yet
    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.resolve(name);
        if !path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.resolve(name);
        let json = serde_json::to_string_pretty(value).context("serializing")?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
    }

    /// Load a JSON file, falling back to the default on any failure
    fn load_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        match self.read_json(name) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("{name} not found, using defaults");
                T::default()
            }
            Err(e) => {
                log::warn!("Failed to load {name}: {e:#}");
                T::default()
            }
        }
    }

    fn store<T: Serialize>(&self, name: &str, value: &T) {
        if let Err(e) = self.write_json(name, value) {
            log::warn!("Failed to save {name}: {e:#}");
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl Persistence for FileStore {
    fn record_score(&mut self, record: ScoreRecord) {
        match self.append_score(record) {
            Ok(()) => log::debug!("Recorded score {}", record.score),
            Err(e) => log::warn!("Failed to record score: {e:#}"),
        }
    }

    fn score_log(&self) -> Vec<ScoreRecord> {
        let path = self.resolve(SCORES_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => contents.lines().filter_map(ScoreRecord::parse_line).collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read {}: {e}", path.display());
                Vec::new()
            }
        }
    }

    fn load_settings(&self) -> Settings {
        self.load_or_default::<Settings>(SETTINGS_FILE).sanitized()
    }

    fn save_settings(&mut self, settings: &Settings) {
        self.store(SETTINGS_FILE, settings);
    }

    fn load_save(&self) -> SaveData {
        self.load_or_default(SAVE_FILE)
    }

    fn save(&mut self, data: &SaveData) {
        let mut data = data.clone();
        data.last_played = unix_now();
        self.store(SAVE_FILE, &data);
    }

    fn load_high_scores(&self) -> HighScores {
        self.load_or_default(HIGH_SCORES_FILE)
    }

    fn save_high_scores(&mut self, scores: &HighScores) {
        self.store(HIGH_SCORES_FILE, scores);
    }
}
