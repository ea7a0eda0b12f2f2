//! Explicit game context
//!
//! Owns the collaborators a game talks to: score keeping, audio, settings,
//! save data, the leaderboard and a storage backend. Hosts drain simulation
//! events each tick and pass them to [`GameContext::handle`].

use crate::audio::{AudioManager, SoundEvent};
use crate::event::GameEvent;
use crate::highscores::{HighScoreEntry, HighScores};
use crate::persistence::{Persistence, SaveData, ScoreRecord, unix_now};
use crate::scores::ScoreManager;
use crate::settings::Settings;
use crate::sim::Difficulty;

pub struct GameContext<P: Persistence> {
    pub scores: ScoreManager,
    pub audio: AudioManager,
    pub settings: Settings,
    pub save_data: SaveData,
    pub high_scores: HighScores,
    store: P,
    /// A run has started and not yet been recorded
    run_active: bool,
    coins_this_run: u64,
    runs_recorded: u32,
}

impl<P: Persistence> GameContext<P> {
    /// Load settings, save data and leaderboard from `store`
    pub fn new(store: P) -> Self {
        let settings = store.load_settings();
        let save_data = store.load_save();
        let high_scores = store.load_high_scores();
        let best = store
            .score_log()
            .iter()
            .map(|r| r.score)
            .fold(save_data.high_score, u64::max);
        log::info!(
            "Loaded profile '{}' (high score {best}, {} leaderboard entries)",
            settings.player_name,
            high_scores.entries.len()
        );

        Self {
            scores: ScoreManager::with_high_score(best),
            audio: settings.audio(),
            settings,
            save_data,
            high_scores,
            store,
            run_active: false,
            coins_this_run: 0,
            runs_recorded: 0,
        }
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Runs recorded to storage during this session
    pub fn runs_recorded(&self) -> u32 {
        self.runs_recorded
    }

    pub fn handle(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle_event(*event);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        log::debug!("event: {event:?}");
        match event {
            GameEvent::RunStarted { difficulty } => {
                self.scores.reset();
                self.coins_this_run = 0;
                self.run_active = true;
                if let Some(difficulty) = difficulty {
                    log::info!("Run started on {}", difficulty.as_str());
                }
            }
            GameEvent::CoinCollected { points } => {
                self.scores.add_score(points);
                self.coins_this_run += 1;
                self.audio.play(SoundEvent::Coin);
            }
            GameEvent::PlayerHurt => self.audio.play(SoundEvent::Hurt),
            GameEvent::PlayerDied => self.audio.play(SoundEvent::Death),
            GameEvent::SpeedUp { speed } => log::debug!("Speed up to {speed:.1}"),
            GameEvent::GameOver {
                score,
                distance,
                difficulty,
            } => self.record_run(score, distance, difficulty),
        }
    }

    fn record_run(&mut self, score: u64, distance: u32, difficulty: Option<Difficulty>) {
        if !self.run_active {
            log::warn!("Ignoring game over for a run that was already recorded");
            return;
        }
        self.run_active = false;
        self.runs_recorded += 1;

        let timestamp = unix_now();
        self.scores.record_final(score);
        self.store.record_score(ScoreRecord {
            score,
            distance,
            timestamp,
        });

        let rank = self.high_scores.add_score(HighScoreEntry {
            score,
            distance,
            difficulty,
            timestamp,
        });
        if let Some(rank) = rank {
            log::info!("New leaderboard entry at rank {rank}");
            self.store.save_high_scores(&self.high_scores);
        }

        if self.save_data.update_high_score(score) {
            log::info!("New high score: {score}");
        }
        self.save_data.update_stats(0, self.coins_this_run);
        self.store.save(&self.save_data);
    }

    /// Menu click feedback
    pub fn click(&mut self) {
        self.audio.play(SoundEvent::Click);
    }

    /// Persist the current audio state as part of the settings
    pub fn save_settings(&mut self) {
        self.settings.capture_audio(&self.audio);
        self.save_data.update_audio(
            self.audio.music_volume() as f32 / 100.0,
            self.audio.sfx_volume() as f32 / 100.0,
            !self.audio.enabled(),
        );
        self.store.save_settings(&self.settings);
    }

    /// Add the session length to the lifetime totals and write the save file
    pub fn finish_session(&mut self, play_time_secs: u64) {
        self.save_data.add_play_time(play_time_secs);
        self.store.save(&self.save_data);
    }
}
