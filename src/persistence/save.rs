//! Save file contents

use serde::{Deserialize, Serialize};

/// Progress and lifetime statistics kept across sessions.
///
/// Mutators return whether anything changed so callers know when to write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub high_score: u64,
    pub current_level: u32,
    pub max_level_unlocked: u32,
    /// 0.0 - 1.0
    pub music_volume: f32,
    /// 0.0 - 1.0
    pub sound_volume: f32,
    pub muted: bool,
    pub player_name: String,
    /// Unix seconds of the last write
    pub last_played: u64,
    pub total_play_time_secs: u64,
    pub total_enemies_defeated: u64,
    pub total_coins_collected: u64,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            high_score: 0,
            current_level: 1,
            max_level_unlocked: 1,
            music_volume: 1.0,
            sound_volume: 1.0,
            muted: false,
            player_name: "Player".to_string(),
            last_played: 0,
            total_play_time_secs: 0,
            total_enemies_defeated: 0,
            total_coins_collected: 0,
        }
    }
}

impl SaveData {
    pub fn update_high_score(&mut self, score: u64) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        true
    }

    pub fn unlock_level(&mut self, level: u32) -> bool {
        if level <= self.max_level_unlocked {
            return false;
        }
        self.max_level_unlocked = level;
        true
    }

    pub fn set_current_level(&mut self, level: u32) -> bool {
        self.current_level = level;
        true
    }

    pub fn update_audio(&mut self, music_volume: f32, sound_volume: f32, muted: bool) -> bool {
        self.music_volume = music_volume.clamp(0.0, 1.0);
        self.sound_volume = sound_volume.clamp(0.0, 1.0);
        self.muted = muted;
        true
    }

    /// Add to the lifetime totals
    pub fn update_stats(&mut self, enemies_defeated: u64, coins_collected: u64) -> bool {
        self.total_enemies_defeated += enemies_defeated;
        self.total_coins_collected += coins_collected;
        enemies_defeated > 0 || coins_collected > 0
    }

    pub fn add_play_time(&mut self, secs: u64) {
        self.total_play_time_secs += secs;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_level_unlocked(&self, level: u32) -> bool {
        level <= self.max_level_unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_only_rises() {
        let mut data = SaveData::default();
        assert!(data.update_high_score(50));
        assert!(!data.update_high_score(50));
        assert!(!data.update_high_score(10));
        assert_eq!(data.high_score, 50);
    }

    #[test]
    fn levels_unlock_upward() {
        let mut data = SaveData::default();
        assert!(data.is_level_unlocked(1));
        assert!(!data.is_level_unlocked(3));
        assert!(data.unlock_level(3));
        assert!(!data.unlock_level(2));
        assert!(data.is_level_unlocked(2));
        data.set_current_level(2);
        assert_eq!(data.current_level, 2);
    }

    #[test]
    fn stats_accumulate_and_reset() {
        let mut data = SaveData::default();
        data.update_stats(2, 10);
        data.update_stats(1, 5);
        assert_eq!(data.total_enemies_defeated, 3);
        assert_eq!(data.total_coins_collected, 15);
        assert!(!data.update_stats(0, 0));
        data.update_audio(2.0, 0.5, true);
        assert_eq!(data.music_volume, 1.0);
        data.reset();
        assert_eq!(data, SaveData::default());
    }
}
