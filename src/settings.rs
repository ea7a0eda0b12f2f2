//! Game settings and preferences
//!
//! Persisted separately from the save file. Missing fields fall back to their
//! defaults so older settings files keep loading.

use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, MAX_VOLUME};
use crate::sim::Difficulty;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    pub sound_enabled: bool,
    /// Music volume (0 - 100)
    pub music_volume: u8,
    /// Sound effects volume (0 - 100)
    pub sfx_volume: u8,

    // === Gameplay ===
    /// Tier preselected for new car runner runs
    pub difficulty: Difficulty,
    pub player_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_volume: 65,
            sfx_volume: MAX_VOLUME,
            difficulty: Difficulty::Medium,
            player_name: "Player".to_string(),
        }
    }
}

impl Settings {
    /// Clamp volumes into range (hand-edited files may exceed them)
    pub fn sanitized(mut self) -> Self {
        self.music_volume = self.music_volume.min(MAX_VOLUME);
        self.sfx_volume = self.sfx_volume.min(MAX_VOLUME);
        if self.player_name.trim().is_empty() {
            self.player_name = Self::default().player_name;
        }
        self
    }

    /// Audio manager configured from these settings
    pub fn audio(&self) -> AudioManager {
        AudioManager::new(self.sound_enabled, self.music_volume, self.sfx_volume)
    }

    /// Copy the audio manager's current state back into the settings
    pub fn capture_audio(&mut self, audio: &AudioManager) {
        self.sound_enabled = audio.enabled();
        self.music_volume = audio.music_volume();
        self.sfx_volume = audio.sfx_volume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.sound_enabled);
        assert_eq!(s.music_volume, 65);
        assert_eq!(s.sfx_volume, 100);
        assert_eq!(s.difficulty, Difficulty::Medium);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"sfx_volume": 40}"#).unwrap();
        assert_eq!(s.sfx_volume, 40);
        assert_eq!(s.music_volume, 65);
        assert_eq!(s.player_name, "Player");
    }

    #[test]
    fn sanitize_clamps_and_names() {
        let s = Settings {
            music_volume: 200,
            player_name: "  ".into(),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.music_volume, 100);
        assert_eq!(s.player_name, "Player");
    }

    #[test]
    fn audio_round_trips_through_settings() {
        let mut s = Settings::default();
        let mut audio = s.audio();
        audio.set_sfx_volume(30);
        audio.set_enabled(false);
        s.capture_audio(&audio);
        assert_eq!(s.sfx_volume, 30);
        assert!(!s.sound_enabled);
    }
}
