//! Audio system
//!
//! Sounds are simple beeps: every [`SoundEvent`] maps to a fixed tone. The
//! manager queues tones for the host to play; nothing here touches a device.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEvent {
    /// Coin or collectible picked up
    Coin,
    /// Player lost a life
    Hurt,
    /// Run over
    Death,
    /// Menu button
    Click,
    Jump,
    EnemyHit,
    EnemyDeath,
}

/// A beep to play
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub freq_hz: u32,
    pub duration_ms: u32,
    /// 0.0 - 1.0
    pub volume: f32,
}

impl SoundEvent {
    /// Frequency and duration of the beep for this event
    pub fn beep(self) -> (u32, u32) {
        match self {
            SoundEvent::Coin => (800, 50),
            SoundEvent::Hurt => (200, 100),
            SoundEvent::Death => (150, 300),
            SoundEvent::Click => (600, 50),
            SoundEvent::EnemyDeath => (300, 150),
            SoundEvent::Jump | SoundEvent::EnemyHit => (500, 50),
        }
    }
}

pub const MAX_VOLUME: u8 = 100;

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    enabled: bool,
    music_volume: u8,
    sfx_volume: u8,
    queue: Vec<Tone>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(true, 65, MAX_VOLUME)
    }
}

impl AudioManager {
    pub fn new(enabled: bool, music_volume: u8, sfx_volume: u8) -> Self {
        Self {
            enabled,
            music_volume: music_volume.min(MAX_VOLUME),
            sfx_volume: sfx_volume.min(MAX_VOLUME),
            queue: Vec::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn music_volume(&self) -> u8 {
        self.music_volume
    }

    pub fn sfx_volume(&self) -> u8 {
        self.sfx_volume
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.queue.clear();
        }
    }

    /// Set music volume (0 - 100)
    pub fn set_music_volume(&mut self, vol: u8) {
        self.music_volume = vol.min(MAX_VOLUME);
    }

    /// Set SFX volume (0 - 100)
    pub fn set_sfx_volume(&mut self, vol: u8) {
        self.sfx_volume = vol.min(MAX_VOLUME);
    }

    /// Queue the tone for an event; silent when disabled or SFX is at zero
    pub fn play(&mut self, event: SoundEvent) {
        if !self.enabled || self.sfx_volume == 0 {
            return;
        }
        let (freq_hz, duration_ms) = event.beep();
        self.queue.push(Tone {
            freq_hz,
            duration_ms,
            volume: self.sfx_volume as f32 / MAX_VOLUME as f32,
        });
    }

    /// Tones queued since the last drain
    pub fn drain_tones(&mut self) -> Vec<Tone> {
        std::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_map_to_beeps() {
        assert_eq!(SoundEvent::Coin.beep(), (800, 50));
        assert_eq!(SoundEvent::Hurt.beep(), (200, 100));
        assert_eq!(SoundEvent::Death.beep(), (150, 300));
        assert_eq!(SoundEvent::Click.beep(), (600, 50));
        assert_eq!(SoundEvent::EnemyDeath.beep(), (300, 150));
        assert_eq!(SoundEvent::Jump.beep(), (500, 50));
    }

    #[test]
    fn play_queues_scaled_tone() {
        let mut audio = AudioManager::new(true, 65, 50);
        audio.play(SoundEvent::Coin);
        let tones = audio.drain_tones();
        assert_eq!(tones.len(), 1);
        assert_eq!(tones[0].freq_hz, 800);
        assert_eq!(tones[0].volume, 0.5);
        assert!(audio.drain_tones().is_empty());
    }

    #[test]
    fn silent_when_disabled_or_zero_sfx() {
        let mut audio = AudioManager::default();
        audio.set_sfx_volume(0);
        audio.play(SoundEvent::Hurt);
        assert!(audio.drain_tones().is_empty());

        audio.set_sfx_volume(100);
        audio.set_enabled(false);
        audio.play(SoundEvent::Hurt);
        assert!(audio.drain_tones().is_empty());
    }

    #[test]
    fn volumes_are_clamped() {
        let mut audio = AudioManager::new(true, 250, 180);
        assert_eq!(audio.music_volume(), 100);
        assert_eq!(audio.sfx_volume(), 100);
        audio.set_music_volume(101);
        assert_eq!(audio.music_volume(), 100);
    }
}
