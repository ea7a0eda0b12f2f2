//! Lane Runner - arcade runner simulations
//!
//! Core modules:
//! - `sim`: Deterministic runner simulations (car runner, classic runner)
//! - `framework`: Reusable entity framework (objects, movement, collision, physics)
//! - `renderer`: Per-entity draw parameters for an external renderer
//! - `context`: Explicit context replacing score/audio/data singletons
//! - `persistence`: Score log, save file and settings storage
//! - `audio`: Sound events mapped to tones
//! - `autopilot`: Scripted players for headless sessions

pub mod audio;
pub mod autopilot;
pub mod context;
pub mod event;
pub mod framework;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod scores;
pub mod settings;
pub mod sim;

pub use context::GameContext;
pub use event::GameEvent;
pub use highscores::HighScores;
pub use input::TickInput;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (16 ms, ~60 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Car runner road geometry
    pub const ROAD_LEFT: f32 = 150.0;
    pub const ROAD_RIGHT: f32 = 650.0;
    pub const ROAD_WIDTH: f32 = 500.0;
    pub const LANE_WIDTH: i32 = 166;
    pub const LANE_COUNT: usize = 3;
    pub const START_LANE: usize = 1;

    /// Car runner player
    pub const PLAYER_Y: f32 = 700.0;
    pub const MAX_LIVES: u8 = 3;
    /// Fraction of the remaining lane offset covered each tick
    pub const LANE_EASING: f32 = 0.15;

    /// Player vs enemy car thresholds (per axis, not a true box overlap)
    pub const CAR_HIT_DX: f32 = 50.0;
    pub const CAR_HIT_DY: f32 = 70.0;
    /// Player vs coin thresholds
    pub const COIN_HIT_DX: f32 = 40.0;
    pub const COIN_HIT_DY: f32 = 40.0;

    /// Entities below this y are gone
    pub const OFFSCREEN_Y: f32 = 950.0;
    pub const ENEMY_SPAWN_Y: f32 = -100.0;
    pub const COIN_SPAWN_Y: f32 = -50.0;
    pub const COIN_SPAWN_INTERVAL: u64 = 90;
    pub const COIN_VALUE: u64 = 10;
    pub const COIN_SPIN: f32 = 5.0;

    /// Speed ramps by this much every `SPEED_UP_INTERVAL` run ticks
    pub const SPEED_UP_INTERVAL: u64 = 300;
    pub const SPEED_UP_STEP: f32 = 0.3;

    /// Explosion animation length in frames
    pub const EXPLOSION_FRAMES: u32 = 30;
    pub const EXPLOSION_PARTICLES: usize = 20;
    pub const EXPLOSION_PARTICLE_LIFE: u32 = 30;
    pub const SPARKLE_PARTICLES: usize = 10;
    pub const SPARKLE_PARTICLE_LIFE: u32 = 20;

    /// Road scroll wraps past this offset
    pub const ROAD_WRAP: f32 = 100.0;
    /// Road scroll per tick while the menu is shown
    pub const MENU_SCROLL: f32 = 2.0;

    /// Speed above which the renderer draws speed lines
    pub const SPEED_LINES_THRESHOLD: f32 = 12.0;
}

/// X coordinate of a lane centre
#[inline]
pub fn lane_center(lane: usize) -> f32 {
    use consts::{LANE_WIDTH, ROAD_LEFT};
    ROAD_LEFT + (lane as i32 * LANE_WIDTH + LANE_WIDTH / 2) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_centers_match_road_layout() {
        assert_eq!(lane_center(0), 233.0);
        assert_eq!(lane_center(1), 399.0);
        assert_eq!(lane_center(2), 565.0);
    }
}
