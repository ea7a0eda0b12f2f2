//! Car runner state and core simulation types
//!
//! Everything the car runner tick reads or mutates lives here. Randomness comes
//! from a PCG generator seeded per state, so a seed plus an input sequence
//! reproduces a run exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::event::GameEvent;
use crate::lane_center;

/// Difficulty tier, fixed at run start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Menu level number (1 = Easy .. 3 = Hard)
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "medium" | "med" | "2" => Some(Difficulty::Medium),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Scroll speed at run start
    pub fn base_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 6.0,
            Difficulty::Medium => 10.0,
            Difficulty::Hard => 14.0,
        }
    }

    /// Ticks between enemy car spawns
    pub fn enemy_spawn_interval(&self) -> u64 {
        match self {
            Difficulty::Easy => 90,
            Difficulty::Medium => 60,
            Difficulty::Hard => 40,
        }
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Enemy traffic variants (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarKind {
    Car,
    Truck,
    Taxi,
    Police,
}

impl CarKind {
    pub const ALL: [CarKind; 4] = [CarKind::Car, CarKind::Truck, CarKind::Taxi, CarKind::Police];
}

/// An enemy car driving down a lane
#[derive(Debug, Clone)]
pub struct EnemyCar {
    pub id: u32,
    pub pos: Vec2,
    pub lane: usize,
    pub kind: CarKind,
    /// Own forward speed; the car closes in at `run speed - speed`
    pub speed: f32,
}

/// A spinning coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    /// Spin angle in degrees
    pub rotation: f32,
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: u32,
    pub color: [u8; 3],
}

pub const GOLD: [u8; 3] = [255, 215, 0];

/// The player's car
#[derive(Debug, Clone)]
pub struct Player {
    lane: usize,
    pub pos: Vec2,
    pub target_x: f32,
}

impl Default for Player {
    fn default() -> Self {
        let x = lane_center(START_LANE);
        Self {
            lane: START_LANE,
            pos: Vec2::new(x, PLAYER_Y),
            target_x: x,
        }
    }
}

impl Player {
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Shift one lane left; no-op at the left edge
    pub fn steer_left(&mut self) -> bool {
        if self.lane == 0 {
            return false;
        }
        self.lane -= 1;
        self.target_x = lane_center(self.lane);
        true
    }

    /// Shift one lane right; no-op at the right edge
    pub fn steer_right(&mut self) -> bool {
        if self.lane + 1 >= LANE_COUNT {
            return false;
        }
        self.lane += 1;
        self.target_x = lane_center(self.lane);
        true
    }

    /// Jump straight to a lane centre (after a crash)
    pub fn snap_to_lane(&mut self, lane: usize) {
        self.lane = lane.min(LANE_COUNT - 1);
        self.pos.x = lane_center(self.lane);
        self.target_x = self.pos.x;
    }

    /// Ease toward the target lane centre
    pub fn ease(&mut self) {
        self.pos.x += (self.target_x - self.pos.x) * LANE_EASING;
    }
}

/// Player explosion animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    pub frame: u32,
}

impl Explosion {
    /// Player sprite blinks while exploding
    pub fn player_visible(&self) -> bool {
        self.frame % 6 < 3
    }
}

/// Complete car runner state
#[derive(Debug, Clone)]
pub struct RunState {
    /// Seed the RNG started from
    pub seed: u64,
    rng: Pcg32,
    /// Fixed when the state is created
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    /// Ticks since the state was created (drives cosmetics)
    pub frame_count: u64,
    /// Ticks since the current run started (drives spawns and ramps)
    pub run_ticks: u64,
    pub player: Player,
    pub lives: u8,
    pub score: u64,
    pub distance: f32,
    pub speed: f32,
    /// At most one explosion at a time
    pub explosion: Option<Explosion>,
    pub road_offset: f32,
    /// 0 = day, 1 = night
    pub time_of_day: f32,
    pub enemies: Vec<EnemyCar>,
    pub coins: Vec<Coin>,
    pub particles: Vec<Particle>,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl RunState {
    /// Create a state on the title screen
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty,
            phase: GamePhase::Menu,
            frame_count: 0,
            run_ticks: 0,
            player: Player::default(),
            lives: MAX_LIVES,
            score: 0,
            distance: 0.0,
            speed: difficulty.base_speed(),
            explosion: None,
            road_offset: 0.0,
            time_of_day: 0.0,
            enemies: Vec::new(),
            coins: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset run values and enter `Playing`
    pub fn start_run(&mut self) {
        self.player = Player::default();
        self.lives = MAX_LIVES;
        self.score = 0;
        self.distance = 0.0;
        self.speed = self.difficulty.base_speed();
        self.explosion = None;
        self.road_offset = 0.0;
        self.time_of_day = 0.0;
        self.run_ticks = 0;
        self.enemies.clear();
        self.coins.clear();
        self.particles.clear();
        self.phase = GamePhase::Playing;

        log::info!(
            "Car run started ({}, base speed {})",
            self.difficulty.as_str(),
            self.speed
        );
        self.events.push(GameEvent::RunStarted {
            difficulty: Some(self.difficulty),
        });
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_exploding(&self) -> bool {
        self.explosion.is_some()
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an enemy car at the top of a lane
    pub fn spawn_enemy(&mut self, lane: usize, kind: CarKind, speed: f32) -> u32 {
        let lane = lane.min(LANE_COUNT - 1);
        let id = self.next_entity_id();
        self.enemies.push(EnemyCar {
            id,
            pos: Vec2::new(lane_center(lane), ENEMY_SPAWN_Y),
            lane,
            kind,
            speed,
        });
        id
    }

    /// Spawn a coin at the top of a lane
    pub fn spawn_coin(&mut self, lane: usize) -> u32 {
        let lane = lane.min(LANE_COUNT - 1);
        let id = self.next_entity_id();
        self.coins.push(Coin {
            id,
            pos: Vec2::new(lane_center(lane), COIN_SPAWN_Y),
            rotation: 0.0,
        });
        id
    }

    /// Spawn an enemy car with random lane, kind and speed
    pub(crate) fn spawn_random_enemy(&mut self) {
        let lane = self.rng.random_range(0..LANE_COUNT);
        let kind = CarKind::ALL[self.rng.random_range(0..CarKind::ALL.len())];
        let speed = self.rng.random_range(3..6) as f32;
        let id = self.spawn_enemy(lane, kind, speed);
        log::debug!("Spawned {kind:?} #{id} in lane {lane} (speed {speed})");
    }

    pub(crate) fn spawn_random_coin(&mut self) {
        let lane = self.rng.random_range(0..LANE_COUNT);
        self.spawn_coin(lane);
    }

    /// Explosion burst at the player's position
    pub(crate) fn burst_explosion(&mut self) {
        let origin = self.player.pos;
        for _ in 0..EXPLOSION_PARTICLES {
            let vel = Vec2::new(
                self.rng.random::<f32>() * 10.0 - 5.0,
                self.rng.random::<f32>() * 10.0 - 5.0,
            );
            let color = [
                255,
                self.rng.random_range(200..=255),
                self.rng.random_range(0..100),
            ];
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: EXPLOSION_PARTICLE_LIFE,
                color,
            });
        }
    }

    /// Gold sparkle where a coin was picked up
    pub(crate) fn burst_sparkle(&mut self, origin: Vec2) {
        for _ in 0..SPARKLE_PARTICLES {
            let vel = Vec2::new(
                self.rng.random::<f32>() * 6.0 - 3.0,
                self.rng.random::<f32>() * 6.0 - 3.0,
            );
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: SPARKLE_PARTICLE_LIFE,
                color: GOLD,
            });
        }
    }

    /// Player collided with traffic: lose a life and start exploding
    pub(crate) fn crash(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.explosion = Some(Explosion { frame: 0 });
        self.burst_explosion();
        self.emit(GameEvent::PlayerHurt);

        if self.lives == 0 {
            self.end_run();
        }
    }

    fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "Car run over: score {} distance {}m ({})",
            self.score,
            self.distance as u32,
            self.difficulty.as_str()
        );
        self.emit(GameEvent::PlayerDied);
        self.emit(GameEvent::GameOver {
            score: self.score,
            distance: self.distance as u32,
            difficulty: Some(self.difficulty),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_tiers() {
        assert_eq!(Difficulty::Easy.base_speed(), 6.0);
        assert_eq!(Difficulty::Medium.enemy_spawn_interval(), 60);
        assert_eq!(Difficulty::Hard.base_speed(), 14.0);
        assert_eq!(Difficulty::from_level(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_level(4), None);
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(d.level()), Some(d));
        }
    }

    #[test]
    fn new_state_waits_on_menu() {
        let state = RunState::new(Difficulty::Medium, 1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, MAX_LIVES);
        assert_eq!(state.speed, 10.0);
        assert_eq!(state.player.lane(), START_LANE);
    }

    #[test]
    fn steering_stops_at_road_edges() {
        let mut player = Player::default();
        assert!(player.steer_left());
        assert!(!player.steer_left());
        assert_eq!(player.lane(), 0);
        assert!(player.steer_right());
        assert!(player.steer_right());
        assert!(!player.steer_right());
        assert_eq!(player.lane(), LANE_COUNT - 1);
        assert_eq!(player.target_x, lane_center(LANE_COUNT - 1));
    }

    #[test]
    fn easing_approaches_target() {
        let mut player = Player::default();
        player.steer_right();
        let before = (player.target_x - player.pos.x).abs();
        player.ease();
        let after = (player.target_x - player.pos.x).abs();
        assert!((after - before * 0.85).abs() < 1e-3);
    }

    #[test]
    fn crash_on_last_life_ends_run_once() {
        let mut state = RunState::new(Difficulty::Easy, 3);
        state.start_run();
        state.drain_events();
        state.lives = 1;
        state.crash();
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        let overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
        assert_eq!(state.particles.len(), EXPLOSION_PARTICLES);
    }

    #[test]
    fn explosion_blinks() {
        assert!(Explosion { frame: 0 }.player_visible());
        assert!(!Explosion { frame: 4 }.player_visible());
        assert!(Explosion { frame: 6 }.player_visible());
    }

    #[test]
    fn same_seed_spawns_same_traffic() {
        let mut a = RunState::new(Difficulty::Hard, 42);
        let mut b = RunState::new(Difficulty::Hard, 42);
        for _ in 0..5 {
            a.spawn_random_enemy();
            b.spawn_random_enemy();
        }
        for (x, y) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(x.lane, y.lane);
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.speed, y.speed);
            assert!((3.0..=5.0).contains(&x.speed));
        }
    }
}
