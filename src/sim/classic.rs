//! Classic vertical runner
//!
//! The simpler of the two runners: the player moves freely inside a clamped
//! box while five recycled slots scroll past, each holding either an obstacle
//! or a coin. Once the score passes 100 a chaser enemy joins in. Coordinates
//! are integer pixels with y pointing up (the renderer flips them).

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::within_axes_i;
use super::state::GamePhase;
use crate::consts::MAX_LIVES;
use crate::event::GameEvent;
use crate::input::TickInput;

pub const SLOT_COUNT: usize = 5;
pub const PLAYER_START: IVec2 = IVec2::new(425, 100);
pub const PLAYER_STEP: i32 = 20;
pub const PLAYER_MIN: IVec2 = IVec2::new(35, 50);
pub const PLAYER_MAX: IVec2 = IVec2::new(815, 750);
pub const HIT_RANGE: i32 = 40;
pub const START_SPEED: f32 = 5.0;
/// Slots are parked here after a hit so they respawn on the same tick
pub const SLOT_PARK_Y: i32 = -100;
pub const SLOT_RESPAWN_BELOW: i32 = -50;
pub const CHASER_START: IVec2 = IVec2::new(425, 1000);
pub const CHASER_RECYCLE_BELOW: i32 = -100;
pub const CHASER_TRACK_STEP: i32 = 2;
/// Chaser appears once the score is strictly above this
pub const CHASER_SCORE: u64 = 100;
pub const SPEED_STEP: f32 = 0.01;

/// What a slot currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    Obstacle,
    Coin,
}

/// One recycled obstacle/coin slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub pos: IVec2,
    pub kind: SlotKind,
}

/// Complete classic runner state
#[derive(Debug, Clone)]
pub struct ClassicState {
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: IVec2,
    pub chaser: IVec2,
    pub slots: [Slot; SLOT_COUNT],
    pub score: u64,
    pub lives: u8,
    /// Metres run (one per tick)
    pub distance: u32,
    pub speed: f32,
    events: Vec<GameEvent>,
}

impl ClassicState {
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            player: PLAYER_START,
            chaser: CHASER_START,
            slots: [Slot {
                pos: IVec2::ZERO,
                kind: SlotKind::Obstacle,
            }; SLOT_COUNT],
            score: 0,
            lives: MAX_LIVES,
            distance: 0,
            speed: START_SPEED,
            events: Vec::new(),
        };
        state.reset_run();
        state
    }

    fn reset_run(&mut self) {
        self.player = PLAYER_START;
        self.chaser = CHASER_START;
        self.score = 0;
        self.lives = MAX_LIVES;
        self.distance = 0;
        self.speed = START_SPEED;
        for i in 0..SLOT_COUNT {
            let x = self.random_slot_x();
            let kind = self.random_kind();
            self.slots[i] = Slot {
                pos: IVec2::new(x, 850 + i as i32 * 200),
                kind,
            };
        }
    }

    /// Reset run values and enter `Playing`
    pub fn start_run(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Playing;
        log::info!("Classic run started");
        self.events.push(GameEvent::RunStarted { difficulty: None });
    }

    pub fn chaser_active(&self) -> bool {
        self.score > CHASER_SCORE
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn random_slot_x(&mut self) -> i32 {
        self.rng.random_range(25..825)
    }

    fn random_kind(&mut self) -> SlotKind {
        if self.rng.random_bool(0.5) {
            SlotKind::Coin
        } else {
            SlotKind::Obstacle
        }
    }

    fn respawn_slot(&mut self, index: usize) {
        let y = 900 + self.rng.random_range(0..200);
        let x = self.random_slot_x();
        let kind = self.random_kind();
        self.slots[index] = Slot {
            pos: IVec2::new(x, y),
            kind,
        };
    }

    /// Lose a life; returns true when the run ended
    fn hurt(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::PlayerHurt);
        if self.lives > 0 {
            return false;
        }

        self.phase = GamePhase::GameOver;
        log::info!(
            "Classic run over: score {} distance {}m",
            self.score,
            self.distance
        );
        self.events.push(GameEvent::PlayerDied);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            distance: self.distance,
            difficulty: None,
        });
        true
    }
}

/// Advance the classic runner by one fixed step
pub fn tick(state: &mut ClassicState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        if input.start {
            state.start_run();
        }
        return;
    }

    // Movement commands (y points up)
    let mut step = IVec2::ZERO;
    if input.left {
        step.x -= PLAYER_STEP;
    }
    if input.right {
        step.x += PLAYER_STEP;
    }
    if input.up {
        step.y += PLAYER_STEP;
    }
    if input.down {
        step.y -= PLAYER_STEP;
    }
    state.player = (state.player + step).clamp(PLAYER_MIN, PLAYER_MAX);

    state.distance += 1;
    let scroll = state.speed as i32;

    for i in 0..SLOT_COUNT {
        state.slots[i].pos.y -= scroll;

        let slot = state.slots[i];
        if within_axes_i(state.player, slot.pos, HIT_RANGE, HIT_RANGE) {
            state.slots[i].pos.y = SLOT_PARK_Y;
            match slot.kind {
                SlotKind::Obstacle => {
                    if state.hurt() {
                        return;
                    }
                }
                SlotKind::Coin => {
                    state.score += 10;
                    state.events.push(GameEvent::CoinCollected { points: 10 });
                }
            }
        }

        // Every slot that scrolls away counts for a point
        if state.slots[i].pos.y < SLOT_RESPAWN_BELOW {
            state.respawn_slot(i);
            state.score += 1;
        }
    }

    if state.chaser_active() {
        state.chaser.y -= (state.speed + 1.0) as i32;
        if state.chaser.x < state.player.x {
            state.chaser.x += CHASER_TRACK_STEP;
        } else if state.chaser.x > state.player.x {
            state.chaser.x -= CHASER_TRACK_STEP;
        }
        if state.chaser.y < CHASER_RECYCLE_BELOW {
            state.chaser.y = CHASER_START.y;
            state.chaser.x = state.rng.random_range(0..850);
        }

        if within_axes_i(state.player, state.chaser, HIT_RANGE, HIT_RANGE) {
            state.chaser.y = CHASER_START.y;
            if state.hurt() {
                return;
            }
        }
    }

    if state.score > 0 && state.score % 100 == 0 {
        state.speed += SPEED_STEP;
    }
}
