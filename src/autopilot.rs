//! Scripted players for unattended sessions
//!
//! Each function looks at a state and picks the input a cautious player would
//! press this tick. Used by the headless binary and by soak tests.

use crate::consts::{CAR_HIT_DY, LANE_COUNT, PLAYER_Y};
use crate::input::TickInput;
use crate::sim::classic::{HIT_RANGE, PLAYER_MAX, PLAYER_MIN, SlotKind};
use crate::sim::{ClassicState, GamePhase, RunState};

/// How far ahead of the player traffic is considered a threat
const LOOKAHEAD: f32 = 350.0;
/// Classic runner: vertical window above the player that is watched
const CLASSIC_LOOKAHEAD: i32 = 220;

/// Distance to the nearest threatening car in `lane`, if any
fn lane_threat(state: &RunState, lane: usize) -> Option<f32> {
    state
        .enemies
        .iter()
        .filter(|e| e.lane == lane)
        .map(|e| PLAYER_Y - e.pos.y)
        .filter(|gap| *gap < LOOKAHEAD && *gap > -CAR_HIT_DY)
        .min_by(|a, b| a.total_cmp(b))
}

fn lane_has_coin(state: &RunState, lane: usize) -> bool {
    let center = crate::lane_center(lane);
    state.coins.iter().any(|c| {
        (c.pos.x - center).abs() < 1.0 && c.pos.y < PLAYER_Y && c.pos.y > PLAYER_Y - LOOKAHEAD
    })
}

/// Input for the car runner: start when idle, dodge traffic, drift toward coins
pub fn car_runner(state: &RunState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput::start();
    }
    if state.is_exploding() {
        return TickInput::default();
    }

    let current = state.player.lane();
    let safe = |lane: usize| lane_threat(state, lane).is_none();

    // Prefer staying put, then the nearest safe lane, coins breaking ties
    let mut best = current;
    let mut best_cost = i32::MAX;
    for lane in 0..LANE_COUNT {
        let mut cost = lane.abs_diff(current) as i32 * 2;
        if !safe(lane) {
            cost += 100;
        }
        // A two-lane hop crosses the middle lane
        if lane.abs_diff(current) == 2 && !safe(1) {
            cost += 50;
        }
        if lane_has_coin(state, lane) {
            cost -= 3;
        }
        if cost < best_cost {
            best_cost = cost;
            best = lane;
        }
    }

    match best.cmp(&current) {
        std::cmp::Ordering::Less => TickInput::left(),
        std::cmp::Ordering::Greater => TickInput::right(),
        std::cmp::Ordering::Equal => TickInput::default(),
    }
}

/// Input for the classic runner: sidestep obstacles and the chaser, chase coins
pub fn classic_runner(state: &ClassicState) -> TickInput {
    if state.phase != GamePhase::Playing {
        return TickInput::start();
    }

    let player = state.player;
    let approaching = |x: i32, y: i32| {
        let gap = y - player.y;
        gap > -HIT_RANGE && gap < CLASSIC_LOOKAHEAD && (x - player.x).abs() < HIT_RANGE + 30
    };

    let mut threat = state
        .slots
        .iter()
        .filter(|s| s.kind == SlotKind::Obstacle && approaching(s.pos.x, s.pos.y))
        .map(|s| s.pos.x)
        .next();
    if threat.is_none() && state.chaser_active() && approaching(state.chaser.x, state.chaser.y) {
        threat = Some(state.chaser.x);
    }

    if let Some(x) = threat {
        let go_left = if player.x - PLAYER_MIN.x < 60 {
            false
        } else if PLAYER_MAX.x - player.x < 60 {
            true
        } else {
            x >= player.x
        };
        return if go_left { TickInput::left() } else { TickInput::right() };
    }

    let coin = state
        .slots
        .iter()
        .filter(|s| s.kind == SlotKind::Coin && s.pos.y > player.y)
        .min_by_key(|s| s.pos.y - player.y);
    match coin {
        Some(c) if c.pos.x < player.x - 10 => TickInput::left(),
        Some(c) if c.pos.x > player.x + 10 => TickInput::right(),
        _ => TickInput::default(),
    }
}
