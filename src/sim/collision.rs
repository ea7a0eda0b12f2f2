//! Collision checks for the runner games
//!
//! Both runners test each axis independently against a threshold instead of
//! intersecting boxes. Near the corners this reports hits that a box test
//! would miss (and the reverse for very wide sprites). Gameplay is tuned
//! around it, so it stays.

use glam::{IVec2, Vec2};

use crate::consts::{CAR_HIT_DX, CAR_HIT_DY, COIN_HIT_DX, COIN_HIT_DY};

/// Independent per-axis distance test
#[inline]
pub fn within_axes(a: Vec2, b: Vec2, max_dx: f32, max_dy: f32) -> bool {
    (a.x - b.x).abs() < max_dx && (a.y - b.y).abs() < max_dy
}

/// Integer variant for the classic runner's pixel grid
#[inline]
pub fn within_axes_i(a: IVec2, b: IVec2, max_dx: i32, max_dy: i32) -> bool {
    (a.x - b.x).abs() < max_dx && (a.y - b.y).abs() < max_dy
}

/// Player car against an enemy car
#[inline]
pub fn car_hits_player(player: Vec2, car: Vec2) -> bool {
    within_axes(player, car, CAR_HIT_DX, CAR_HIT_DY)
}

/// Player car against a coin
#[inline]
pub fn coin_reaches_player(player: Vec2, coin: Vec2) -> bool {
    within_axes(player, coin, COIN_HIT_DX, COIN_HIT_DY)
}
