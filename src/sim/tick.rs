//! Fixed tick for the car runner
//!
//! One call advances the world by one 16 ms step, in a fixed order:
//! spawn, move and collide traffic, collect coins, age particles, advance the
//! explosion. Nothing here reads the clock.

use std::mem;

use super::collision::{car_hits_player, coin_reaches_player};
use super::state::{GamePhase, RunState};
use super::time::FixedTimestep;
use crate::consts::*;
use crate::event::GameEvent;
use crate::input::TickInput;

/// Advance the car runner by one fixed step
pub fn tick(state: &mut RunState, input: &TickInput) {
    state.frame_count += 1;

    if state.phase != GamePhase::Playing {
        // Title / game over screen: keep the road scrolling
        state.road_offset = scroll(state.road_offset, MENU_SCROLL);
        if input.start {
            state.start_run();
        }
        return;
    }

    // Lane changes are locked while the explosion plays
    if !state.is_exploding() {
        if input.left {
            state.player.steer_left();
        }
        if input.right {
            state.player.steer_right();
        }
    }

    state.run_ticks += 1;
    state.player.ease();

    // Road, distance and speed ramp
    state.road_offset = scroll(state.road_offset, state.speed);
    state.distance += state.speed * 0.1;
    if state.run_ticks % SPEED_UP_INTERVAL == 0 {
        state.speed += SPEED_UP_STEP;
        log::debug!("Speed up to {:.1}", state.speed);
        state.emit(GameEvent::SpeedUp { speed: state.speed });
    }

    // Day/night cycle
    state.time_of_day = (((state.frame_count as f64 * 0.001).sin() + 1.0) / 2.0) as f32;

    // Spawning
    if state.run_ticks % state.difficulty.enemy_spawn_interval() == 0 {
        state.spawn_random_enemy();
    }
    if state.run_ticks % COIN_SPAWN_INTERVAL == 0 {
        state.spawn_random_coin();
    }

    update_traffic(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    update_coins(state);
    update_particles(state);
    update_explosion(state);
}

/// Run as many fixed ticks as `frame_dt` of wall time covers.
/// Commands apply to the first tick only. Returns the number of ticks run.
pub fn advance(
    state: &mut RunState,
    timestep: &mut FixedTimestep,
    frame_dt: f32,
    input: &TickInput,
) -> u32 {
    let steps = timestep.accumulate(frame_dt);
    let mut input = *input;
    for _ in 0..steps {
        tick(state, &input);
        input = TickInput::default();
    }
    steps
}

fn scroll(offset: f32, amount: f32) -> f32 {
    let offset = offset + amount;
    if offset > ROAD_WRAP { 0.0 } else { offset }
}

/// Move enemy cars, resolve crashes, drop cars past the bottom edge
fn update_traffic(state: &mut RunState) {
    let speed = state.speed;
    let mut enemies = mem::take(&mut state.enemies);

    enemies.retain_mut(|car| {
        car.pos.y += speed - car.speed;

        if state.is_playing()
            && !state.is_exploding()
            && car_hits_player(state.player.pos, car.pos)
        {
            log::debug!("Crashed into {:?} #{}", car.kind, car.id);
            state.crash();
            return false;
        }

        car.pos.y <= OFFSCREEN_Y
    });

    state.enemies = enemies;
}

/// Move and spin coins, collect the ones the player touches
fn update_coins(state: &mut RunState) {
    let speed = state.speed;
    let mut coins = mem::take(&mut state.coins);

    coins.retain_mut(|coin| {
        coin.pos.y += speed;
        coin.rotation += COIN_SPIN;

        if coin_reaches_player(state.player.pos, coin.pos) {
            state.score += COIN_VALUE;
            state.burst_sparkle(coin.pos);
            state.emit(GameEvent::CoinCollected { points: COIN_VALUE });
            return false;
        }

        coin.pos.y <= OFFSCREEN_Y
    });

    state.coins = coins;
}

fn update_particles(state: &mut RunState) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    state.particles.retain(|p| p.life > 0);
}

fn update_explosion(state: &mut RunState) {
    let Some(explosion) = state.explosion.as_mut() else {
        return;
    };

    explosion.frame += 1;
    if explosion.frame > EXPLOSION_FRAMES {
        state.explosion = None;
        if state.lives > 0 {
            state.player.snap_to_lane(START_LANE);
        }
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::sim::state::Difficulty;

    fn command() -> impl Strategy<Value = TickInput> {
        prop_oneof![
            Just(TickInput::default()),
            Just(TickInput::left()),
            Just(TickInput::right()),
            Just(TickInput {
                left: true,
                right: true,
                ..Default::default()
            }),
        ]
    }

    fn difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn run_invariants_hold(
            seed in any::<u64>(),
            difficulty in difficulty(),
            inputs in prop::collection::vec(command(), 1..1500),
        ) {
            let mut state = RunState::new(difficulty, seed);
            tick(&mut state, &TickInput::start());

            let mut lives = state.lives;
            let mut speed = state.speed;
            let mut score = state.score;
            let mut distance = state.distance;

            for input in &inputs {
                tick(&mut state, input);

                prop_assert!(state.lives <= MAX_LIVES);
                prop_assert!(state.lives <= lives);
                prop_assert!(state.speed >= speed);
                prop_assert!(state.score >= score);
                prop_assert!(state.distance >= distance);
                prop_assert!(state.player.lane() < LANE_COUNT);

                lives = state.lives;
                speed = state.speed;
                score = state.score;
                distance = state.distance;
            }

            let overs = state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();
            prop_assert!(overs <= 1);
            prop_assert_eq!(overs == 1, state.phase == GamePhase::GameOver);
        }

        #[test]
        fn lane_stays_on_road(presses in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut state = RunState::new(Difficulty::Easy, 9);
            tick(&mut state, &TickInput::start());
            for go_left in presses {
                let input = if go_left { TickInput::left() } else { TickInput::right() };
                tick(&mut state, &input);
                prop_assert!(state.player.lane() < LANE_COUNT);
            }
        }
    }
}
