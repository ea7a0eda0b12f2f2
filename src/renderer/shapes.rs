//! Frame builders for each game

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{DrawItem, DrawKind, Frame, Hud, Rgba};
use crate::consts::*;
use crate::framework::{Game, ObjectKind};
use crate::sim::{CarKind, ClassicState, GamePhase, RunState, SlotKind};

pub const CAR_SCREEN: Vec2 = Vec2::new(850.0, 900.0);
pub const CLASSIC_SCREEN: Vec2 = Vec2::new(850.0, 850.0);

const WHITE: Rgba = [255, 255, 255, 255];
const GOLD: Rgba = [255, 215, 0, 255];
const GRASS: Rgba = [34, 139, 34, 255];
const ASPHALT: Rgba = [60, 60, 60, 255];
const PLAYER_RED: Rgba = [220, 20, 60, 255];

/// Speed gauge span above the base speed
const GAUGE_SPAN: f32 = 12.0;
const SPEED_LINE_COUNT: usize = 10;

/// Top colour of the sky gradient: light blue by day, dark blue at night
pub fn sky_color(time_of_day: f32) -> Rgba {
    let channel = |day: f32, drop: f32| (day - time_of_day * drop).clamp(0.0, 255.0) as u8;
    [channel(135.0, 115.0), channel(206.0, 180.0), channel(235.0, 200.0), 255]
}

/// Gauge colour: green at base speed, red at the top of the gauge
pub fn speed_color(fraction: f32) -> Rgba {
    let t = fraction.clamp(0.0, 1.0);
    [(255.0 * t) as u8, (255.0 * (1.0 - t)) as u8, 0, 255]
}

/// Coin half-width for a spin angle in degrees, never thinner than 4
pub fn coin_half_width(rotation: f32) -> f32 {
    (20.0 * rotation.to_radians().cos().abs()).max(4.0)
}

pub fn car_body_color(kind: CarKind) -> Rgba {
    match kind {
        CarKind::Car => [60, 60, 70, 255],
        CarKind::Truck => [0, 0, 139, 255],
        CarKind::Taxi => [255, 255, 0, 255],
        CarKind::Police => WHITE,
    }
}

pub fn car_size(kind: CarKind) -> Vec2 {
    match kind {
        CarKind::Truck => Vec2::new(50.0, 110.0),
        _ => Vec2::new(50.0, 75.0),
    }
}

/// Describe a car runner state
pub fn car_runner_frame(state: &RunState) -> Frame {
    let mut items = Vec::with_capacity(64 + state.particles.len());

    items.push(
        DrawItem::new(
            DrawKind::Sky,
            Vec2::new(CAR_SCREEN.x / 2.0, 100.0),
            Vec2::new(CAR_SCREEN.x, 200.0),
            sky_color(state.time_of_day),
        )
        .with_phase(state.time_of_day),
    );
    let verge = ROAD_LEFT - 10.0;
    items.push(DrawItem::new(
        DrawKind::Grass,
        Vec2::new(verge / 2.0, CAR_SCREEN.y / 2.0),
        Vec2::new(verge, CAR_SCREEN.y),
        GRASS,
    ));
    items.push(DrawItem::new(
        DrawKind::Grass,
        Vec2::new(ROAD_RIGHT + 10.0 + 100.0, CAR_SCREEN.y / 2.0),
        Vec2::new(200.0, CAR_SCREEN.y),
        GRASS,
    ));
    items.push(DrawItem::new(
        DrawKind::Road,
        Vec2::new(ROAD_LEFT + ROAD_WIDTH / 2.0, CAR_SCREEN.y / 2.0),
        Vec2::new(ROAD_WIDTH, CAR_SCREEN.y),
        ASPHALT,
    ));

    // Dashed lane separators scroll with the road
    for lane in 1..LANE_COUNT {
        let x = ROAD_LEFT + (lane as i32 * LANE_WIDTH) as f32;
        for i in 0..15 {
            let y = (i as f32 * 80.0 + state.road_offset) % 1000.0 - 100.0;
            items.push(DrawItem::new(
                DrawKind::LaneMark,
                Vec2::new(x, y + 20.0),
                Vec2::new(4.0, 40.0),
                WHITE,
            ));
        }
    }

    for coin in &state.coins {
        let half = coin_half_width(coin.rotation);
        items.push(
            DrawItem::new(DrawKind::Coin, coin.pos, Vec2::new(half * 2.0, 30.0), GOLD)
                .with_phase(coin.rotation),
        );
    }

    let lights = if state.frame_count % 10 < 5 { 0.0 } else { 1.0 };
    for car in &state.enemies {
        let item = DrawItem::new(
            DrawKind::EnemyCar(car.kind),
            car.pos,
            car_size(car.kind),
            car_body_color(car.kind),
        );
        items.push(if car.kind == CarKind::Police {
            item.with_phase(lights)
        } else {
            item
        });
    }

    if state.explosion.is_none_or(|e| e.player_visible()) {
        items.push(DrawItem::new(
            DrawKind::PlayerCar,
            state.player.pos,
            Vec2::new(60.0, 100.0),
            PLAYER_RED,
        ));
    }

    for p in &state.particles {
        let alpha =
            (255.0 * p.life as f32 / EXPLOSION_PARTICLE_LIFE as f32).clamp(0.0, 255.0) as u8;
        let [r, g, b] = p.color;
        items.push(DrawItem::new(DrawKind::Particle, p.pos, Vec2::splat(8.0), [r, g, b, alpha]));
    }

    if state.speed > SPEED_LINES_THRESHOLD {
        // Seeded from the frame so a replay draws the same lines
        let mut rng = Pcg32::seed_from_u64(state.frame_count);
        let len = 20.0 + state.speed * 2.0;
        for _ in 0..SPEED_LINE_COUNT {
            let x = ROAD_LEFT + rng.random_range(0.0..ROAD_WIDTH);
            let y = rng.random_range(0.0..CAR_SCREEN.y);
            items.push(DrawItem::new(
                DrawKind::SpeedLine,
                Vec2::new(x, y + len / 2.0),
                Vec2::new(2.0, len),
                [255, 255, 255, 100],
            ));
        }
    }

    let fraction = ((state.speed - state.difficulty.base_speed()) / GAUGE_SPAN).clamp(0.0, 1.0);
    Frame {
        width: CAR_SCREEN.x as u32,
        height: CAR_SCREEN.y as u32,
        background: GRASS,
        items,
        hud: Hud {
            score: state.score,
            distance: state.distance as u32,
            lives: state.lives,
            speed_kmh: (state.speed * 10.0) as u32,
            speed_fraction: fraction,
            speed_color: speed_color(fraction),
            difficulty: Some(state.difficulty),
            phase: Some(state.phase),
        },
    }
}

/// Describe a classic runner state. Its world has y pointing up; the frame
/// flips it into screen space.
pub fn classic_runner_frame(state: &ClassicState) -> Frame {
    let flip = |x: i32, y: i32| Vec2::new(x as f32, (CLASSIC_SCREEN.y as i32 - y) as f32);
    let mut items = Vec::with_capacity(8);

    for x in [20.0, 830.0] {
        items.push(DrawItem::new(
            DrawKind::Wall,
            Vec2::new(x, CLASSIC_SCREEN.y / 2.0),
            Vec2::new(5.0, CLASSIC_SCREEN.y),
            WHITE,
        ));
    }

    for slot in &state.slots {
        let pos = flip(slot.pos.x, slot.pos.y);
        items.push(match slot.kind {
            SlotKind::Obstacle => {
                DrawItem::new(DrawKind::Crate, pos, Vec2::splat(40.0), [139, 69, 19, 255])
            }
            SlotKind::Coin => DrawItem::new(DrawKind::Coin, pos, Vec2::splat(30.0), GOLD),
        });
    }

    if state.chaser_active() {
        items.push(DrawItem::new(
            DrawKind::Chaser,
            flip(state.chaser.x, state.chaser.y),
            Vec2::new(30.0, 60.0),
            [255, 0, 0, 255],
        ));
    }

    if state.phase == GamePhase::Playing {
        items.push(DrawItem::new(
            DrawKind::Runner,
            flip(state.player.x, state.player.y),
            Vec2::new(30.0, 60.0),
            [30, 144, 255, 255],
        ));
    }

    Frame {
        width: CLASSIC_SCREEN.x as u32,
        height: CLASSIC_SCREEN.y as u32,
        background: [0, 0, 0, 255],
        items,
        hud: Hud {
            score: state.score,
            distance: state.distance,
            lives: state.lives,
            phase: Some(state.phase),
            ..Default::default()
        },
    }
}

/// Describe a framework scene: every active object, in insertion order
pub fn framework_frame(game: &Game) -> Frame {
    let [r, g, b] = game.background;
    let mut hud = Hud::default();

    let items = game
        .drawables()
        .map(|obj| {
            let color = match &obj.kind {
                ObjectKind::Environment(env) => {
                    let [r, g, b] = env.fill;
                    [r, g, b, 255]
                }
                ObjectKind::Player(_) => [30, 144, 255, 255],
                ObjectKind::Enemy => [220, 20, 60, 255],
                ObjectKind::Plain => WHITE,
            };
            if let Some(stats) = obj.player_stats() {
                hud.score = stats.score;
            }
            let flipped = obj.animator.as_ref().is_some_and(|a| a.flip_horizontal);
            DrawItem::new(
                DrawKind::Sprite(obj.current_sprite()),
                obj.position + obj.size / 2.0,
                obj.size,
                color,
            )
            .with_phase(if flipped { 1.0 } else { 0.0 })
        })
        .collect();

    Frame {
        width: game.width,
        height: game.height,
        background: [r, g, b, 255],
        items,
        hud,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::GameObject;
    use crate::input::TickInput;
    use crate::sim::{Difficulty, Explosion, tick};

    fn playing(difficulty: Difficulty) -> RunState {
        let mut state = RunState::new(difficulty, 3);
        tick(&mut state, &TickInput::start());
        state
    }

    #[test]
    fn coin_width_follows_spin() {
        assert_eq!(coin_half_width(0.0), 20.0);
        assert_eq!(coin_half_width(90.0), 4.0);
        assert!((coin_half_width(60.0) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn sky_darkens_at_night() {
        assert_eq!(sky_color(0.0), [135, 206, 235, 255]);
        assert_eq!(sky_color(1.0), [20, 26, 35, 255]);
    }

    #[test]
    fn player_blinks_while_exploding() {
        let mut state = playing(Difficulty::Easy);
        assert_eq!(car_runner_frame(&state).count(DrawKind::PlayerCar), 1);
        state.explosion = Some(Explosion { frame: 4 });
        assert_eq!(car_runner_frame(&state).count(DrawKind::PlayerCar), 0);
        state.explosion = Some(Explosion { frame: 7 });
        assert_eq!(car_runner_frame(&state).count(DrawKind::PlayerCar), 1);
    }

    #[test]
    fn police_lights_alternate() {
        let mut state = playing(Difficulty::Easy);
        state.spawn_enemy(0, CarKind::Police, 3.0);
        state.frame_count = 2;
        let phase = |s: &RunState| {
            car_runner_frame(s)
                .items
                .iter()
                .find(|i| i.kind == DrawKind::EnemyCar(CarKind::Police))
                .map(|i| i.phase)
        };
        assert_eq!(phase(&state), Some(0.0));
        state.frame_count = 7;
        assert_eq!(phase(&state), Some(1.0));
    }

    #[test]
    fn speed_lines_only_when_fast() {
        let mut state = playing(Difficulty::Medium);
        assert_eq!(car_runner_frame(&state).count(DrawKind::SpeedLine), 0);
        state.speed = 12.5;
        let frame = car_runner_frame(&state);
        assert_eq!(frame.count(DrawKind::SpeedLine), SPEED_LINE_COUNT);
        assert_eq!(frame, car_runner_frame(&state));
    }

    #[test]
    fn hud_reports_speed_gauge() {
        let mut state = playing(Difficulty::Easy);
        state.speed = 12.0;
        let hud = car_runner_frame(&state).hud;
        assert_eq!(hud.speed_kmh, 120);
        assert!((hud.speed_fraction - 0.5).abs() < 1e-6);
        assert_eq!(hud.lives, MAX_LIVES);

        state.speed = 40.0;
        let hud = car_runner_frame(&state).hud;
        assert_eq!(hud.speed_fraction, 1.0);
        assert_eq!(hud.speed_color, [255, 0, 0, 255]);
    }

    #[test]
    fn particles_fade_with_life() {
        let mut state = playing(Difficulty::Easy);
        state.particles.push(crate::sim::Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 15,
            color: [255, 0, 0],
        });
        let frame = car_runner_frame(&state);
        let particle = frame.items.iter().find(|i| i.kind == DrawKind::Particle).unwrap();
        assert_eq!(particle.color, [255, 0, 0, 127]);
    }

    #[test]
    fn classic_frame_flips_y() {
        let mut state = ClassicState::new(1);
        crate::sim::classic::tick(&mut state, &TickInput::start());
        let frame = classic_runner_frame(&state);
        let runner = frame.items.iter().find(|i| i.kind == DrawKind::Runner).unwrap();
        assert_eq!(runner.pos, Vec2::new(425.0, 750.0));
        assert_eq!(frame.count(DrawKind::Chaser), 0);
    }

    #[test]
    fn framework_frame_skips_inactive_objects() {
        let mut game = Game::new();
        let coin = game.add_object(GameObject::collectible(Vec2::ZERO, 5));
        game.add_object(GameObject::player(Vec2::new(100.0, 100.0)));
        game.get_mut(coin).unwrap().active = false;

        let frame = framework_frame(&game);
        assert_eq!(frame.items.len(), 1);
        assert_eq!(frame.items[0].pos, Vec2::new(120.0, 130.0));
        assert_eq!(frame.background, [100, 149, 237, 255]);
    }
}
