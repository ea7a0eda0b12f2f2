//! Sample platformer scene exercising every framework piece

use glam::Vec2;

use super::animation::{Animation, AnimationComponent, AnimationState};
use super::environment::{EnvironmentObject, GRAY};
use super::game::Game;
use super::movement::Movement;
use super::object::{GameObject, ObjectId};
use crate::input::Controls;

/// Sprite ids the renderer maps to images
pub mod sprites {
    use crate::framework::SpriteId;

    pub const PLAYER_IDLE: [SpriteId; 2] = [1, 2];
    pub const PLAYER_RUN: [SpriteId; 4] = [3, 4, 5, 6];
    pub const ENEMY: SpriteId = 10;
    pub const COIN: SpriteId = 20;
}

/// Handles to the interesting objects of the demo scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoScene {
    pub player: ObjectId,
    pub chaser: ObjectId,
}

/// Populate `game` with a ground, obstacles, hazards, coins and enemies
pub fn build_scene(game: &mut Game) -> DemoScene {
    game.clear();
    let ground = game.physics.ground_level;

    let animator = AnimationComponent::new()
        .with(
            AnimationState::Idle,
            Animation::new(sprites::PLAYER_IDLE.to_vec()).with_frame_time(0.5),
        )
        .with(AnimationState::Run, Animation::new(sprites::PLAYER_RUN.to_vec()));
    let player = game.add_object(
        GameObject::player(Vec2::new(60.0, ground - 60.0))
            .with_movement(Movement::keyboard(5.0))
            .with_animator(animator),
    );

    game.add_object(GameObject::platform(
        Vec2::new(0.0, ground),
        Vec2::new(game.width as f32, game.height as f32 - ground),
    ));
    game.add_object(GameObject::platform(Vec2::new(300.0, 380.0), Vec2::new(120.0, 16.0)));
    game.add_object(GameObject::obstacle(Vec2::new(520.0, ground - 40.0), Vec2::splat(40.0)));
    game.add_object(GameObject::hazard(Vec2::new(600.0, ground - 12.0), Vec2::new(60.0, 12.0)));
    game.add_object(GameObject::environment(
        EnvironmentObject::decoration(GRAY),
        Vec2::new(650.0, 80.0),
        Vec2::new(90.0, 30.0),
    ));

    for i in 0..5 {
        let x = 160.0 + i as f32 * 60.0;
        game.add_object(
            GameObject::collectible(Vec2::new(x, ground - 40.0), 10).with_sprite(sprites::COIN),
        );
    }

    game.add_object(
        GameObject::enemy(Vec2::new(600.0, ground - 40.0))
            .with_rigid_body(false)
            .with_sprite(sprites::ENEMY)
            .with_movement(Movement::horizontal_patrol(580.0, 760.0, 2.0)),
    );
    game.add_object(
        GameObject::enemy(Vec2::new(340.0, 200.0))
            .with_rigid_body(false)
            .with_sprite(sprites::ENEMY)
            .with_movement(Movement::vertical_patrol(150.0, 320.0, 2.0)),
    );
    game.add_object(
        GameObject::enemy(Vec2::new(100.0, -40.0))
            .with_rigid_body(false)
            .with_sprite(sprites::ENEMY)
            .with_movement(Movement::zig_zag(60.0, 260.0, 3.0)),
    );
    let chaser = game.add_object(
        GameObject::enemy(Vec2::new(700.0, 250.0))
            .with_rigid_body(false)
            .with_sprite(sprites::ENEMY)
            .with_movement(Movement::chase(player, 2.0, 200.0)),
    );

    log::debug!("Demo scene built with {} objects", game.objects().len());
    DemoScene { player, chaser }
}

/// Scripted input for unattended runs: walk right, pause, walk back
pub fn autopilot(step: u64) -> Controls {
    match step % 240 {
        0..100 => Controls {
            right: true,
            ..Default::default()
        },
        100..140 => Controls::default(),
        _ => Controls {
            left: true,
            ..Default::default()
        },
    }
}

/// Keep the player's animation in sync with its input
pub fn animate_player(game: &mut Game, scene: &DemoScene, controls: Controls) {
    let Some(animator) = game.get_mut(scene.player).and_then(|p| p.animator.as_mut()) else {
        return;
    };
    if controls.left || controls.right {
        animator.set_state(AnimationState::Run);
        animator.flip_horizontal = controls.left && !controls.right;
    } else {
        animator.set_state(AnimationState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::GameEvent;
    use crate::sim::GameTime;

    fn run(game: &mut Game, scene: &DemoScene, steps: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut time = GameTime::default();
        for step in 0..steps {
            let controls = autopilot(step);
            animate_player(game, scene, controls);
            time.update(crate::consts::SIM_DT);
            game.step(&time, controls);
            events.extend(game.drain_events());
        }
        events
    }

    #[test]
    fn walking_right_collects_coins() {
        let mut game = Game::new();
        let scene = build_scene(&mut game);
        let events = run(&mut game, &scene, 80);

        let coins = events
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .count();
        assert!(coins >= 3, "collected {coins}");
        let stats = game.get(scene.player).unwrap().player_stats().unwrap();
        assert_eq!(stats.score, coins as u64 * 10);
    }

    #[test]
    fn player_animation_follows_input() {
        let mut game = Game::new();
        let scene = build_scene(&mut game);
        run(&mut game, &scene, 5);
        let animator = game.get(scene.player).unwrap().animator.as_ref().unwrap();
        assert_eq!(animator.state(), AnimationState::Run);
        assert!(sprites::PLAYER_RUN.contains(&animator.current_frame().unwrap()));
    }

    #[test]
    fn scene_is_deterministic() {
        let mut a = Game::new();
        let mut b = Game::new();
        let sa = build_scene(&mut a);
        let sb = build_scene(&mut b);
        assert_eq!(run(&mut a, &sa, 300), run(&mut b, &sb, 300));
        assert_eq!(
            a.objects().iter().map(|o| o.position).collect::<Vec<_>>(),
            b.objects().iter().map(|o| o.position).collect::<Vec<_>>()
        );
    }
}
