//! Object container and step driver

use super::collision::check_collisions;
use super::movement::MoveContext;
use super::object::{GameObject, ObjectId};
use super::physics::PhysicsSystem;
use crate::event::GameEvent;
use crate::input::Controls;
use crate::sim::GameTime;

pub const CORNFLOWER_BLUE: [u8; 3] = [100, 149, 237];

/// Owns a scene's objects and drives them once per step
#[derive(Debug, Clone)]
pub struct Game {
    objects: Vec<GameObject>,
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub physics: PhysicsSystem,
    next_id: ObjectId,
    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            width: 800,
            height: 600,
            background: CORNFLOWER_BLUE,
            physics: PhysicsSystem::default(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Add an object and return its freshly assigned id
    pub fn add_object(&mut self, mut obj: GameObject) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        obj.id = id;
        self.objects.push(obj);
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<GameObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Move and animate every active object
    pub fn update(&mut self, time: &GameTime, controls: Controls) {
        for i in 0..self.objects.len() {
            if !self.objects[i].active {
                continue;
            }
            // Chase targets resolve to a position only while they are alive
            let target = self.objects[i]
                .movement
                .as_ref()
                .and_then(|m| m.chase_target())
                .and_then(|id| self.get(id))
                .filter(|o| o.active)
                .map(|o| o.position);
            let ctx = MoveContext { target, controls };
            self.objects[i].update(time, &ctx);
        }
    }

    /// Full step: drop dead objects, update, physics, then collisions.
    /// Returns the number of contacts resolved.
    pub fn step(&mut self, time: &GameTime, controls: Controls) -> usize {
        let removed = self.cleanup();
        if removed > 0 {
            log::debug!("Removed {removed} inactive objects");
        }
        self.update(time, controls);
        self.physics.apply(&mut self.objects);
        check_collisions(&mut self.objects, &mut self.events)
    }

    /// Objects to draw this frame
    pub fn drawables(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter().filter(|o| o.active)
    }

    /// Drop inactive objects; returns how many were removed
    pub fn cleanup(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| o.active);
        before - self.objects.len()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Movement;
    use glam::Vec2;

    #[test]
    fn ids_are_unique_and_lookup_works() {
        let mut game = Game::new();
        let a = game.add_object(GameObject::enemy(Vec2::ZERO));
        let b = game.add_object(GameObject::enemy(Vec2::ONE));
        assert_ne!(a, b);
        assert_eq!(game.get(b).unwrap().position, Vec2::ONE);
        assert!(game.remove_object(a).is_some());
        assert!(game.get(a).is_none());
        assert!(game.remove_object(a).is_none());
    }

    #[test]
    fn chasers_ignore_inactive_targets() {
        let mut game = Game::new();
        let target =
            game.add_object(GameObject::player(Vec2::new(100.0, 0.0)).with_rigid_body(false));
        let chaser = game.add_object(
            GameObject::enemy(Vec2::ZERO)
                .with_rigid_body(false)
                .with_movement(Movement::chase(target, 2.0, 200.0)),
        );

        game.update(&GameTime::default(), Controls::default());
        assert_eq!(game.get(chaser).unwrap().position, Vec2::new(2.0, 0.0));

        game.get_mut(target).unwrap().active = false;
        game.update(&GameTime::default(), Controls::default());
        assert_eq!(game.get(chaser).unwrap().position, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn step_collects_coin_and_cleanup_removes_it() {
        let mut game = Game::new();
        let player = game.add_object(
            GameObject::player(Vec2::new(100.0, 440.0)).with_movement(Movement::keyboard(5.0)),
        );
        game.add_object(GameObject::collectible(Vec2::new(200.0, 460.0), 100));
        let right = Controls {
            right: true,
            ..Default::default()
        };

        for _ in 0..20 {
            game.step(&GameTime::default(), right);
        }

        let stats = game.get(player).unwrap().player_stats().unwrap();
        assert_eq!(stats.score, 100);
        assert_eq!(game.get(player).unwrap().position.y, 440.0);
        assert_eq!(game.drain_events(), vec![GameEvent::CoinCollected { points: 100 }]);
        assert_eq!(game.drawables().count(), 1);
        assert_eq!(game.objects().len(), 1);
    }

    #[test]
    fn cleanup_counts_removed_objects() {
        let mut game = Game::new();
        let id = game.add_object(GameObject::enemy(Vec2::ZERO));
        game.add_object(GameObject::enemy(Vec2::ZERO));
        game.get_mut(id).unwrap().active = false;
        assert_eq!(game.drawables().count(), 1);
        assert_eq!(game.cleanup(), 1);
        assert_eq!(game.cleanup(), 0);
    }
}
