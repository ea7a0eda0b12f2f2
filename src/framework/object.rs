//! Game objects

use glam::Vec2;

use super::animation::AnimationComponent;
use super::environment::{EnvironmentObject, EnvironmentType};
use super::movement::{MoveContext, Movement};
use crate::event::GameEvent;
use crate::sim::GameTime;

pub type ObjectId = u32;
/// Opaque handle the renderer resolves to an image
pub type SpriteId = u32;

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap; rectangles that only share an edge don't intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        other.pos.x < self.right()
            && self.pos.x < other.right()
            && other.pos.y < self.bottom()
            && self.pos.y < other.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub health: i32,
    pub score: u64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 100,
            score: 0,
        }
    }
}

/// What an object is, and therefore how it reacts to contact
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Plain,
    Player(PlayerStats),
    Enemy,
    Environment(EnvironmentObject),
}

#[derive(Debug, Clone)]
pub struct GameObject {
    /// Assigned by [`super::Game::add_object`]
    pub id: ObjectId,
    pub position: Vec2,
    pub size: Vec2,
    /// Displacement applied every step after the movement strategy
    pub velocity: Vec2,
    pub active: bool,
    /// Affected by gravity and the ground clamp
    pub rigid_body: bool,
    pub sprite: Option<SpriteId>,
    pub movement: Option<Movement>,
    pub animator: Option<AnimationComponent>,
    pub kind: ObjectKind,
}

impl GameObject {
    pub fn new(kind: ObjectKind, position: Vec2, size: Vec2) -> Self {
        Self {
            id: 0,
            position,
            size,
            velocity: Vec2::ZERO,
            active: true,
            rigid_body: true,
            sprite: None,
            movement: None,
            animator: None,
            kind,
        }
    }

    pub fn player(position: Vec2) -> Self {
        Self::new(
            ObjectKind::Player(PlayerStats::default()),
            position,
            Vec2::new(40.0, 60.0),
        )
    }

    pub fn enemy(position: Vec2) -> Self {
        Self::new(ObjectKind::Enemy, position, Vec2::new(40.0, 40.0))
    }

    pub fn platform(position: Vec2, size: Vec2) -> Self {
        Self::environment(EnvironmentObject::platform(), position, size)
    }

    pub fn obstacle(position: Vec2, size: Vec2) -> Self {
        Self::environment(EnvironmentObject::obstacle(), position, size)
    }

    pub fn hazard(position: Vec2, size: Vec2) -> Self {
        Self::environment(EnvironmentObject::hazard(), position, size)
    }

    pub fn collectible(position: Vec2, points: u64) -> Self {
        Self::environment(
            EnvironmentObject::collectible(points),
            position,
            Vec2::new(24.0, 24.0),
        )
    }

    /// Environment pieces sit still: no gravity
    pub fn environment(env: EnvironmentObject, position: Vec2, size: Vec2) -> Self {
        let mut obj = Self::new(ObjectKind::Environment(env), position, size);
        obj.rigid_body = false;
        obj
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteId) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_animator(mut self, animator: AnimationComponent) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn with_rigid_body(mut self, rigid_body: bool) -> Self {
        self.rigid_body = rigid_body;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn player_stats(&self) -> Option<&PlayerStats> {
        match &self.kind {
            ObjectKind::Player(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ObjectKind::Player(_))
    }

    /// Sprite to draw this frame: the animator's frame wins over the static sprite
    pub fn current_sprite(&self) -> Option<SpriteId> {
        self.animator
            .as_ref()
            .and_then(|a| a.current_frame())
            .or(self.sprite)
    }

    /// One step: movement strategy, then velocity, then animation
    pub fn update(&mut self, time: &GameTime, ctx: &MoveContext) {
        if let Some(movement) = self.movement.as_mut() {
            self.position = movement.apply(self.position, ctx);
        }
        self.position += self.velocity;
        if let Some(animator) = self.animator.as_mut() {
            animator.update(time.delta);
        }
    }

    /// React to touching `other`. Each side of a contact gets its own call.
    pub fn on_collision(&mut self, other: &mut GameObject, events: &mut Vec<GameEvent>) {
        let ObjectKind::Environment(env) = &self.kind else {
            return;
        };
        let ObjectKind::Player(stats) = &mut other.kind else {
            return;
        };

        match env.env_type {
            EnvironmentType::Collectible => {
                stats.score += env.point_value;
                self.active = false;
                events.push(GameEvent::CoinCollected {
                    points: env.point_value,
                });
            }
            EnvironmentType::Hazard => {
                stats.health -= env.damage_on_contact;
                events.push(GameEvent::PlayerHurt);
                if stats.health <= 0 && other.active {
                    other.active = false;
                    events.push(GameEvent::PlayerDied);
                }
            }
            EnvironmentType::Platform | EnvironmentType::Decoration => {}
        }
    }
}
