//! Reusable entity framework
//!
//! A small object model for scenes that don't need a bespoke tick:
//! objects carry an optional movement strategy and animator, the game drives
//! them once per step, then physics and pairwise collision run over the
//! active set.

pub mod animation;
pub mod collision;
pub mod demo;
pub mod environment;
pub mod game;
pub mod movement;
pub mod object;
pub mod physics;

pub use animation::{Animation, AnimationComponent, AnimationState};
pub use collision::{check_collision, check_collisions};
pub use environment::{EnvironmentObject, EnvironmentType};
pub use game::Game;
pub use movement::{MoveContext, Movement};
pub use object::{GameObject, ObjectId, ObjectKind, PlayerStats, Rect, SpriteId};
pub use physics::PhysicsSystem;
