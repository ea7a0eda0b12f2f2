//! Gravity and ground clamp

use serde::{Deserialize, Serialize};

use super::object::GameObject;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSystem {
    /// Added to vertical velocity every step
    pub gravity: f32,
    /// Y of the floor; bottoms are clamped to it
    pub ground_level: f32,
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            ground_level: 500.0,
        }
    }
}

impl PhysicsSystem {
    /// Apply gravity to active rigid bodies and stop them at the ground
    pub fn apply(&self, objects: &mut [GameObject]) {
        for obj in objects.iter_mut().filter(|o| o.active && o.rigid_body) {
            obj.velocity.y += self.gravity;

            if obj.position.y + obj.size.y >= self.ground_level {
                obj.position.y = self.ground_level - obj.size.y;
                obj.velocity.y = 0.0;
            }
        }
    }
}
