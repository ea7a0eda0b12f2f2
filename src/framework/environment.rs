//! Environment pieces: platforms, obstacles, hazards, collectibles

use serde::{Deserialize, Serialize};

pub type Color = [u8; 3];

pub const BROWN: Color = [165, 42, 42];
pub const SADDLE_BROWN: Color = [139, 69, 19];
pub const DARK_RED: Color = [139, 0, 0];
pub const GOLD: Color = [255, 215, 0];
pub const GRAY: Color = [128, 128, 128];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnvironmentType {
    #[default]
    Platform,
    Hazard,
    Collectible,
    Decoration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentObject {
    pub env_type: EnvironmentType,
    /// Blocks movement (informational; the framework has no solver)
    pub solid: bool,
    pub fill: Color,
    pub point_value: u64,
    pub damage_on_contact: i32,
    /// Drawn with a dark outline
    pub outlined: bool,
}

impl Default for EnvironmentObject {
    fn default() -> Self {
        Self::platform()
    }
}

impl EnvironmentObject {
    pub fn platform() -> Self {
        Self {
            env_type: EnvironmentType::Platform,
            solid: true,
            fill: BROWN,
            point_value: 0,
            damage_on_contact: 0,
            outlined: false,
        }
    }

    /// Solid block
    pub fn obstacle() -> Self {
        Self {
            fill: SADDLE_BROWN,
            outlined: true,
            ..Self::platform()
        }
    }

    /// Damages a player on every step of contact
    pub fn hazard() -> Self {
        Self {
            env_type: EnvironmentType::Hazard,
            solid: false,
            fill: DARK_RED,
            damage_on_contact: 10,
            outlined: true,
            ..Self::platform()
        }
    }

    /// Pays `points` once, then deactivates
    pub fn collectible(points: u64) -> Self {
        Self {
            env_type: EnvironmentType::Collectible,
            solid: false,
            fill: GOLD,
            point_value: points,
            ..Self::platform()
        }
    }

    pub fn decoration(fill: Color) -> Self {
        Self {
            env_type: EnvironmentType::Decoration,
            solid: false,
            fill,
            ..Self::platform()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_set_roles() {
        assert!(EnvironmentObject::obstacle().solid);
        assert_eq!(EnvironmentObject::obstacle().env_type, EnvironmentType::Platform);
        let hazard = EnvironmentObject::hazard();
        assert!(!hazard.solid);
        assert_eq!(hazard.damage_on_contact, 10);
        let coin = EnvironmentObject::collectible(250);
        assert_eq!(coin.point_value, 250);
        assert_eq!(coin.fill, GOLD);
        assert_eq!(EnvironmentObject::decoration(GRAY).fill, GRAY);
    }
}
