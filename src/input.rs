//! Input commands consumed by the simulations
//!
//! The core never reads devices. Hosts translate key presses into one
//! [`TickInput`] per tick (discrete commands) and, for keyboard-driven
//! framework objects, into held [`Controls`].

/// Discrete commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (lane change in the car runner)
    pub left: bool,
    /// Move right (lane change in the car runner)
    pub right: bool,
    /// Move up (classic runner only)
    pub up: bool,
    /// Move down (classic runner only)
    pub down: bool,
    /// Start or restart a run
    pub start: bool,
}

impl TickInput {
    pub fn left() -> Self {
        Self {
            left: true,
            ..Default::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Default::default()
        }
    }

    pub fn up() -> Self {
        Self {
            up: true,
            ..Default::default()
        }
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Default::default()
        }
    }

    pub fn start() -> Self {
        Self {
            start: true,
            ..Default::default()
        }
    }
}

/// Directions currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}
