//! Events emitted by the simulations
//!
//! The simulations never call collaborators directly. They push events that
//! the host drains each tick and hands to [`crate::GameContext`].

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began
    RunStarted { difficulty: Option<Difficulty> },
    /// Player picked up a coin or collectible
    CoinCollected { points: u64 },
    /// Player lost a life or took contact damage
    PlayerHurt,
    /// Player lost the last life
    PlayerDied,
    /// Run ended; emitted exactly once per run
    GameOver {
        score: u64,
        distance: u32,
        difficulty: Option<Difficulty>,
    },
    /// Scroll speed ramped up
    SpeedUp { speed: f32 },
}
