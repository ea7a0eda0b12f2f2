//! Deterministic runner simulations
//!
//! All runner gameplay lives here. This module must stay pure and deterministic:
//! - Fixed tick only (one call to `tick` per step)
//! - Seeded RNG only
//! - Collaborators are reached through emitted events, never called directly
//! - No rendering or platform dependencies

pub mod classic;
pub mod collision;
pub mod state;
pub mod tick;
pub mod time;

pub use classic::{ClassicState, Slot, SlotKind};
pub use collision::within_axes;
pub use state::{
    CarKind, Coin, Difficulty, EnemyCar, Explosion, GamePhase, Particle, Player, RunState,
};
pub use tick::{advance, tick};
pub use time::{FixedTimestep, GameTime};
