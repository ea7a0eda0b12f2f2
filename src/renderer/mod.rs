//! Render collaborator
//!
//! The simulations never draw. Each frame the host turns the current state
//! into a [`Frame`]: a flat list of positioned, sized, coloured items plus the
//! HUD numbers, and hands it to whatever [`Renderer`] it owns.

pub mod shapes;

use glam::Vec2;
use serde::Serialize;

use crate::framework::SpriteId;
use crate::sim::{CarKind, Difficulty, GamePhase};

pub use shapes::{car_runner_frame, classic_runner_frame, framework_frame};

pub type Rgba = [u8; 4];

/// What a draw item depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawKind {
    Sky,
    Grass,
    Road,
    LaneMark,
    Wall,
    PlayerCar,
    EnemyCar(CarKind),
    Coin,
    Particle,
    SpeedLine,
    /// Classic runner player
    Runner,
    /// Classic runner obstacle slot
    Crate,
    Chaser,
    /// Framework object, optionally drawn from a sprite
    Sprite(Option<SpriteId>),
}

/// One thing to draw. `pos` is the centre of the item in screen space (y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawItem {
    pub kind: DrawKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgba,
    /// Animation phase; meaning depends on `kind` (coin spin in degrees,
    /// police light toggle, sky time of day, sprite mirroring)
    pub phase: f32,
}

impl DrawItem {
    pub fn new(kind: DrawKind, pos: Vec2, size: Vec2, color: Rgba) -> Self {
        Self {
            kind,
            pos,
            size,
            color,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Hud {
    pub score: u64,
    pub distance: u32,
    pub lives: u8,
    /// Car runner only
    pub speed_kmh: u32,
    /// 0..=1 fill of the speed gauge
    pub speed_fraction: f32,
    pub speed_color: Rgba,
    pub difficulty: Option<Difficulty>,
    pub phase: Option<GamePhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    /// Back to front
    pub items: Vec<DrawItem>,
    pub hud: Hud,
}

impl Frame {
    pub fn count(&self, kind: DrawKind) -> usize {
        self.items.iter().filter(|i| i.kind == kind).count()
    }
}

/// Consumes frames; implemented by whatever actually puts pixels on screen
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

/// Headless renderer that keeps simple statistics about what it was given
#[derive(Debug, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub items: u64,
    pub last_hud: Hud,
}

impl Renderer for FrameStats {
    fn render(&mut self, frame: &Frame) {
        self.frames += 1;
        self.items += frame.items.len() as u64;
        self.last_hud = frame.hud;
        log::trace!("frame {}: {} items", self.frames, frame.items.len());
    }
}
