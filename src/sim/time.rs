//! Simulation time keeping

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Delta and total time handed to framework updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameTime {
    pub delta: f32,
    pub total: f32,
}

impl Default for GameTime {
    fn default() -> Self {
        Self {
            delta: SIM_DT,
            total: 0.0,
        }
    }
}

impl GameTime {
    /// Record one step of `delta` seconds
    pub fn update(&mut self, delta: f32) {
        self.delta = delta;
        self.total += delta;
    }
}

/// Fixed timestep accumulator.
/// Turns variable frame time into a bounded number of fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: MAX_SUBSTEPS,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Drop backlog past the cap instead of trying to catch up
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_time_accumulates_total() {
        let mut time = GameTime::default();
        time.update(0.016);
        time.update(0.020);
        assert_eq!(time.delta, 0.020);
        assert!((time.total - 0.036).abs() < 1e-6);
    }

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.016);
        assert_eq!(ts.accumulate(0.016), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut ts = FixedTimestep::new(0.016);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
        // 0.002 carried over, so 0.0145 more completes the next step
        assert_eq!(ts.accumulate(0.0145), 1);
    }

    #[test]
    fn caps_long_frames() {
        let mut ts = FixedTimestep::new(0.016);
        assert_eq!(ts.accumulate(1.0), MAX_SUBSTEPS);
    }
}
