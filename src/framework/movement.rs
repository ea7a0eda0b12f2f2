//! Movement strategies
//!
//! Each strategy displaces its object by a fixed amount per step. The patrol
//! variants carry a single direction flag that flips when a bound is reached.

use glam::Vec2;

use super::object::ObjectId;
use crate::input::Controls;

/// Chase stops inside this distance to avoid jitter on top of the target
pub const CHASE_DEAD_ZONE: f32 = 5.0;

/// Per-step inputs a strategy may need besides its own state
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveContext {
    /// Position of the chase target, `None` when missing or inactive
    pub target: Option<Vec2>,
    pub controls: Controls,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Movement {
    /// Step toward `target` while it is closer than `range`
    Chase {
        target: ObjectId,
        speed: f32,
        range: f32,
    },
    HorizontalPatrol {
        left: f32,
        right: f32,
        speed: f32,
        moving_right: bool,
    },
    VerticalPatrol {
        top: f32,
        bottom: f32,
        speed: f32,
        moving_down: bool,
    },
    /// Falls at `speed` while sweeping sideways at half speed
    ZigZag {
        left: f32,
        right: f32,
        speed: f32,
        moving_right: bool,
    },
    /// Driven by held direction keys
    Keyboard { speed: f32 },
}

impl Movement {
    pub fn chase(target: ObjectId, speed: f32, range: f32) -> Self {
        Movement::Chase {
            target,
            speed,
            range,
        }
    }

    pub fn horizontal_patrol(left: f32, right: f32, speed: f32) -> Self {
        Movement::HorizontalPatrol {
            left,
            right,
            speed,
            moving_right: true,
        }
    }

    pub fn vertical_patrol(top: f32, bottom: f32, speed: f32) -> Self {
        Movement::VerticalPatrol {
            top,
            bottom,
            speed,
            moving_down: true,
        }
    }

    pub fn zig_zag(left: f32, right: f32, speed: f32) -> Self {
        Movement::ZigZag {
            left,
            right,
            speed,
            moving_right: true,
        }
    }

    pub fn keyboard(speed: f32) -> Self {
        Movement::Keyboard { speed }
    }

    /// Object this strategy follows, if any
    pub fn chase_target(&self) -> Option<ObjectId> {
        match self {
            Movement::Chase { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// New position after one step from `pos`
    pub fn apply(&mut self, pos: Vec2, ctx: &MoveContext) -> Vec2 {
        match self {
            Movement::Chase { speed, range, .. } => {
                let Some(target) = ctx.target else {
                    return pos;
                };
                let delta = target - pos;
                let dist = delta.length();
                if dist < *range && dist > CHASE_DEAD_ZONE {
                    pos + delta / dist * *speed
                } else {
                    pos
                }
            }
            Movement::HorizontalPatrol {
                left,
                right,
                speed,
                moving_right,
            } => {
                let x = patrol(pos.x, *left, *right, *speed, moving_right);
                Vec2::new(x, pos.y)
            }
            Movement::VerticalPatrol {
                top,
                bottom,
                speed,
                moving_down,
            } => {
                let y = patrol(pos.y, *top, *bottom, *speed, moving_down);
                Vec2::new(pos.x, y)
            }
            Movement::ZigZag {
                left,
                right,
                speed,
                moving_right,
            } => {
                let x = patrol(pos.x, *left, *right, *speed * 0.5, moving_right);
                Vec2::new(x, pos.y + *speed)
            }
            Movement::Keyboard { speed } => {
                let keys = ctx.controls;
                let mut step = Vec2::ZERO;
                if keys.left {
                    step.x = -*speed;
                }
                if keys.right {
                    step.x = *speed;
                }
                if keys.up {
                    step.y = -*speed;
                }
                if keys.down {
                    step.y = *speed;
                }
                pos + step
            }
        }
    }
}

/// Move along one axis toward the current bound, flipping once it is reached
fn patrol(value: f32, low: f32, high: f32, speed: f32, forward: &mut bool) -> f32 {
    if *forward {
        let value = value + speed;
        if value >= high {
            *forward = false;
        }
        value
    } else {
        let value = value - speed;
        if value <= low {
            *forward = true;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(movement: &mut Movement, mut pos: Vec2, steps: usize) -> Vec2 {
        let ctx = MoveContext::default();
        for _ in 0..steps {
            pos = movement.apply(pos, &ctx);
        }
        pos
    }

    #[test]
    fn horizontal_patrol_turns_at_bounds() {
        let mut m = Movement::horizontal_patrol(0.0, 10.0, 2.0);
        let pos = run(&mut m, Vec2::ZERO, 5);
        assert_eq!(pos, Vec2::new(10.0, 0.0));
        assert!(matches!(m, Movement::HorizontalPatrol { moving_right: false, .. }));

        let pos = run(&mut m, pos, 5);
        assert_eq!(pos, Vec2::ZERO);
        assert!(matches!(m, Movement::HorizontalPatrol { moving_right: true, .. }));
    }

    #[test]
    fn vertical_patrol_stays_in_column() {
        let mut m = Movement::vertical_patrol(100.0, 120.0, 4.0);
        let mut pos = Vec2::new(7.0, 100.0);
        let ctx = MoveContext::default();
        for _ in 0..50 {
            pos = m.apply(pos, &ctx);
            assert_eq!(pos.x, 7.0);
            assert!(pos.y >= 96.0 && pos.y <= 124.0, "y was {}", pos.y);
        }
    }

    #[test]
    fn zig_zag_falls_while_sweeping() {
        let mut m = Movement::zig_zag(0.0, 3.0, 3.0);
        let ctx = MoveContext::default();
        let pos = m.apply(Vec2::ZERO, &ctx);
        assert_eq!(pos, Vec2::new(1.5, 3.0));
        let pos = m.apply(pos, &ctx);
        assert_eq!(pos, Vec2::new(3.0, 6.0));
        let pos = m.apply(pos, &ctx);
        assert_eq!(pos, Vec2::new(1.5, 9.0));
    }

    #[test]
    fn chase_steps_toward_target_in_range() {
        let mut m = Movement::chase(1, 2.0, 200.0);
        let ctx = MoveContext {
            target: Some(Vec2::new(100.0, 0.0)),
            ..Default::default()
        };
        let pos = m.apply(Vec2::ZERO, &ctx);
        assert_eq!(pos, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn chase_ignores_far_near_and_missing_targets() {
        let mut m = Movement::chase(1, 2.0, 200.0);
        let far = MoveContext {
            target: Some(Vec2::new(300.0, 0.0)),
            ..Default::default()
        };
        assert_eq!(m.apply(Vec2::ZERO, &far), Vec2::ZERO);

        let near = MoveContext {
            target: Some(Vec2::new(3.0, 4.0)),
            ..Default::default()
        };
        assert_eq!(m.apply(Vec2::ZERO, &near), Vec2::ZERO);

        assert_eq!(m.apply(Vec2::ZERO, &MoveContext::default()), Vec2::ZERO);
    }

    #[test]
    fn keyboard_follows_held_keys() {
        let mut m = Movement::keyboard(5.0);
        let ctx = MoveContext {
            controls: Controls {
                left: true,
                right: true,
                up: true,
                ..Default::default()
            },
            ..Default::default()
        };
        // Right overrides left when both are held
        assert_eq!(m.apply(Vec2::ZERO, &ctx), Vec2::new(5.0, -5.0));
        assert_eq!(m.chase_target(), None);
    }
}
