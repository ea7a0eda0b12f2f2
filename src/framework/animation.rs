//! Frame-sequence animation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::object::SpriteId;

pub const DEFAULT_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
    Hurt,
    Death,
}

/// A sequence of frames advanced by elapsed time
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub frames: Vec<SpriteId>,
    /// Seconds each frame is shown
    pub frame_time: f32,
    /// Wrap to the first frame, otherwise hold the last one
    pub looping: bool,
    current: usize,
    elapsed: f32,
}

impl Animation {
    pub fn new(frames: Vec<SpriteId>) -> Self {
        Self {
            frames,
            frame_time: DEFAULT_FRAME_TIME,
            looping: true,
            current: 0,
            elapsed: 0.0,
        }
    }

    pub fn with_frame_time(mut self, frame_time: f32) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    /// Advances at most one frame per call; leftover time is dropped
    pub fn update(&mut self, delta: f32) {
        if self.frames.is_empty() {
            return;
        }
        self.elapsed += delta;
        if self.elapsed >= self.frame_time {
            self.elapsed = 0.0;
            self.current += 1;
            if self.current >= self.frames.len() {
                self.current = if self.looping { 0 } else { self.frames.len() - 1 };
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.elapsed = 0.0;
    }

    pub fn frame_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> Option<SpriteId> {
        self.frames.get(self.current).copied()
    }
}

/// Animations keyed by state; only the current one advances
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationComponent {
    animations: HashMap<AnimationState, Animation>,
    state: AnimationState,
    pub flip_horizontal: bool,
}

impl AnimationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, state: AnimationState, animation: Animation) -> Self {
        self.add(state, animation);
        self
    }

    pub fn add(&mut self, state: AnimationState, animation: Animation) {
        self.animations.insert(state, animation);
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Switch state and rewind its animation. Unknown states and the current
    /// state are ignored.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        if let Some(animation) = self.animations.get_mut(&state) {
            animation.reset();
            self.state = state;
        }
    }

    pub fn update(&mut self, delta: f32) {
        if let Some(animation) = self.animations.get_mut(&self.state) {
            animation.update(delta);
        }
    }

    pub fn current_frame(&self) -> Option<SpriteId> {
        self.animations
            .get(&self.state)
            .and_then(Animation::current_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looping_animation_wraps() {
        let mut anim = Animation::new(vec![10, 11, 12]);
        for _ in 0..3 {
            anim.update(0.1);
        }
        assert_eq!(anim.current_frame(), Some(10));
    }

    #[test]
    fn one_shot_holds_last_frame() {
        let mut anim = Animation::new(vec![1, 2]).once();
        for _ in 0..5 {
            anim.update(0.2);
        }
        assert_eq!(anim.current_frame(), Some(2));
    }

    #[test]
    fn short_deltas_accumulate() {
        let mut anim = Animation::new(vec![1, 2]).with_frame_time(0.05);
        anim.update(0.03);
        assert_eq!(anim.frame_index(), 0);
        anim.update(0.03);
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn empty_animation_has_no_frame() {
        let mut anim = Animation::new(Vec::new());
        anim.update(1.0);
        assert_eq!(anim.current_frame(), None);
    }

    #[test]
    fn set_state_rewinds_only_on_change() {
        let mut animator = AnimationComponent::new()
            .with(AnimationState::Idle, Animation::new(vec![1, 2]))
            .with(AnimationState::Run, Animation::new(vec![5, 6, 7]));

        animator.update(0.1);
        assert_eq!(animator.current_frame(), Some(2));
        animator.set_state(AnimationState::Idle);
        assert_eq!(animator.current_frame(), Some(2));

        animator.set_state(AnimationState::Run);
        assert_eq!(animator.current_frame(), Some(5));

        animator.set_state(AnimationState::Death);
        assert_eq!(animator.state(), AnimationState::Run);
    }
}
