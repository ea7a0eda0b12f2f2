//! Pairwise object collision

use super::object::GameObject;
use crate::event::GameEvent;

/// Strict bounding-box overlap between two active objects
#[inline]
pub fn check_collision(a: &GameObject, b: &GameObject) -> bool {
    a.active && b.active && a.bounds().intersects(&b.bounds())
}

/// Test every pair of active objects and notify both sides of each contact.
///
/// The active flag is re-read for every pair, so an object deactivated by an
/// earlier contact in the same pass takes no further part. Returns the number
/// of contacts resolved.
pub fn check_collisions(objects: &mut [GameObject], events: &mut Vec<GameEvent>) -> usize {
    let mut contacts = 0;
    for i in 0..objects.len() {
        let (head, tail) = objects.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if check_collision(a, b) {
                a.on_collision(b, events);
                b.on_collision(a, events);
                contacts += 1;
            }
        }
    }
    contacts
}
