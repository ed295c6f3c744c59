//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and drive playback from the immutable parameters stored here.

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

/// Sprite sheet frame indices for each walk cycle, per animation set.
///
/// The character sheet is 48x64 frames, three per cycle.
const WALK_CYCLES: [(&str, [usize; 3]); 8] = [
    ("walk_down1", [0, 1, 2]),
    ("walk_down2", [3, 4, 5]),
    ("walk_left1", [6, 7, 8]),
    ("walk_left2", [9, 10, 11]),
    ("walk_right1", [12, 13, 14]),
    ("walk_right2", [15, 16, 17]),
    ("walk_up1", [18, 19, 20]),
    ("walk_up2", [21, 22, 23]),
];

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a sprite-sheet animation.
///
/// Fields are intentionally simple to keep the format engine-agnostic. The
/// host maps frame indices to sheet cells when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Sheet frame indices, in playback order.
    pub frames: Vec<usize>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// Register the looping walk cycles for both animation sets.
    pub fn register_walk_cycles(&mut self, fps: f32) {
        for (key, frames) in WALK_CYCLES {
            self.insert(
                key,
                AnimationResource {
                    frames: frames.to_vec(),
                    fps,
                    looped: true,
                },
            );
        }
        debug!("Registered {} walk cycles at {} fps", WALK_CYCLES.len(), fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_cycles_cover_every_direction_and_set() {
        let mut store = AnimationStore::new();
        store.register_walk_cycles(8.0);
        for dir in ["down", "up", "left", "right"] {
            for set in 1..=2 {
                let key = format!("walk_{}{}", dir, set);
                let anim = store.get(&key).expect("missing walk cycle");
                assert_eq!(anim.frames.len(), 3);
                assert!(anim.looped);
                assert_eq!(anim.fps, 8.0);
            }
        }
    }

    #[test]
    fn walk_cycle_frames() {
        let mut store = AnimationStore::new();
        store.register_walk_cycles(8.0);
        assert_eq!(store.get("walk_right1").unwrap().frames, vec![12, 13, 14]);
        assert_eq!(store.get("walk_up2").unwrap().frames, vec![21, 22, 23]);
        assert!(store.get("walk_sideways1").is_none());
    }
}
