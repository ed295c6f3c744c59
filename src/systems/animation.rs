//! Animation playback.
//!
//! [`animation`] advances every playing [`Animation`] by the frame delta
//! using the frame rate and loop flag of its
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! definition. Stopped animations hold their frame.
use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::Animation;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Advance animation playback.
///
/// Contract
/// - Reads [`WorldTime`] for the delta.
/// - Looks up animation data from [`AnimationStore`].
/// - Mutates [`Animation`] component state.
pub fn animation(
    mut query: Query<&mut Animation>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for mut anim_comp in query.iter_mut() {
        if !anim_comp.playing {
            continue;
        }
        match animation_store.get(&anim_comp.animation_key) {
            Some(resource) => advance(&mut anim_comp, resource, time.delta),
            None => warn!("Unknown animation key '{}'", anim_comp.animation_key),
        }
    }
}

/// Move the playback cursor forward by `delta` seconds.
pub fn advance(anim: &mut Animation, resource: &AnimationResource, delta: f32) {
    if resource.frames.is_empty() || resource.fps <= 0.0 {
        return;
    }
    let frame_duration = 1.0 / resource.fps;
    anim.elapsed_time += delta;
    if anim.elapsed_time < frame_duration {
        return;
    }
    let steps = (anim.elapsed_time / frame_duration).floor();
    anim.elapsed_time %= frame_duration;

    let len = resource.frames.len();
    if resource.looped {
        let steps = (steps % len as f32) as usize;
        anim.frame_index = (anim.frame_index + steps) % len;
        return;
    }
    let last = len - 1;
    let remaining = last.saturating_sub(anim.frame_index);
    if steps > remaining as f32 {
        // stay on last frame
        anim.frame_index = last;
        anim.elapsed_time = 0.0;
        anim.playing = false;
    } else {
        anim.frame_index += steps as usize;
    }
}

/// Sprite sheet frame currently shown by `anim`, if its key is known.
pub fn sheet_frame(anim: &Animation, animation_store: &AnimationStore) -> Option<usize> {
    animation_store
        .get(&anim.animation_key)
        .and_then(|resource| resource.frames.get(anim.frame_index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk() -> AnimationResource {
        AnimationResource {
            frames: vec![12, 13, 14],
            fps: 8.0,
            looped: true,
        }
    }

    #[test]
    fn advances_one_frame_per_period() {
        let mut anim = Animation::new("walk_right1");
        anim.play("walk_right1");
        advance(&mut anim, &walk(), 0.1);
        assert_eq!(anim.frame_index, 0);
        advance(&mut anim, &walk(), 0.05);
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn looping_wraps_around() {
        let mut anim = Animation::new("walk_right1");
        anim.play("walk_right1");
        advance(&mut anim, &walk(), 0.5);
        // 4 frame periods: 0 -> 1 -> 2 -> 0 -> 1
        assert_eq!(anim.frame_index, 1);
        assert!(anim.playing);
    }

    #[test]
    fn one_shot_holds_last_frame() {
        let resource = AnimationResource {
            looped: false,
            ..walk()
        };
        let mut anim = Animation::new("kick");
        anim.play("kick");
        advance(&mut anim, &resource, 2.0);
        assert_eq!(anim.frame_index, 2);
        assert!(!anim.playing);
    }

    #[test]
    fn several_periods_in_one_tick() {
        let mut anim = Animation::new("walk_right1");
        anim.play("walk_right1");
        advance(&mut anim, &walk(), 0.3);
        assert_eq!(anim.frame_index, 2);
        assert!((anim.elapsed_time - 0.05).abs() < 1e-5);
    }

    #[test]
    fn huge_delta_returns_with_valid_frame() {
        let mut anim = Animation::new("walk_right1");
        anim.play("walk_right1");
        advance(&mut anim, &walk(), 1.0e9);
        assert!(anim.frame_index < 3);
        assert!(anim.elapsed_time >= 0.0 && anim.elapsed_time < 0.125);
        assert!(anim.playing);

        let resource = AnimationResource {
            looped: false,
            ..walk()
        };
        let mut once = Animation::new("kick");
        once.play("kick");
        advance(&mut once, &resource, 1.0e9);
        assert_eq!(once.frame_index, 2);
        assert!(!once.playing);
    }

    #[test]
    fn sheet_frame_maps_through_store() {
        let mut store = AnimationStore::new();
        store.insert("walk_right1", walk());
        let mut anim = Animation::new("walk_right1");
        anim.frame_index = 2;
        assert_eq!(sheet_frame(&anim, &store), Some(14));
        let unknown = Animation::new("nope");
        assert_eq!(sheet_frame(&unknown, &store), None);
    }
}
