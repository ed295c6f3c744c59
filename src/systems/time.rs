//! Frame clock.
//!
//! [`update_world_time`] is called by the scene before each tick, with the
//! host's frame delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance [`WorldTime`] by one frame of `dt` seconds, scaled by
/// `time_scale`. Negative or non-finite deltas count as a zero-length frame.
pub fn update_world_time(world: &mut World, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let mut clock = world.resource_mut::<WorldTime>();
    clock.delta = dt * clock.time_scale;
    clock.elapsed += clock.delta;
    clock.frame_count += 1;
}
