//! Physics integration.
//!
//! [`movement`] advances every unfrozen [`RigidBody`] by the frame delta,
//! damps it by its friction, and keeps its collider inside the
//! [`WorldBounds`], reflecting velocity by the body's bounce factor.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&BoxCollider>)>,
    time: Res<WorldTime>,
    bounds: Option<Res<WorldBounds>>,
) {
    for (mut position, mut rigidbody, maybe_collider) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        position.pos += rigidbody.velocity * time.delta;
        rigidbody.apply_friction(time.delta);

        if let Some(bounds) = bounds.as_deref() {
            let collider = maybe_collider.copied().unwrap_or(BoxCollider::new(0.0, 0.0));
            keep_inside(&mut position.pos, &mut rigidbody, &collider, bounds);
        }
    }
}

/// Push a body back inside the bounds and reflect (or kill) the velocity
/// component that carried it out.
fn keep_inside(pos: &mut Vec2, rigidbody: &mut RigidBody, collider: &BoxCollider, bounds: &WorldBounds) {
    let (min, max) = collider.aabb(*pos);
    let bounce = rigidbody.bounce;

    for axis in 0..2 {
        let (lo, hi, limit) = (min[axis], max[axis], bounds.size[axis]);
        let correction = if lo < 0.0 {
            -lo
        } else if hi > limit {
            limit - hi
        } else {
            continue;
        };
        pos[axis] += correction;
        let v = rigidbody.velocity[axis];
        // Only reflect velocity that points out of the pitch.
        if v * correction < 0.0 {
            rigidbody.velocity[axis] = -v * bounce;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_pushed_back_and_bounces() {
        let bounds = WorldBounds::new(100.0, 100.0);
        let collider = BoxCollider::centered(10.0, 10.0);
        let mut rb = RigidBody::with_physics(0.0, 0.5);
        rb.set_velocity(Vec2::new(200.0, -40.0));
        let mut pos = Vec2::new(98.0, 50.0);
        keep_inside(&mut pos, &mut rb, &collider, &bounds);
        assert_eq!(pos, Vec2::new(95.0, 50.0));
        assert_eq!(rb.velocity, Vec2::new(-100.0, -40.0));
    }

    #[test]
    fn body_without_bounce_stops_on_wall() {
        let bounds = WorldBounds::new(100.0, 100.0);
        let collider = BoxCollider::centered(10.0, 10.0);
        let mut rb = RigidBody::new();
        rb.set_velocity(Vec2::new(0.0, -300.0));
        let mut pos = Vec2::new(50.0, 1.0);
        keep_inside(&mut pos, &mut rb, &collider, &bounds);
        assert_eq!(pos, Vec2::new(50.0, 5.0));
        assert_eq!(rb.velocity, Vec2::ZERO);
    }

    #[test]
    fn body_inside_is_untouched() {
        let bounds = WorldBounds::new(100.0, 100.0);
        let collider = BoxCollider::centered(10.0, 10.0);
        let mut rb = RigidBody::new();
        rb.set_velocity(Vec2::new(10.0, 10.0));
        let mut pos = Vec2::new(50.0, 50.0);
        keep_inside(&mut pos, &mut rb, &collider, &bounds);
        assert_eq!(pos, Vec2::new(50.0, 50.0));
        assert_eq!(rb.velocity, Vec2::new(10.0, 10.0));
    }
}
