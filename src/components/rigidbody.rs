//! Kinematic body component.
//!
//! Actors get a plain body whose velocity the controller overwrites every
//! tick. The ball gets friction and bounce so it rolls out after a shot and
//! comes back off the touchlines. While an actor holds the ball its body is
//! `frozen` and the movement system leaves it alone.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity plus the damping parameters the movement system applies.
///
/// ```
/// use glam::Vec2;
/// use kickoff::components::rigidbody::RigidBody;
///
/// let mut ball = RigidBody::with_physics(1.0, 0.5);
/// ball.set_velocity(Vec2::new(600.0, 0.0));
/// ball.freeze(); // held by an actor
/// assert!(ball.frozen);
/// ```
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// World units per second.
    pub velocity: Vec2,
    /// Fraction of speed lost per second.
    pub friction: f32,
    /// Share of the speed kept when bouncing off the world bounds.
    pub bounce: f32,
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// A body with no friction that stops dead at the world bounds.
    pub fn new() -> Self {
        Self::with_physics(0.0, 0.0)
    }

    pub fn with_physics(friction: f32, bounce: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            friction,
            bounce,
            frozen: false,
        }
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Damp the velocity over `delta` seconds. Never reverses direction.
    pub fn apply_friction(&mut self, delta: f32) {
        if self.friction > 0.0 {
            self.velocity *= (1.0 - self.friction * delta).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn plain_body_has_no_damping() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert!(approx_eq(rb.friction, 0.0));
        assert!(approx_eq(rb.bounce, 0.0));
        assert!(!rb.frozen);
    }

    #[test]
    fn frozen_flag_round_trips() {
        let mut rb = RigidBody::with_physics(1.0, 0.5);
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }

    #[test]
    fn friction_damps_and_never_reverses() {
        let mut rb = RigidBody::with_physics(2.0, 0.0);
        rb.set_velocity(Vec2::new(100.0, 0.0));
        rb.apply_friction(0.25);
        assert!(approx_eq(rb.velocity.x, 50.0));
        rb.apply_friction(1.0);
        assert!(approx_eq(rb.velocity.x, 0.0));
    }

    #[test]
    fn frictionless_body_keeps_speed() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vec2::new(3.0, 4.0));
        rb.apply_friction(10.0);
        assert_eq!(rb.velocity, Vec2::new(3.0, 4.0));
    }
}
