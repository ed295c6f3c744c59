//! Controllable on-field participant.
//!
//! An [`Actor`] turns a desired movement direction into a velocity command
//! and an animation choice, and remembers the last direction it moved in.
//! Its position lives in the entity's
//! [`MapPosition`](super::mapposition::MapPosition); methods that need it
//! take it as an argument.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::animation::AnimationDirection;

/// Per-actor movement state and tuning.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Actor {
    /// Last nonzero scaled movement vector. Never set to zero by [`Actor::steer`].
    pub facing: Vec2,
    /// Multiplier applied to the normalized input direction.
    pub speed: f32,
    /// Visual height; the juggle point sits half of it below the pivot.
    pub height: f32,
    /// Distance in front of the feet where a held ball is placed.
    pub juggle_distance: f32,
    /// Suffix selecting the walk cycle set (`walk_down1` vs `walk_down2`).
    pub animation_set: u8,
}

/// Result of steering an actor for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    pub velocity: Vec2,
    pub animation: AnimationDirection,
}

impl Actor {
    pub fn new(speed: f32, height: f32, juggle_distance: f32) -> Self {
        Self {
            facing: Vec2::ZERO,
            speed,
            height,
            juggle_distance,
            animation_set: 1,
        }
    }

    pub fn with_animation_set(mut self, animation_set: u8) -> Self {
        self.animation_set = animation_set;
        self
    }

    /// Initial facing. A zero vector is ignored.
    pub fn with_facing(mut self, facing: Vec2) -> Self {
        if facing != Vec2::ZERO {
            self.facing = facing;
        }
        self
    }

    /// Compute this tick's velocity and animation from a raw direction.
    ///
    /// The direction is normalized before scaling by `speed`, so diagonals
    /// are as fast as straight lines. A zero (or non-finite) direction yields
    /// a zero velocity, the `Stop` animation, and leaves `facing` untouched.
    pub fn steer(&mut self, direction: Vec2) -> MoveCommand {
        let velocity = direction.normalize_or_zero() * self.speed;
        let animation = AnimationDirection::from_vector(velocity);
        if velocity != Vec2::ZERO {
            self.facing = velocity;
        }
        MoveCommand {
            velocity,
            animation,
        }
    }

    /// Unit facing direction. Zero until the first nonzero move.
    pub fn direction(&self) -> Vec2 {
        self.facing.normalize_or_zero()
    }

    /// Point near the feet, pushed along the facing direction, where a held
    /// ball is drawn.
    pub fn ball_juggle_position(&self, position: Vec2) -> Vec2 {
        position + Vec2::new(0.0, self.height * 0.5) + self.direction() * self.juggle_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn steer_scales_normalized_direction() {
        let mut actor = Actor::new(300.0, 64.0, 30.0);
        let cmd = actor.steer(Vec2::new(1.0, 1.0));
        assert!((cmd.velocity.length() - 300.0).abs() < 1e-3);
        assert_eq!(cmd.animation, AnimationDirection::Right);
        assert!(vec_approx_eq(actor.facing, cmd.velocity));
    }

    #[test]
    fn zero_move_keeps_facing() {
        let mut actor = Actor::new(300.0, 64.0, 30.0);
        actor.steer(Vec2::new(0.0, -1.0));
        let facing = actor.facing;
        let cmd = actor.steer(Vec2::ZERO);
        assert_eq!(cmd.velocity, Vec2::ZERO);
        assert_eq!(cmd.animation, AnimationDirection::Stop);
        assert_eq!(actor.facing, facing);
    }

    #[test]
    fn non_finite_direction_is_treated_as_zero() {
        let mut actor = Actor::new(300.0, 64.0, 30.0).with_facing(Vec2::X);
        let cmd = actor.steer(Vec2::new(f32::NAN, 1.0));
        assert_eq!(cmd.velocity, Vec2::ZERO);
        assert_eq!(actor.facing, Vec2::X);
    }

    #[test]
    fn direction_is_unit_after_any_move() {
        let mut actor = Actor::new(300.0, 64.0, 30.0);
        for dir in [
            Vec2::new(1.0, 0.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.0, 0.25),
            Vec2::new(1e-3, -1e3),
        ] {
            actor.steer(dir);
            assert!((actor.direction().length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn direction_before_any_move_is_zero() {
        let actor = Actor::new(300.0, 64.0, 30.0);
        assert_eq!(actor.direction(), Vec2::ZERO);
        assert!(!actor.direction().is_nan());
    }

    #[test]
    fn juggle_position_sits_below_and_ahead() {
        let actor = Actor::new(300.0, 64.0, 30.0).with_facing(Vec2::new(1.0, 0.0));
        let pos = actor.ball_juggle_position(Vec2::new(100.0, 100.0));
        assert!(vec_approx_eq(pos, Vec2::new(130.0, 132.0)));
    }

    #[test]
    fn juggle_position_without_facing_is_at_feet() {
        let actor = Actor::new(300.0, 64.0, 30.0);
        let pos = actor.ball_juggle_position(Vec2::new(10.0, 10.0));
        assert!(vec_approx_eq(pos, Vec2::new(10.0, 42.0)));
    }
}
