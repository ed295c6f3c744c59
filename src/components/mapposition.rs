//! World-space position component.
//!
//! [`MapPosition`] is the authoritative coordinate of a body on the pitch.
//! It is the pivot (center) of the entity; colliders and juggle offsets are
//! expressed relative to it.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    /// 2D coordinates in world units (pixels of the pitch).
    pub pos: Vec2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self { pos: Vec2::ZERO }
    }
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y) }
    }

    /// Create a MapPosition from an existing vector.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }
}
