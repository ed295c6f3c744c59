use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Rectangle bodies are kept inside, from (0, 0) to `size`.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub size: Vec2,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }
}
