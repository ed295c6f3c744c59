//! Keyboard-driven actor control.
//!
//! [`InputControlled`] binds an actor to one key group of
//! [`InputState`](crate::resources::input::InputState). The
//! [`actor_controller`](crate::systems::actorcontroller::actor_controller)
//! system reads it each tick.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Which group of keys drives an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlScheme {
    /// Arrow keys, shoot with Space.
    Secondary,
    /// WASD, shoot with Enter.
    Main,
}

/// Marks an actor as locally controlled by the given key group.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputControlled {
    pub scheme: ControlScheme,
}

impl InputControlled {
    pub fn new(scheme: ControlScheme) -> Self {
        Self { scheme }
    }
}
