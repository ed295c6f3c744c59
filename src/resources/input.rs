//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Arrow keys drive the first
//! actor, WASD the second. The host reports held keys through a
//! [`KeyboardSnapshot`] each frame.
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::components::inputcontrolled::ControlScheme;

/// Keys the game reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Enter,
    F11,
    /// Unbound placeholder.
    Null,
}

/// Keys held down this frame, as reported by the host.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct KeyboardSnapshot {
    pub held: FxHashSet<Key>,
}

impl KeyboardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            held: keys.into_iter().collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl BoolState {
    fn bound(key_binding: Key) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Update from the held state, deriving press/release edges.
    pub fn sample(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: Key::Null,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// Fields are grouped by purpose: main movement (WASD), secondary movement
/// (arrow keys), and actions.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    // Action keys
    pub action_1: BoolState,
    pub action_2: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound(Key::W),
            maindirection_left: BoolState::bound(Key::A),
            maindirection_down: BoolState::bound(Key::S),
            maindirection_right: BoolState::bound(Key::D),
            secondarydirection_up: BoolState::bound(Key::Up),
            secondarydirection_down: BoolState::bound(Key::Down),
            secondarydirection_left: BoolState::bound(Key::Left),
            secondarydirection_right: BoolState::bound(Key::Right),
            action_1: BoolState::bound(Key::Space),
            action_2: BoolState::bound(Key::Enter),
            mode_debug: BoolState::bound(Key::F11),
        }
    }
}

impl InputState {
    fn direction_keys(&self, scheme: ControlScheme) -> [&BoolState; 4] {
        match scheme {
            ControlScheme::Main => [
                &self.maindirection_left,
                &self.maindirection_right,
                &self.maindirection_down,
                &self.maindirection_up,
            ],
            ControlScheme::Secondary => [
                &self.secondarydirection_left,
                &self.secondarydirection_right,
                &self.secondarydirection_down,
                &self.secondarydirection_up,
            ],
        }
    }

    /// Raw movement direction for a key group.
    ///
    /// Opposite keys do not cancel: right overrides left and up overrides
    /// down, in that order.
    pub fn direction(&self, scheme: ControlScheme) -> Vec2 {
        let [left, right, down, up] = self.direction_keys(scheme);
        let mut dir = Vec2::ZERO;
        if left.active {
            dir.x = -1.0;
        }
        if right.active {
            dir.x = 1.0;
        }
        if down.active {
            dir.y = 1.0;
        }
        if up.active {
            dir.y = -1.0;
        }
        dir
    }

    /// Shoot key state for a key group.
    pub fn shoot(&self, scheme: ControlScheme) -> &BoolState {
        match scheme {
            ControlScheme::Secondary => &self.action_1,
            ControlScheme::Main => &self.action_2,
        }
    }
}
