//! Sprite animation playback state and the direction → animation mapping.
//!
//! [`Animation`] is the per-entity playback cursor into an
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! definition. [`AnimationDirection::from_vector`] picks which walk cycle an
//! actor shows for a movement vector.
use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Stopped animations keep their key and frame; the host keeps drawing it.
    pub playing: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            playing: false,
        }
    }

    /// Start playing `key`. Re-playing the running key keeps its cursor.
    pub fn play(&mut self, key: &str) {
        if self.playing && self.animation_key == key {
            return;
        }
        if self.animation_key != key {
            self.animation_key = key.to_string();
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }
}

/// Animation state selected from a movement vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationDirection {
    Right,
    Left,
    Up,
    Down,
    Stop,
}

impl AnimationDirection {
    /// Map a vector to an animation with strict axis priority.
    ///
    /// Any nonzero x wins over y regardless of magnitude. y is only looked at
    /// when x is exactly zero (screen coordinates: negative y is up).
    pub fn from_vector(v: Vec2) -> Self {
        if v.x > 0.0 {
            AnimationDirection::Right
        } else if v.x < 0.0 {
            AnimationDirection::Left
        } else if v.y < 0.0 {
            AnimationDirection::Up
        } else if v.y > 0.0 {
            AnimationDirection::Down
        } else {
            AnimationDirection::Stop
        }
    }

    /// Name used in walk animation keys. `Stop` has none.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            AnimationDirection::Right => Some("right"),
            AnimationDirection::Left => Some("left"),
            AnimationDirection::Up => Some("up"),
            AnimationDirection::Down => Some("down"),
            AnimationDirection::Stop => None,
        }
    }

    /// Walk cycle key for this direction in the given animation set,
    /// e.g. `walk_left1`.
    pub fn walk_key(&self, animation_set: u8) -> Option<String> {
        self.as_str()
            .map(|dir| format!("walk_{}{}", dir, animation_set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_wins_regardless_of_magnitude() {
        assert_eq!(
            AnimationDirection::from_vector(Vec2::new(0.001, -500.0)),
            AnimationDirection::Right
        );
        assert_eq!(
            AnimationDirection::from_vector(Vec2::new(-0.001, 500.0)),
            AnimationDirection::Left
        );
        assert_eq!(
            AnimationDirection::from_vector(Vec2::new(1.0, 1.0)),
            AnimationDirection::Right
        );
    }

    #[test]
    fn vertical_only_when_x_is_zero() {
        assert_eq!(
            AnimationDirection::from_vector(Vec2::new(0.0, -1.0)),
            AnimationDirection::Up
        );
        assert_eq!(
            AnimationDirection::from_vector(Vec2::new(0.0, 3.0)),
            AnimationDirection::Down
        );
        assert_eq!(
            AnimationDirection::from_vector(Vec2::new(-0.0, 3.0)),
            AnimationDirection::Down
        );
    }

    #[test]
    fn zero_vector_stops() {
        assert_eq!(
            AnimationDirection::from_vector(Vec2::ZERO),
            AnimationDirection::Stop
        );
        assert_eq!(AnimationDirection::Stop.walk_key(1), None);
    }

    #[test]
    fn walk_keys() {
        assert_eq!(
            AnimationDirection::Down.walk_key(2).as_deref(),
            Some("walk_down2")
        );
        assert_eq!(
            AnimationDirection::Right.walk_key(1).as_deref(),
            Some("walk_right1")
        );
    }

    #[test]
    fn play_same_key_keeps_cursor() {
        let mut anim = Animation::new("walk_down1");
        anim.play("walk_down1");
        anim.frame_index = 2;
        anim.play("walk_down1");
        assert_eq!(anim.frame_index, 2);
        anim.play("walk_up1");
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.animation_key, "walk_up1");
    }

    #[test]
    fn stop_then_resume_same_key() {
        let mut anim = Animation::new("walk_left1");
        anim.play("walk_left1");
        anim.frame_index = 1;
        anim.stop();
        assert!(!anim.playing);
        anim.play("walk_left1");
        assert!(anim.playing);
        assert_eq!(anim.frame_index, 1);
    }
}
