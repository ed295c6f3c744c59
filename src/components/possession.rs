//! The ball's possession relation.
//!
//! [`PossessionToken`] records which actor entity currently holds the ball.
//! The handle is a weak relation: the actor is owned by the world, and a
//! despawned owner is simply treated as no owner by the
//! [`possession`](crate::systems::possession) systems.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct PossessionToken {
    owner: Option<Entity>,
    /// Actor that last released the ball by shooting.
    last_holder: Option<Entity>,
    /// Seconds left before `last_holder` may take the ball again.
    regrab_cooldown: f32,
}

impl PossessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }

    pub fn is_held(&self) -> bool {
        self.owner.is_some()
    }

    pub fn last_holder(&self) -> Option<Entity> {
        self.last_holder
    }

    pub fn regrab_cooldown(&self) -> f32 {
        self.regrab_cooldown
    }

    /// Reassign the holder. Any previous holder loses the ball.
    ///
    /// Returns true when the owner actually changed.
    pub fn set_owner(&mut self, owner: Option<Entity>) -> bool {
        if self.owner == owner {
            return false;
        }
        self.owner = owner;
        true
    }

    /// Drop the ball after a shot and block `shooter` from retaking it for
    /// `cooldown` seconds.
    pub fn release_by_shot(&mut self, shooter: Entity, cooldown: f32) {
        self.owner = None;
        self.last_holder = Some(shooter);
        self.regrab_cooldown = cooldown.max(0.0);
    }

    /// Whether an overlap with `actor` may hand it the ball.
    pub fn can_be_taken_by(&self, actor: Entity) -> bool {
        !(self.regrab_cooldown > 0.0 && self.last_holder == Some(actor))
    }

    pub fn tick_cooldown(&mut self, delta: f32) {
        if self.regrab_cooldown > 0.0 {
            self.regrab_cooldown = (self.regrab_cooldown - delta).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn two_actors() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn set_owner_is_idempotent() {
        let (a, _) = two_actors();
        let mut token = PossessionToken::new();
        assert!(token.set_owner(Some(a)));
        let before = token.clone();
        assert!(!token.set_owner(Some(a)));
        assert_eq!(token, before);
    }

    #[test]
    fn new_owner_replaces_previous() {
        let (a, b) = two_actors();
        let mut token = PossessionToken::new();
        token.set_owner(Some(a));
        assert!(token.set_owner(Some(b)));
        assert_eq!(token.owner(), Some(b));
        assert!(token.set_owner(None));
        assert!(!token.is_held());
    }

    #[test]
    fn shooter_waits_out_cooldown() {
        let (a, b) = two_actors();
        let mut token = PossessionToken::new();
        token.set_owner(Some(a));
        token.release_by_shot(a, 0.3);
        assert!(!token.is_held());
        assert!(!token.can_be_taken_by(a));
        assert!(token.can_be_taken_by(b));
        token.tick_cooldown(0.2);
        assert!(!token.can_be_taken_by(a));
        token.tick_cooldown(0.2);
        assert!(token.can_be_taken_by(a));
        assert_eq!(token.regrab_cooldown(), 0.0);
    }
}
