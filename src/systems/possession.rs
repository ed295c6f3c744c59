//! Possession arbitration and ball following.
//!
//! - [`possession_arbitration`] drains this tick's
//!   [`BallOverlap`](crate::events::collision::BallOverlap) messages and
//!   reassigns ball owners according to the configured
//!   [`PossessionPolicy`].
//! - [`possession_follow`] snaps every held ball to its owner's juggle
//!   position, overriding physics for the tick. Loose balls are left alone.
//!
//! # Related
//!
//! - [`PossessionToken`] – the owner relation
//! - [`Actor::ball_juggle_position`] – where a held ball goes
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::components::actor::Actor;
use crate::components::mapposition::MapPosition;
use crate::components::possession::PossessionToken;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::BallOverlap;
use crate::resources::gameconfig::{GameConfig, PossessionPolicy};
use crate::resources::worldtime::WorldTime;

/// Decide the owner of a ball from the actors that overlapped it this tick,
/// in notification order.
///
/// Returns the new owner (which may equal the current one).
pub fn arbitrate(
    token: &PossessionToken,
    overlapping: &[Entity],
    policy: PossessionPolicy,
) -> Option<Entity> {
    let mut owner = token.owner();

    if policy == PossessionPolicy::ReleaseOnSeparation
        && owner.is_some_and(|current| !overlapping.contains(&current))
    {
        owner = None;
    }

    for &actor in overlapping {
        if !token.can_be_taken_by(actor) {
            continue;
        }
        if policy == PossessionPolicy::FirstTouch && owner.is_some() {
            break;
        }
        owner = Some(actor);
    }
    owner
}

pub fn possession_arbitration(
    mut reader: MessageReader<BallOverlap>,
    mut balls: Query<(Entity, &mut PossessionToken, &mut RigidBody)>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let mut overlaps: FxHashMap<Entity, Vec<Entity>> = FxHashMap::default();
    for overlap in reader.read() {
        overlaps.entry(overlap.ball).or_default().push(overlap.actor);
    }

    for (ball, mut token, mut rigidbody) in balls.iter_mut() {
        token.tick_cooldown(time.delta);
        let overlapping = overlaps.get(&ball).map(Vec::as_slice).unwrap_or(&[]);
        let new_owner = arbitrate(&token, overlapping, config.possession_policy);
        let previous = token.owner();
        if token.set_owner(new_owner) {
            debug!("{:?} possession: {:?} -> {:?}", ball, previous, new_owner);
            if new_owner.is_none() {
                rigidbody.unfreeze();
            }
        }
    }
}

pub fn possession_follow(
    mut balls: Query<
        (Entity, &mut PossessionToken, &mut MapPosition, &mut RigidBody),
        Without<Actor>,
    >,
    actors: Query<(&Actor, &MapPosition), Without<PossessionToken>>,
) {
    for (ball, mut token, mut position, mut rigidbody) in balls.iter_mut() {
        let Some(owner) = token.owner() else {
            continue;
        };
        match actors.get(owner) {
            Ok((actor, owner_position)) => {
                position.pos = actor.ball_juggle_position(owner_position.pos);
                rigidbody.set_velocity(Vec2::ZERO);
                rigidbody.freeze();
            }
            Err(_) => {
                warn!("{:?} owner {:?} no longer exists, dropping it", ball, owner);
                token.set_owner(None);
                rigidbody.unfreeze();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actors(n: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn sticky_last_overlap_wins() {
        let a = actors(2);
        let token = PossessionToken::new();
        assert_eq!(
            arbitrate(&token, &[a[0], a[1]], PossessionPolicy::Sticky),
            Some(a[1])
        );
    }

    #[test]
    fn sticky_keeps_owner_without_overlap() {
        let a = actors(1);
        let mut token = PossessionToken::new();
        token.set_owner(Some(a[0]));
        assert_eq!(arbitrate(&token, &[], PossessionPolicy::Sticky), Some(a[0]));
    }

    #[test]
    fn sticky_challenger_takes_ball() {
        let a = actors(2);
        let mut token = PossessionToken::new();
        token.set_owner(Some(a[0]));
        assert_eq!(
            arbitrate(&token, &[a[0], a[1]], PossessionPolicy::Sticky),
            Some(a[1])
        );
    }

    #[test]
    fn release_on_separation_drops_owner() {
        let a = actors(1);
        let mut token = PossessionToken::new();
        token.set_owner(Some(a[0]));
        assert_eq!(
            arbitrate(&token, &[], PossessionPolicy::ReleaseOnSeparation),
            None
        );
        assert_eq!(
            arbitrate(&token, &[a[0]], PossessionPolicy::ReleaseOnSeparation),
            Some(a[0])
        );
    }

    #[test]
    fn first_touch_locks_possession() {
        let a = actors(2);
        let mut token = PossessionToken::new();
        assert_eq!(
            arbitrate(&token, &[a[0], a[1]], PossessionPolicy::FirstTouch),
            Some(a[0])
        );
        token.set_owner(Some(a[0]));
        assert_eq!(
            arbitrate(&token, &[a[1]], PossessionPolicy::FirstTouch),
            Some(a[0])
        );
    }

    #[test]
    fn cooldown_blocks_only_the_shooter() {
        let a = actors(2);
        let mut token = PossessionToken::new();
        token.release_by_shot(a[0], 1.0);
        assert_eq!(arbitrate(&token, &[a[0]], PossessionPolicy::Sticky), None);
        assert_eq!(
            arbitrate(&token, &[a[1], a[0]], PossessionPolicy::Sticky),
            Some(a[1])
        );
    }
}
