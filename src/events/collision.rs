//! Overlap notifications between actors and the ball.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! writes one [`BallOverlap`] per actor touching a ball each tick. The
//! [`possession_arbitration`](crate::systems::possession::possession_arbitration)
//! system drains the queue at a fixed point of the tick, so the outcome only
//! depends on message order.
use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// An actor and a ball overlapped this tick.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallOverlap {
    pub actor: Entity,
    pub ball: Entity,
}
