//! Lineup slot component.
//!
//! [`LineupSlot`] is an actor's place in the kickoff lineup (player 1 is
//! slot 0). Overlap messages for one ball are emitted in slot order, so a
//! simultaneous touch is won by the highest slot whatever entity ids the
//! actors were given.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineupSlot(pub usize);
