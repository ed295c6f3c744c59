//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! on the pitch.
//!
//! Submodules overview:
//! - [`actor`] – movement, facing and juggle point of a player
//! - [`animation`] – playback state and the direction → animation mapping
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap detection
//! - [`group`] – tag component naming an entity's role
//! - [`inputcontrolled`] – key group driving a local actor
//! - [`lineupslot`] – kickoff order, used to break simultaneous touches
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`possession`] – which actor holds the ball
//! - [`rigidbody`] – simple kinematic body storing velocity

pub mod actor;
pub mod animation;
pub mod boxcollider;
pub mod group;
pub mod inputcontrolled;
pub mod lineupslot;
pub mod mapposition;
pub mod possession;
pub mod rigidbody;
