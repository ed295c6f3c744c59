//! Gameplay systems.
//!
//! This module groups all ECS systems that advance one tick of the match.
//!
//! Submodules overview
//! - [`actorcontroller`] – steer controlled actors from input
//! - [`animation`] – advance sprite animations
//! - [`collision`] – actor/ball overlap checks and message emission
//! - [`debug`] – diagnostics while debug mode is on
//! - [`input`] – sample host key state into [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`possession`] – arbitrate ball ownership and snap held balls to their owner
//! - [`shoot`] – release a held ball along the shooter's facing
//! - [`time`] – update simulation time and delta

pub mod actorcontroller;
pub mod animation;
pub mod collision;
pub mod debug;
pub mod input;
pub mod movement;
pub mod possession;
pub mod shoot;
pub mod time;
