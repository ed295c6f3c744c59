//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`collision`] – actor/ball overlap messages consumed by possession arbitration
//! - [`switchdebug`] – toggle debug diagnostics on/off
pub mod collision;
pub mod switchdebug;
