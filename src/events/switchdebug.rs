//! Debug toggle event.
//!
//! The F11 key (or any host code) triggers [`SwitchDebugEvent`]; the
//! observer flips the [`DebugMode`] marker, which gates the per-tick
//! possession report.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert [`DebugMode`] when absent, remove it when present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    let enable = debug_mode.is_none();
    if enable {
        commands.insert_resource(DebugMode {});
    } else {
        commands.remove_resource::<DebugMode>();
    }
    info!("Debug mode {}", if enable { "enabled" } else { "disabled" });
}
