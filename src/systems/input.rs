//! Input systems.
//!
//! - [`update_input_state`] samples the host's [`KeyboardSnapshot`] each frame
//!   and writes the results into [`InputState`], deriving press/release edges.
//! - Pressing the debug key fires a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputState, KeyboardSnapshot};

/// Sample held keys into the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    keyboard: Res<KeyboardSnapshot>,
    mut commands: Commands,
) {
    let input = &mut *input;
    for state in [
        &mut input.maindirection_up,
        &mut input.maindirection_left,
        &mut input.maindirection_down,
        &mut input.maindirection_right,
        &mut input.secondarydirection_up,
        &mut input.secondarydirection_down,
        &mut input.secondarydirection_left,
        &mut input.secondarydirection_right,
        &mut input.action_1,
        &mut input.action_2,
        &mut input.mode_debug,
    ] {
        let down = keyboard.is_down(state.key_binding);
        state.sample(down);
        if state.just_pressed {
            trace!("{:?} pressed", state.key_binding);
        }
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
