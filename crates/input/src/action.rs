use crate::key::Key;
use objview_common::{ColorChannel, LightingCommand};

/// An edge-triggered action, fired once when its key goes down.
///
/// Held-key transform operations are not actions; they are produced every
/// tick by [`crate::frame_operations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Close the viewer window.
    Close,
    /// Change the lighting uniforms.
    Lighting(LightingCommand),
}

/// The action bound to a key press, if any.
pub fn key_action(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::Close),
        Key::Digit1 => Some(Action::Lighting(LightingCommand::ToggleChannel(
            ColorChannel::Red,
        ))),
        Key::Digit2 => Some(Action::Lighting(LightingCommand::ToggleChannel(
            ColorChannel::Green,
        ))),
        Key::Digit3 => Some(Action::Lighting(LightingCommand::ToggleChannel(
            ColorChannel::Blue,
        ))),
        Key::Digit4 => Some(Action::Lighting(LightingCommand::ResetChannels)),
        Key::Digit6 => Some(Action::Lighting(LightingCommand::ToggleLight)),
        _ => None,
    }
}
