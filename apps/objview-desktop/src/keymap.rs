use objview_input::Key;
use winit::keyboard::KeyCode;

/// Map a winit physical key onto the viewer's key set.
pub fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyK => Key::K,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_arrows_map() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Key::ArrowDown));
        assert_eq!(map_key(KeyCode::PageUp), Some(Key::PageUp));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::KeyQ), None);
        assert_eq!(map_key(KeyCode::Digit5), None);
    }
}
