/// Keys the viewer reacts to, independent of any windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    W,
    S,
    A,
    D,
    O,
    P,
    B,
    N,
    E,
    J,
    L,
    I,
    K,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit6,
    Escape,
}

impl Key {
    /// Short label for help text and the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Key::W => "W",
            Key::S => "S",
            Key::A => "A",
            Key::D => "D",
            Key::O => "O",
            Key::P => "P",
            Key::B => "B",
            Key::N => "N",
            Key::E => "E",
            Key::J => "J",
            Key::L => "L",
            Key::I => "I",
            Key::K => "K",
            Key::ArrowLeft => "Left",
            Key::ArrowRight => "Right",
            Key::ArrowUp => "Up",
            Key::ArrowDown => "Down",
            Key::PageUp => "PgUp",
            Key::PageDown => "PgDn",
            Key::Digit1 => "1",
            Key::Digit2 => "2",
            Key::Digit3 => "3",
            Key::Digit4 => "4",
            Key::Digit6 => "6",
            Key::Escape => "Esc",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
