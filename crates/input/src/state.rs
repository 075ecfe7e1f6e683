use crate::key::Key;
use std::collections::BTreeSet;

/// Direction of vertical cursor motion since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMotion {
    /// Cursor y increased (moved down the window).
    Down,
    /// Cursor y decreased (moved up the window).
    Up,
    Still,
}

/// Snapshot of held keys, the left mouse button and the cursor height.
///
/// Key and button state is level-triggered: it stays set until released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
    left_mouse: bool,
    cursor_y: f64,
    prev_cursor_y: f64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true if the key was not already held.
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn held_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }

    pub fn set_left_mouse(&mut self, pressed: bool) {
        self.left_mouse = pressed;
    }

    pub fn left_mouse(&self) -> bool {
        self.left_mouse
    }

    pub fn set_cursor_y(&mut self, y: f64) {
        self.cursor_y = y;
    }

    pub fn vertical_motion(&self) -> VerticalMotion {
        if self.cursor_y > self.prev_cursor_y {
            VerticalMotion::Down
        } else if self.cursor_y < self.prev_cursor_y {
            VerticalMotion::Up
        } else {
            VerticalMotion::Still
        }
    }

    /// Latch the cursor position so the next frame measures a fresh delta.
    pub fn end_frame(&mut self) {
        self.prev_cursor_y = self.cursor_y;
    }

    /// Drop all held state, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
        self.left_mouse = false;
    }
}
