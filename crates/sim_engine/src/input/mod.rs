//! Input boundary: key-state queries
//!
//! The core never reads device state. An external driver feeds key events
//! in through [`AppEvent`](crate::AppEvent); the scene and applications
//! only ever ask whether a key is currently down.

use std::collections::HashSet;

/// Key codes the simulation core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Current key-down set
#[derive(Debug, Default)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    /// Whether a key is currently down
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether any key is currently down
    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_transitions_are_tracked() {
        let mut input = InputState::new();
        assert!(!input.is_pressed(KeyCode::Escape));

        input.set_key(KeyCode::Escape, true);
        assert!(input.is_pressed(KeyCode::Escape));
        assert!(input.any_pressed());

        input.set_key(KeyCode::Escape, false);
        assert!(!input.is_pressed(KeyCode::Escape));
    }
}
