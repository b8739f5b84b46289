//! Game action definitions
//!
//! Arrow keys move, space switches polarity. There is no other binding.

use macroquad::prelude::KeyCode;

/// All actions the player can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    SwitchPolarity,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::SwitchPolarity,
    ];

    /// Keyboard key bound to this action
    pub fn key(self) -> KeyCode {
        match self {
            Action::MoveLeft => KeyCode::Left,
            Action::MoveRight => KeyCode::Right,
            Action::MoveUp => KeyCode::Up,
            Action::MoveDown => KeyCode::Down,
            Action::SwitchPolarity => KeyCode::Space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_are_unique() {
        for (i, a) in Action::ALL.iter().enumerate() {
            for b in &Action::ALL[i + 1..] {
                assert_ne!(a.key(), b.key(), "{:?} and {:?} share a key", a, b);
            }
        }
    }
}
