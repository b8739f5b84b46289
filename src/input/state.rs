//! Input state
//!
//! Polls the macroquad keyboard once per tick and turns it into a
//! `TickInput` for the simulation.

use macroquad::prelude::*;

use super::Action;
use crate::game::TickInput;

/// Keyboard and window-close polling
pub struct InputState;

impl InputState {
    /// Ask macroquad to report close requests instead of exiting on them.
    /// Call once before the first frame.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        is_key_down(action.key())
    }

    /// Snapshot everything the next tick needs
    pub fn poll(&self) -> TickInput {
        let mut input = TickInput {
            quit: is_quit_requested(),
            ..Default::default()
        };
        for action in Action::ALL {
            if self.action_down(action) {
                apply_action(&mut input, action);
            }
        }
        input
    }
}

/// Record a held action in the tick input
fn apply_action(input: &mut TickInput, action: Action) {
    match action {
        Action::MoveLeft => input.movement.left = true,
        Action::MoveRight => input.movement.right = true,
        Action::MoveUp => input.movement.up = true,
        Action::MoveDown => input.movement.down = true,
        Action::SwitchPolarity => input.switch_polarity = true,
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
