//! Keyboard input
//!
//! Action-based bindings polled once per tick into a plain `TickInput`,
//! so the game rules never touch the windowing library directly.

mod actions;
mod state;

pub use actions::Action;
pub use state::InputState;
