//! Game module
//!
//! The polarity platformer: a player square, coloured platforms, three
//! hand-authored levels and the per-tick rules that tie them together.
//!
//! Key pieces:
//! - Sprite: shared "coloured box" capability for player and platforms
//! - GameState: everything the loop mutates, owned by the loop
//! - tick: one pass of the rules, independent of the window
//! - Events: diagnostics queued by the rules, printed by the loop

pub mod constants;
pub mod entity;
pub mod event;
pub mod levels;
pub mod platform;
pub mod player;
pub mod rect;
pub mod renderer;
pub mod runtime;
pub mod state;

// Re-export main types
pub use renderer::draw_game;
pub use runtime::{now_ms, FpsLimit, FrameLimiter};
pub use state::{tick, GameState, TickInput, TickOutcome};
