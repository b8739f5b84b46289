//! Game state and the per-tick update
//!
//! Everything the loop mutates lives in `GameState`. `tick` runs one
//! iteration of the game rules against a `TickInput` snapshot and a clock
//! value, so it can be driven from tests without a window.

use super::constants::LEVEL_CLEAR_POINTS;
use super::entity::Sprite;
use super::event::{Events, GameWonEvent, LevelLoadedEvent, PolarityChangedEvent};
use super::levels::{self, LevelError};
use super::platform::Platform;
use super::player::{Movement, Player};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Window close was requested
    pub quit: bool,
    /// Arrow keys held
    pub movement: Movement,
    /// Polarity switch key held
    pub switch_polarity: bool,
}

/// What the loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Normal tick: render and pace
    Continue,
    /// Wrong-polarity hit. The game was reset and this tick draws nothing.
    Reset,
    /// Last level cleared; stop without drawing
    Won,
    /// Close requested; stop without drawing
    Quit,
}

pub struct GameState {
    /// Zero-based index of the active level. Equals the level count once won.
    pub current_level: usize,
    pub score: u32,
    pub running: bool,
    pub player: Player,
    /// Active platforms in authored order
    pub platforms: Vec<Platform>,
    /// Diagnostics produced since the last drain
    pub events: Events,
}

impl GameState {
    /// Fresh game on level 0. `now_ms` starts the player's switch cooldown.
    pub fn new(now_ms: u64) -> Result<Self, LevelError> {
        let mut state = Self {
            current_level: 0,
            score: 0,
            running: true,
            player: Player::new(now_ms),
            platforms: Vec::new(),
            events: Events::new(),
        };
        state.load_level(0)?;
        Ok(state)
    }

    /// Replace the platform set with level `index` and respawn the player.
    /// Does not touch `current_level`; callers set it.
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.platforms = levels::build_platforms(index)?;
        self.player.respawn();
        self.events.level_loaded.send(LevelLoadedEvent { level: index });
        Ok(())
    }

    /// Back to level 0 with no score
    pub fn reset(&mut self) -> Result<(), LevelError> {
        self.score = 0;
        self.current_level = 0;
        self.load_level(0)
    }

    /// Sprites in draw order: the player first, then platforms, so
    /// platforms end up on top where they overlap.
    pub fn draw_order(&self) -> Vec<&dyn Sprite> {
        let mut sprites: Vec<&dyn Sprite> = Vec::with_capacity(self.platforms.len() + 1);
        sprites.push(&self.player);
        sprites.extend(self.platforms.iter().map(|p| p as &dyn Sprite));
        sprites
    }
}

/// Advance the game by one tick.
///
/// Order: quit check, entity update, player move and polarity switch,
/// wrong-polarity reset (which ends the tick), then the level-clear check.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Result<TickOutcome, LevelError> {
    if input.quit {
        state.running = false;
        return Ok(TickOutcome::Quit);
    }

    for platform in &mut state.platforms {
        platform.update();
    }

    state.player.move_by(input.movement);
    if let Some(polarity) = state.player.try_toggle_polarity(input.switch_polarity, now_ms) {
        state.events.polarity_changed.send(PolarityChangedEvent { polarity });
    }

    if state.player.check_wrong_polarity_collision(&state.platforms) {
        state.reset()?;
        return Ok(TickOutcome::Reset);
    }

    // Top edge above the screen clears the level
    if state.player.rect().y < 0.0 {
        state.score += LEVEL_CLEAR_POINTS;
        state.current_level += 1;
        if state.current_level > levels::last_level() {
            state.events.game_won.send(GameWonEvent { score: state.score });
            state.running = false;
            return Ok(TickOutcome::Won);
        }
        state.load_level(state.current_level)?;
    }

    Ok(TickOutcome::Continue)
}
