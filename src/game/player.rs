//! The player square
//!
//! Moves with the arrow keys and flips between two polarities. Touching a
//! platform of the opposite polarity is fatal; touching a matching one is
//! harmless.

use super::constants::{
    BLUE, PLAYER_SIZE, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_SPEED, POLARITY_COOLDOWN_MS, RED,
};
use super::entity::{Rgb, Sprite};
use super::platform::Platform;
use super::rect::Rect;

/// Player polarity. Positive is drawn red, Negative blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

impl Polarity {
    pub fn flipped(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }

    /// Fill colour for a player with this polarity
    pub fn rgb(self) -> Rgb {
        match self {
            Polarity::Positive => RED,
            Polarity::Negative => BLUE,
        }
    }

    /// Lowercase name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }

    /// Uppercase colour name used in diagnostics
    pub fn color_name(self) -> &'static str {
        match self {
            Polarity::Positive => "RED",
            Polarity::Negative => "BLUE",
        }
    }
}

/// Arrow keys held this tick. Opposing keys cancel out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Movement {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    rect: Rect,
    /// Pixels per tick
    pub speed: f32,
    polarity: Polarity,
    /// Game clock (ms) of the last switch, or of creation
    last_switch_ms: u64,
}

impl Player {
    /// Spawn a positive player at the spawn point.
    /// `now_ms` starts the switch cooldown.
    pub fn new(now_ms: u64) -> Self {
        Self {
            rect: Rect::centered(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            polarity: Polarity::Positive,
            last_switch_ms: now_ms,
        }
    }

    /// Put the player back at the spawn point. Polarity is kept.
    pub fn respawn(&mut self) {
        self.rect.set_center(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    }

    /// Apply one tick of movement. No clamping: the square may leave the screen.
    pub fn move_by(&mut self, movement: Movement) {
        if movement.left {
            self.rect.translate(-self.speed, 0.0);
        }
        if movement.right {
            self.rect.translate(self.speed, 0.0);
        }
        if movement.up {
            self.rect.translate(0.0, -self.speed);
        }
        if movement.down {
            self.rect.translate(0.0, self.speed);
        }
    }

    /// Flip polarity if the switch is held and the cooldown has elapsed.
    /// Returns the new polarity when a switch happened.
    pub fn try_toggle_polarity(&mut self, switch_held: bool, now_ms: u64) -> Option<Polarity> {
        if !switch_held || now_ms.saturating_sub(self.last_switch_ms) <= POLARITY_COOLDOWN_MS {
            return None;
        }
        self.polarity = self.polarity.flipped();
        self.last_switch_ms = now_ms;
        Some(self.polarity)
    }

    /// True if the player overlaps any platform of the opposite polarity
    pub fn check_wrong_polarity_collision(&self, platforms: &[Platform]) -> bool {
        platforms
            .iter()
            .any(|p| p.polarity() != self.polarity && self.collides_with(p))
    }
}

#[cfg(test)]
impl Player {
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn last_switch_ms(&self) -> u64 {
        self.last_switch_ms
    }

    /// Teleport the top-left corner
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }
}

impl Sprite for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn color(&self) -> Rgb {
        self.polarity.rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::platform::PlatformColor;
    use proptest::prelude::*;

    #[test]
    fn test_spawn() {
        let player = Player::new(0);
        assert_eq!(player.rect(), Rect::new(375.0, 525.0, 50.0, 50.0));
        assert_eq!(player.polarity(), Polarity::Positive);
        assert_eq!(player.color(), RED);
    }

    #[test]
    fn test_move_combines_keys() {
        let mut player = Player::new(0);
        player.move_by(Movement { left: true, up: true, ..Default::default() });
        assert_eq!(player.rect().x, 370.0);
        assert_eq!(player.rect().y, 520.0);

        // Opposing keys cancel
        player.move_by(Movement { left: true, right: true, up: true, down: true });
        assert_eq!(player.rect().x, 370.0);
        assert_eq!(player.rect().y, 520.0);
    }

    #[test]
    fn test_move_is_not_clamped() {
        let mut player = Player::new(0);
        player.set_position(0.0, 0.0);
        player.move_by(Movement { left: true, up: true, ..Default::default() });
        assert_eq!(player.rect().x, -5.0);
        assert_eq!(player.rect().y, -5.0);
    }

    #[test]
    fn test_toggle_cooldown() {
        let mut player = Player::new(0);

        // Exactly at the cooldown is still too early
        assert_eq!(player.try_toggle_polarity(true, 200), None);
        assert_eq!(player.try_toggle_polarity(true, 201), Some(Polarity::Negative));
        assert_eq!(player.color(), BLUE);
        assert_eq!(player.last_switch_ms(), 201);

        // Second attempt inside the window is ignored
        assert_eq!(player.try_toggle_polarity(true, 350), None);
        assert_eq!(player.polarity(), Polarity::Negative);

        assert_eq!(player.try_toggle_polarity(true, 402), Some(Polarity::Positive));
        assert_eq!(player.color(), RED);
    }

    #[test]
    fn test_toggle_needs_input() {
        let mut player = Player::new(0);
        assert_eq!(player.try_toggle_polarity(false, 10_000), None);
        assert_eq!(player.polarity(), Polarity::Positive);
        assert_eq!(player.last_switch_ms(), 0);
    }

    #[test]
    fn test_wrong_polarity_collision() {
        let mut player = Player::new(0);
        let platforms = vec![
            Platform::new(400.0, 400.0, PlatformColor::Blue),
            Platform::new(200.0, 400.0, PlatformColor::Red),
        ];

        // Clear of both
        assert!(!player.check_wrong_polarity_collision(&platforms));

        // Positive on blue is fatal
        player.set_position(410.0, 390.0);
        assert!(player.check_wrong_polarity_collision(&platforms));

        // Positive on red is safe
        player.set_position(210.0, 390.0);
        assert!(!player.check_wrong_polarity_collision(&platforms));

        // Negative on red is fatal
        player.try_toggle_polarity(true, 1000);
        assert!(player.check_wrong_polarity_collision(&platforms));
    }

    #[test]
    fn test_respawn_keeps_polarity() {
        let mut player = Player::new(0);
        player.try_toggle_polarity(true, 500);
        player.set_position(-100.0, -100.0);
        player.respawn();
        assert_eq!(player.rect(), Rect::new(375.0, 525.0, 50.0, 50.0));
        assert_eq!(player.polarity(), Polarity::Negative);
    }

    proptest! {
        #[test]
        fn second_toggle_within_cooldown_is_ignored(first in 201u64..100_000, gap in 0u64..=200) {
            let mut player = Player::new(0);
            prop_assert_eq!(player.try_toggle_polarity(true, first), Some(Polarity::Negative));
            prop_assert_eq!(player.try_toggle_polarity(true, first + gap), None);
            prop_assert_eq!(player.polarity(), Polarity::Negative);
        }

        #[test]
        fn toggle_after_cooldown_flips(first in 201u64..100_000, gap in 201u64..10_000) {
            let mut player = Player::new(0);
            player.try_toggle_polarity(true, first);
            prop_assert_eq!(player.try_toggle_polarity(true, first + gap), Some(Polarity::Positive));
        }
    }
}
