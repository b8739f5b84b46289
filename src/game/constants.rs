//! Game constants
//!
//! Screen layout, sizes, timing and colours. Everything here is fixed;
//! the game has no runtime configuration.

use super::entity::Rgb;

/// Window width in logical pixels
pub const SCREEN_WIDTH: f32 = 800.0;

/// Window height in logical pixels
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Target frame rate of the game loop
pub const FPS: u32 = 60;

/// Player square edge length
pub const PLAYER_SIZE: f32 = 50.0;

/// Player movement per tick, per held arrow key
pub const PLAYER_SPEED: f32 = 5.0;

/// Player spawn point (centre of the square)
pub const PLAYER_SPAWN_X: f32 = SCREEN_WIDTH / 2.0;
pub const PLAYER_SPAWN_Y: f32 = SCREEN_HEIGHT - 50.0;

/// Minimum time between two polarity switches (strictly greater than)
pub const POLARITY_COOLDOWN_MS: u64 = 200;

/// Platform dimensions
pub const PLATFORM_WIDTH: f32 = 100.0;
pub const PLATFORM_HEIGHT: f32 = 20.0;

/// Points awarded for clearing a level
pub const LEVEL_CLEAR_POINTS: u32 = 10;

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// HUD text
pub const FONT_SIZE: u16 = 36;
pub const SCORE_TEXT_POS: (f32, f32) = (10.0, 10.0);
pub const LEVEL_TEXT_POS: (f32, f32) = (10.0, 50.0);
pub const INSTRUCTIONS_TEXT_POS: (f32, f32) = (10.0, SCREEN_HEIGHT - 30.0);
pub const INSTRUCTIONS: &str = "Use arrow keys to move, spacebar to switch polarity";
