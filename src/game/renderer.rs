//! Frame rendering
//!
//! Clears to black, draws sprites in the state's draw order and overlays
//! the HUD text. Text positions are the top-left corner of the text box.

use macroquad::prelude::*;

use super::constants::{
    BLACK, FONT_SIZE, INSTRUCTIONS, INSTRUCTIONS_TEXT_POS, LEVEL_TEXT_POS, SCORE_TEXT_POS, WHITE,
};
use super::entity::{Rgb, Sprite};
use super::state::GameState;

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

fn draw_sprite(sprite: &dyn Sprite) {
    let r = sprite.rect();
    draw_rectangle(r.x, r.y, r.w, r.h, to_color(sprite.color()));
}

/// Draw text with its top-left corner at (x, y).
/// macroquad positions text by baseline, so shift down by the ascent.
fn draw_text_top_left(text: &str, (x, y): (f32, f32)) {
    let dims = measure_text(text, None, FONT_SIZE, 1.0);
    draw_text(text, x, y + dims.offset_y, FONT_SIZE as f32, to_color(WHITE));
}

/// Draw one frame of the game
pub fn draw_game(state: &GameState) {
    clear_background(to_color(BLACK));

    for sprite in state.draw_order() {
        draw_sprite(sprite);
    }

    draw_text_top_left(&format!("Score: {}", state.score), SCORE_TEXT_POS);
    draw_text_top_left(&format!("Level: {}", state.current_level + 1), LEVEL_TEXT_POS);
    draw_text_top_left(INSTRUCTIONS, INSTRUCTIONS_TEXT_POS);
}
