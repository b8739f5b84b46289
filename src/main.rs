//! Polarity: a tiny platformer about being the right colour
//!
//! The player is a square that flips between red (positive) and blue
//! (negative). Platforms of the opposite colour are deadly. Climb off the
//! top of the screen to clear a level; touch the wrong colour and it's back
//! to level one with no score.

mod game;
mod input;

use game::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use game::{draw_game, now_ms, tick, FpsLimit, FrameLimiter, GameState, TickOutcome};
use input::InputState;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Polarity Game".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Print queued diagnostics to stdout
fn flush_events(state: &mut GameState) {
    for line in state.events.drain_messages() {
        println!("{}", line);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let input = InputState::new();
    let mut limiter = FrameLimiter::new(FpsLimit::default());

    let mut state = match GameState::new(now_ms()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start game: {}", e);
            return;
        }
    };
    flush_events(&mut state);

    while state.running {
        limiter.begin_frame();

        let outcome = match tick(&mut state, &input.poll(), now_ms()) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Level error: {}", e);
                break;
            }
        };
        flush_events(&mut state);

        match outcome {
            // Reset ticks draw nothing; go straight to the next tick
            TickOutcome::Reset => continue,
            TickOutcome::Won | TickOutcome::Quit => break,
            TickOutcome::Continue => {}
        }

        draw_game(&state);
        limiter.wait();
        next_frame().await;
    }
}
