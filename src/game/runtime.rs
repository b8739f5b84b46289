//! Loop timing
//!
//! The game clock the polarity cooldown reads, and the frame limiter that
//! holds the loop at its target rate.

use macroquad::prelude::get_time;

use super::constants::FPS;

/// Milliseconds since the window opened (monotonic)
pub fn now_ms() -> u64 {
    (get_time() * 1000.0) as u64
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpsLimit {
    /// Fixed rate; 0 means no limit
    Fixed(u32),
}

impl Default for FpsLimit {
    fn default() -> Self {
        FpsLimit::Fixed(FPS)
    }
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = no limit)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fixed(0) => None,
            FpsLimit::Fixed(fps) => Some(1.0 / *fps as f64),
        }
    }
}

/// Blocks at the end of each frame until the frame has taken its share
/// of a second.
#[derive(Debug)]
pub struct FrameLimiter {
    limit: FpsLimit,
    frame_start: f64,
}

impl FrameLimiter {
    pub fn new(limit: FpsLimit) -> Self {
        Self {
            limit,
            frame_start: get_time(),
        }
    }

    /// Mark the start of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = get_time();
    }

    /// Wait out whatever is left of the current frame
    pub fn wait(&self) {
        let Some(target_frame_time) = self.limit.frame_time() else {
            return;
        };
        if target_frame_time - (get_time() - self.frame_start) <= 0.0 {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - self.frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - self.frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: no thread::sleep, the browser paces frames
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - self.frame_start < target_frame_time {}
        }
    }
}
