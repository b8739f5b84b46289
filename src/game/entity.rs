//! Shared sprite capability
//!
//! Player and platforms are both "a coloured rectangle that can be drawn
//! and collided with". Instead of a base class they implement `Sprite`,
//! and the renderer walks an explicit ordered list of `&dyn Sprite`.

use super::rect::Rect;

/// 8-bit RGB fill colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Anything with a bounding box and a fill colour
pub trait Sprite {
    /// Bounding box in screen pixels
    fn rect(&self) -> Rect;

    /// Current fill colour
    fn color(&self) -> Rgb;

    /// Per-tick update. Static sprites keep the default no-op.
    fn update(&mut self) {}

    /// True if this sprite's box overlaps another's
    fn collides_with(&self, other: &dyn Sprite) -> bool {
        self.rect().overlaps(&other.rect())
    }
}
