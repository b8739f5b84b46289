//! Static platforms

use super::constants::{BLUE, PLATFORM_HEIGHT, PLATFORM_WIDTH, RED};
use super::entity::{Rgb, Sprite};
use super::player::Polarity;
use super::rect::Rect;

/// Platform colour. Each colour belongs to one polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformColor {
    Red,
    Blue,
}

impl PlatformColor {
    /// Polarity this colour stands for
    pub fn polarity(self) -> Polarity {
        match self {
            PlatformColor::Red => Polarity::Positive,
            PlatformColor::Blue => Polarity::Negative,
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            PlatformColor::Red => RED,
            PlatformColor::Blue => BLUE,
        }
    }
}

/// A fixed obstacle. Colour and position never change once built;
/// a level load replaces the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    rect: Rect,
    color: PlatformColor,
}

impl Platform {
    /// Build a platform with its top-left corner at (x, y)
    pub fn new(x: f32, y: f32, color: PlatformColor) -> Self {
        Self {
            rect: Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            color,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.color.polarity()
    }
}

impl Sprite for Platform {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn color(&self) -> Rgb {
        self.color.rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_polarity_mapping() {
        assert_eq!(PlatformColor::Red.polarity(), Polarity::Positive);
        assert_eq!(PlatformColor::Blue.polarity(), Polarity::Negative);
        assert_eq!(PlatformColor::Red.rgb(), RED);
        assert_eq!(PlatformColor::Blue.rgb(), BLUE);
    }

    #[test]
    fn test_platform_geometry() {
        let p = Platform::new(200.0, 500.0, PlatformColor::Red);
        assert_eq!(p.rect(), Rect::new(200.0, 500.0, 100.0, 20.0));
        assert_eq!(p.color(), RED);
    }

    #[test]
    fn test_update_is_noop() {
        let mut p = Platform::new(400.0, 400.0, PlatformColor::Blue);
        let before = p.clone();
        p.update();
        assert_eq!(p, before);
    }
}
