//! Level registry
//!
//! Levels are hand-authored data: an ordered list of platform layouts.
//! Every level mixes red and blue platforms.

use super::platform::{Platform, PlatformColor};
use super::platform::PlatformColor::{Blue, Red};

/// Where a platform goes and what colour it is (top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub color: PlatformColor,
}

impl PlatformSpec {
    pub const fn new(x: f32, y: f32, color: PlatformColor) -> Self {
        Self { x, y, color }
    }

    pub fn build(&self) -> Platform {
        Platform::new(self.x, self.y, self.color)
    }
}

/// One level layout
pub type LevelSpec = [PlatformSpec; 4];

/// All levels, in play order
pub const LEVELS: [LevelSpec; 3] = [
    [
        PlatformSpec::new(200.0, 500.0, Red),
        PlatformSpec::new(400.0, 400.0, Blue),
        PlatformSpec::new(200.0, 300.0, Red),
        PlatformSpec::new(400.0, 200.0, Blue),
    ],
    [
        PlatformSpec::new(100.0, 500.0, Blue),
        PlatformSpec::new(300.0, 400.0, Red),
        PlatformSpec::new(500.0, 300.0, Blue),
        PlatformSpec::new(300.0, 200.0, Red),
    ],
    [
        PlatformSpec::new(150.0, 500.0, Red),
        PlatformSpec::new(350.0, 400.0, Blue),
        PlatformSpec::new(550.0, 300.0, Red),
        PlatformSpec::new(350.0, 200.0, Blue),
    ],
];

/// Error type for level lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    UnknownLevel(usize),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::UnknownLevel(index) => {
                write!(f, "Unknown level {} (have {})", index, LEVELS.len())
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Index of the final level
pub fn last_level() -> usize {
    LEVELS.len() - 1
}

/// Look up a level layout by index
pub fn level(index: usize) -> Result<&'static LevelSpec, LevelError> {
    LEVELS.get(index).ok_or(LevelError::UnknownLevel(index))
}

/// Build fresh platforms for a level, in authored order
pub fn build_platforms(index: usize) -> Result<Vec<Platform>, LevelError> {
    Ok(level(index)?.iter().map(PlatformSpec::build).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Sprite;

    #[test]
    fn test_level_lookup() {
        assert_eq!(LEVELS.len(), 3);
        assert_eq!(last_level(), 2);
        assert!(level(2).is_ok());
        assert_eq!(level(3), Err(LevelError::UnknownLevel(3)));
    }

    #[test]
    fn test_build_platforms_keeps_order() {
        let platforms = build_platforms(1).unwrap();
        assert_eq!(platforms.len(), 4);
        assert_eq!(platforms[0].rect().x, 100.0);
        assert_eq!(platforms[0].polarity(), Blue.polarity());
        assert_eq!(platforms[3].rect().x, 300.0);
        assert_eq!(platforms[3].rect().y, 200.0);
        assert_eq!(platforms[3].polarity(), Red.polarity());
    }

    #[test]
    fn test_every_level_has_both_colors() {
        for layout in LEVELS.iter() {
            assert!(layout.iter().any(|p| p.color == Red));
            assert!(layout.iter().any(|p| p.color == Blue));
        }
    }
}
