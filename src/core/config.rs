//! Game configuration types.
//!
//! A game is configured once, at construction:
//! - `DrawMode`: how many cards each stock draw turns over (1 or 3)
//! - `KlondikeConfig`: draw mode plus an optional deal seed

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cards turned over per stock draw. Fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    /// Number of cards moved from stock to waste per draw.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

impl DrawMode {
    /// Draw mode for a user-supplied card count.
    pub fn from_count(count: usize) -> Result<Self, ConfigError> {
        match count {
            1 => Ok(DrawMode::One),
            3 => Ok(DrawMode::Three),
            other => Err(ConfigError::InvalidDrawCount(other)),
        }
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_count(value as usize)
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> u8 {
        mode.count() as u8
    }
}

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Draw count other than 1 or 3.
    InvalidDrawCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDrawCount(n) => write!(f, "draw count must be 1 or 3, got {n}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Stock draw size.
    pub draw: DrawMode,

    /// Deal seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl KlondikeConfig {
    /// Draw-one game with an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw mode.
    #[must_use]
    pub fn with_draw(mut self, draw: DrawMode) -> Self {
        self.draw = draw;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
