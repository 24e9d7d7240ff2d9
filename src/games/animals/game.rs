//! Animal game setup.

use crate::cards::Palette;
use crate::core::{GameMode, GameSession, MatchError};
use crate::rules::MatchEngine;

const ANIMALS: [&str; 10] = [
    "cat.png",
    "dog.png",
    "elephant.png",
    "fox.png",
    "lion.png",
    "monkey.png",
    "panda.png",
    "rabbit.png",
    "tiger.png",
    "zebra.png",
];

/// The ten animal image names.
#[must_use]
pub fn animal_palette() -> Palette {
    Palette::new(ANIMALS)
}

/// Builder for the animal game.
#[derive(Clone, Debug)]
pub struct AnimalGameBuilder {
    rows: usize,
    cols: usize,
    mode: GameMode,
}

impl Default for AnimalGameBuilder {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            mode: GameMode::TwoPlayer,
        }
    }
}

impl AnimalGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid size. Checked when the game is built.
    pub fn grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Play alone instead of head to head.
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the engine and deal the first session.
    pub fn build(self, seed: u64) -> Result<(MatchEngine, GameSession), MatchError> {
        let mut engine = MatchEngine::new(animal_palette(), seed);
        let session = engine.new_session(self.rows, self.cols, self.mode)?;
        Ok((engine, session))
    }
}
