//! Fruit game setup.

use crate::cards::Palette;
use crate::core::{GameMode, GameSession, MatchError};
use crate::rules::MatchEngine;

/// Fixed grid height.
pub const FRUIT_ROWS: usize = 4;

/// Fixed grid width.
pub const FRUIT_COLS: usize = 4;

const FRUITS: [&str; 8] = ["🍎", "🍌", "🍇", "🍓", "🍒", "🍍", "🥝", "🍉"];

/// The eight fruit symbols, one pair each on a 4x4 grid.
#[must_use]
pub fn fruit_palette() -> Palette {
    Palette::new(FRUITS)
}

/// Builder for the fruit game.
#[derive(Clone, Debug)]
pub struct FruitGameBuilder {
    palette: Palette,
}

impl Default for FruitGameBuilder {
    fn default() -> Self {
        Self {
            palette: fruit_palette(),
        }
    }
}

impl FruitGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the fruit for another set of at least eight symbols.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Build the engine and deal the first session.
    pub fn build(self, seed: u64) -> Result<(MatchEngine, GameSession), MatchError> {
        let mut engine = MatchEngine::new(self.palette, seed);
        let session = engine.new_session(FRUIT_ROWS, FRUIT_COLS, GameMode::Single)?;
        Ok((engine, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    #[test]
    fn test_fruit_game_creation() {
        let (engine, session) = FruitGameBuilder::new().build(42).unwrap();

        assert_eq!(session.cards().len(), 16);
        assert_eq!(session.mode(), GameMode::Single);
        assert_eq!(session.players().player_count(), 1);
        assert_eq!(engine.palette().len(), 8);

        for fruit in FRUITS {
            let count = session
                .cards()
                .iter()
                .filter(|c| c.symbol == Symbol::from(fruit))
                .count();
            assert_eq!(count, 2, "{fruit} should appear exactly twice");
        }
    }

    #[test]
    fn test_fruit_game_deterministic() {
        let (_, first) = FruitGameBuilder::new().build(12345).unwrap();
        let (_, second) = FruitGameBuilder::new().build(12345).unwrap();
        assert_eq!(first.cards(), second.cards());
    }

    #[test]
    fn test_fruit_game_rejects_duplicate_palette() {
        let result = FruitGameBuilder::new()
            .palette(Palette::new(["x", "x"]))
            .build(1);
        assert!(matches!(result, Err(MatchError::InvalidConfiguration { .. })));
    }
}
