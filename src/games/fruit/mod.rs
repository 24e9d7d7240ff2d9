//! Single-player fruit game.
//!
//! Eight fruit emoji dealt as pairs onto a fixed 4x4 grid. One player, no
//! turns; the score is simply how many pairs have been found.

mod game;

pub use game::{fruit_palette, FruitGameBuilder, FRUIT_COLS, FRUIT_ROWS};
