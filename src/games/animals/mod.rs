//! Two-player animal game.
//!
//! Players pick the grid (2-10 per side, even total). Animal pictures are
//! reused from the start of the list when the grid needs more than ten pairs.
//! A match keeps the turn; an acknowledged mismatch passes it.

mod game;

pub use game::{animal_palette, AnimalGameBuilder};
