//! Preset games.
//!
//! - `fruit`: single player, fixed 4x4 grid of fruit emoji
//! - `animals`: two players, configurable grid of animal pictures

pub mod animals;
pub mod fruit;

pub use animals::{animal_palette, AnimalGameBuilder};
pub use fruit::{fruit_palette, FruitGameBuilder};
