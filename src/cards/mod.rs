//! Card system: cards, symbols, palettes and dealing.
//!
//! ## Key Types
//!
//! - `CardId`: Grid position of a card (0-based, row-major)
//! - `Card`: Symbol plus visible state
//! - `Symbol`: Face token shared by the two cards of a pair
//! - `Palette`: Ordered symbol list a deck is dealt from

pub mod card;
pub mod deck;
pub mod palette;

pub use card::{Card, CardId, CardState};
pub use deck::deal;
pub use palette::{Palette, Symbol};
