//! # memory-match
//!
//! A host-independent engine for memory-matching ("concentration") card games.
//!
//! A grid of face-down cards is dealt. A player flips two cards per turn: a
//! match stays revealed, a mismatch is flipped back once the caller
//! acknowledges it, and the game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: Each game is an explicit `GameSession` value.
//!    There is no process-wide state.
//!
//! 2. **Time-Agnostic**: The engine never runs a timer. The display layer's
//!    `Clock` is read once, when the last pair is found.
//!
//! 3. **Explicit Resolution**: A mismatch stays face up until
//!    `acknowledge_mismatch` is called, so the display layer controls how long
//!    both cards are shown.
//!
//! ## Modules
//!
//! - `core`: Configuration, players, session state, RNG, clock, errors
//! - `cards`: Cards, symbols, palettes, dealing
//! - `rules`: `MatchEngine` and the outcomes it reports
//! - `games`: Fruit (single player) and animal (two player) presets

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Clock, ElapsedTime, GameConfig, GameMode, GameRng, GameRngState, GameSession, MatchError,
    Player, PlayerId, PlayerMap, TurnPhase, TurnRecord,
};

pub use crate::cards::{Card, CardId, CardState, Palette, Symbol};

pub use crate::rules::{CompletionReport, GameResult, IgnoreReason, MatchEngine, SelectionOutcome};

pub use crate::games::{AnimalGameBuilder, FruitGameBuilder};
