//! Game configuration types.
//!
//! A game is configured by:
//! - grid dimensions (`rows` x `cols`)
//! - a `GameMode` deciding how many players take turns
//! - the `Palette` the deck is dealt from
//!
//! `GameConfig::validate` is the single gate every new session passes.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use crate::cards::Palette;

/// Smallest allowed grid side.
pub const MIN_GRID_SIDE: usize = 2;

/// Largest allowed grid side.
pub const MAX_GRID_SIDE: usize = 10;

/// How long a display layer keeps a mismatched pair visible before calling
/// `acknowledge_mismatch`, when it wants to emulate an automatic flip-back.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(1000);

/// Pause between the last match and the completion celebration.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(500);

/// Who is playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One player, no turn switching.
    #[default]
    #[serde(rename = "single")]
    Single,
    /// Two players alternating on every mismatch.
    #[serde(rename = "two-player")]
    TwoPlayer,
}

impl GameMode {
    /// Number of player records a session in this mode carries.
    #[must_use]
    pub const fn player_count(self) -> usize {
        match self {
            GameMode::Single => 1,
            GameMode::TwoPlayer => 2,
        }
    }

    #[must_use]
    pub const fn is_multiplayer(self) -> bool {
        matches!(self, GameMode::TwoPlayer)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameMode::Single => "single",
            GameMode::TwoPlayer => "two-player",
        })
    }
}

/// Error from parsing a `GameMode`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode {0:?} (expected \"single\" or \"two-player\")")]
pub struct ParseGameModeError(pub String);

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" => Ok(GameMode::Single),
            "two-player" | "two_player" | "2" => Ok(GameMode::TwoPlayer),
            _ => Err(ParseGameModeError(s.to_string())),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub cols: usize,

    /// Single player or two players.
    pub mode: GameMode,

    /// Symbols to deal pairs from.
    pub palette: Palette,
}

impl GameConfig {
    /// Create a new configuration. Call `validate` before dealing.
    pub fn new(rows: usize, cols: usize, mode: GameMode, palette: Palette) -> Self {
        Self {
            rows,
            cols,
            mode,
            palette,
        }
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Total number of cards on the grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of pairs to deal.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.mode.player_count()
    }

    /// Check the grid and palette can produce a playable deck.
    pub fn validate(&self) -> Result<(), MatchError> {
        let (rows, cols) = (self.rows, self.cols);
        let bounds = MIN_GRID_SIDE..=MAX_GRID_SIDE;

        if !bounds.contains(&rows) || !bounds.contains(&cols) {
            return Err(MatchError::invalid(
                rows,
                cols,
                format!("rows and columns must be between {MIN_GRID_SIDE} and {MAX_GRID_SIDE}"),
            ));
        }
        if self.card_count() % 2 != 0 {
            return Err(MatchError::invalid(rows, cols, "total card count must be even"));
        }
        if self.palette.is_empty() {
            return Err(MatchError::invalid(rows, cols, "palette has no symbols"));
        }
        if let Some(dup) = self.palette.first_duplicate() {
            return Err(MatchError::invalid(
                rows,
                cols,
                format!("palette symbol {dup:?} appears more than once"),
            ));
        }
        Ok(())
    }
}
