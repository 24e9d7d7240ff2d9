//! What a selection did, reported back to the display layer.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{ElapsedTime, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top scorer. Always player 0 in single-player mode.
    Winner(PlayerId),
    /// Tied top score.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A mismatch is on the table and has not been acknowledged.
    AwaitingAcknowledgement,
    /// The card is already part of the current selection.
    AlreadyFaceUp,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// The id is outside the grid.
    UnknownCard,
}

/// Summary handed out when the last pair is found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// The final pair.
    pub cards: [CardId; 2],
    /// Pairs found per player.
    pub scores: PlayerMap<u32>,
    /// Pair selections it took.
    pub move_count: u32,
    /// Read from the caller's clock at completion.
    pub elapsed: ElapsedTime,
    pub result: GameResult,
}

/// Outcome of `MatchEngine::select_card`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// First card of a pair is face up.
    AwaitingSecondCard {
        card: CardId,
    },
    /// The two cards match and stay revealed.
    Matched {
        cards: [CardId; 2],
        /// Who scored the pair.
        player: PlayerId,
    },
    /// The two cards differ. They stay face up until acknowledged.
    Mismatch {
        cards: [CardId; 2],
        /// Whose turn produced the mismatch.
        player: PlayerId,
    },
    /// The final match. Replaces `Matched` for the last pair.
    GameComplete(CompletionReport),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl SelectionOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectionOutcome::Ignored(_))
    }

    /// The pair this outcome resolved, if it resolved one.
    #[must_use]
    pub fn resolved_pair(&self) -> Option<[CardId; 2]> {
        match self {
            SelectionOutcome::Matched { cards, .. } | SelectionOutcome::Mismatch { cards, .. } => {
                Some(*cards)
            }
            SelectionOutcome::GameComplete(report) => Some(report.cards),
            SelectionOutcome::AwaitingSecondCard { .. } | SelectionOutcome::Ignored(_) => None,
        }
    }
}
