//! Engine error type.
//!
//! Every failure is local and recoverable. The display layer decides what,
//! if anything, to show the player.

use serde::{Deserialize, Serialize};

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum MatchError {
    /// Grid dimensions or palette cannot produce a playable deck.
    #[error("invalid configuration {rows}x{cols}: {reason}")]
    InvalidConfiguration {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Which rule was broken.
        reason: String,
    },
    /// `acknowledge_mismatch` was called with no mismatch on the table.
    #[error("no pending mismatch to acknowledge")]
    NoPendingAcknowledgement,
    /// A selection was attempted after every pair was found.
    #[error("game is already complete")]
    GameAlreadyComplete,
    /// Session state the engine could never have produced, usually from a
    /// hand-edited or truncated save.
    #[error("inconsistent session: {reason}")]
    InconsistentSession {
        /// Which invariant failed.
        reason: String,
    },
}

impl MatchError {
    pub(crate) fn invalid(rows: usize, cols: usize, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            rows,
            cols,
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentSession {
            reason: reason.into(),
        }
    }
}
