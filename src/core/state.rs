//! Session state for a single game.
//!
//! ## GameSession
//!
//! Everything one game needs, owned by the caller:
//! - The dealt cards and their visible state
//! - The current (at most two card) selection
//! - Move count, players and scores, whose turn it is
//! - A history of resolved turns
//!
//! Sessions are created by `MatchEngine::new_session` and mutated only
//! through the engine. Read access is open to the display layer.
//!
//! A session read back through serde is checked with `GameSession::validate`
//! before it exists, so the engine only ever sees states it could have made.
//!
//! ## Turn phases
//!
//! `Idle` -> `OneSelected` -> `Resolving` (mismatch on the table) -> `Idle`.
//! A match goes straight back to `Idle`. `Complete` is terminal.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{GameConfig, GameMode};
use super::error::MatchError;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{Card, CardId, CardState};
use crate::rules::{GameResult, IgnoreReason};

/// Where a session is in the flip-resolution cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No unresolved cards face up.
    Idle,
    /// One card face up, waiting for the second.
    OneSelected,
    /// Two mismatched cards face up, waiting for acknowledgement.
    Resolving,
    /// Every card matched. No further selections.
    Complete,
}

/// One resolved pair selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based move number.
    pub move_number: u32,
    /// Who selected the pair.
    pub player: PlayerId,
    /// First and second card, in selection order.
    pub cards: [CardId; 2],
    /// Whether the two cards matched.
    pub matched: bool,
}

/// A single game in progress.
///
/// Uses `im::Vector` for the turn history so cloning a session for undo or
/// what-if play stays cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRepr")]
pub struct GameSession {
    pub(crate) config: GameConfig,

    /// Dealt cards in row-major order; index == `CardId`.
    pub(crate) cards: Vec<Card>,

    /// Face-up, unresolved card ids in selection order.
    pub(crate) selection: SmallVec<[CardId; 2]>,

    /// Completed pair selections.
    pub(crate) move_count: u32,

    pub(crate) players: PlayerMap<Player>,

    pub(crate) active_player: PlayerId,

    /// Cards in `Matched` state.
    pub(crate) matched_count: usize,

    /// Two mismatched cards are face up awaiting acknowledgement.
    pub(crate) pending_mismatch: bool,

    pub(crate) history: Vector<TurnRecord>,
}

impl GameSession {
    /// Create a session over an already dealt deck.
    pub(crate) fn new(config: GameConfig, cards: Vec<Card>) -> Self {
        let players = PlayerMap::with_default(config.player_count());
        Self {
            config,
            cards,
            selection: SmallVec::new(),
            move_count: 0,
            players,
            active_player: PlayerId::new(0),
            matched_count: 0,
            pending_mismatch: false,
            history: Vector::new(),
        }
    }

    /// Check the session is one the engine could have produced.
    ///
    /// Runs automatically on deserialization.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.config.validate()?;

        if self.cards.len() != self.config.card_count() {
            return Err(MatchError::inconsistent(format!(
                "{} cards on a {}x{} grid",
                self.cards.len(),
                self.config.rows,
                self.config.cols
            )));
        }
        if let Some((pos, card)) = self
            .cards
            .iter()
            .enumerate()
            .find(|(pos, card)| card.id.index() != *pos)
        {
            return Err(MatchError::inconsistent(format!(
                "{} found at position {pos}",
                card.id
            )));
        }

        if self.players.player_count() != self.config.player_count() {
            return Err(MatchError::inconsistent(format!(
                "{} player records for {} mode",
                self.players.player_count(),
                self.config.mode
            )));
        }
        if self.players.get(self.active_player).is_none() {
            return Err(MatchError::inconsistent(format!(
                "active player {} is not in the game",
                self.active_player
            )));
        }

        if self.selection.len() > 2 {
            return Err(MatchError::inconsistent("more than two cards selected"));
        }
        for &id in &self.selection {
            match self.card(id).map(|c| c.state) {
                None => {
                    return Err(MatchError::inconsistent(format!(
                        "selected {id} is outside the grid"
                    )));
                }
                Some(CardState::FaceUp) => {}
                Some(_) => {
                    return Err(MatchError::inconsistent(format!(
                        "selected {id} is not face up"
                    )));
                }
            }
        }
        // Also catches the same id selected twice
        let face_up = self.cards.iter().filter(|c| c.state == CardState::FaceUp).count();
        if face_up != self.selection.len() {
            return Err(MatchError::inconsistent(format!(
                "{face_up} cards face up but {} selected",
                self.selection.len()
            )));
        }

        let matched = self.cards.iter().filter(|c| c.is_matched()).count();
        if matched != self.matched_count {
            return Err(MatchError::inconsistent(format!(
                "matched count {} but {matched} cards matched",
                self.matched_count
            )));
        }

        if self.pending_mismatch != (self.selection.len() == 2) {
            return Err(MatchError::inconsistent(
                "a pending mismatch needs exactly two selected cards",
            ));
        }
        Ok(())
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    // === Cards ===

    /// All cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card. `None` for ids outside the grid.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Face-up, unresolved card ids in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Pairs still face down or under selection.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        (self.cards.len() - self.matched_count) / 2
    }

    /// Cards a selection would flip right now.
    #[must_use]
    pub fn selectable_cards(&self) -> Vec<CardId> {
        if self.pending_mismatch || self.is_complete() {
            return vec![];
        }
        self.cards
            .iter()
            .filter(|c| c.is_face_down())
            .map(|c| c.id)
            .collect()
    }

    /// Why selecting `card` would be a no-op, if it would be.
    pub(crate) fn ignore_reason(&self, card: CardId) -> Option<IgnoreReason> {
        if self.pending_mismatch {
            return Some(IgnoreReason::AwaitingAcknowledgement);
        }
        match self.card(card).map(|c| c.state) {
            None => Some(IgnoreReason::UnknownCard),
            Some(CardState::FaceUp) => Some(IgnoreReason::AlreadyFaceUp),
            Some(CardState::Matched) => Some(IgnoreReason::AlreadyMatched),
            Some(CardState::FaceDown) => None,
        }
    }

    // === Turn State ===

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Scores per player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(|p| p.score)
    }

    /// Whose turn it is. Always player 0 in single-player mode.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn has_pending_mismatch(&self) -> bool {
        self.pending_mismatch
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_count == self.cards.len()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_complete() {
            TurnPhase::Complete
        } else if self.pending_mismatch {
            TurnPhase::Resolving
        } else if self.selection.len() == 1 {
            TurnPhase::OneSelected
        } else {
            TurnPhase::Idle
        }
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Results ===

    /// Final result, once every pair is found.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_complete().then(|| self.standing())
    }

    /// Who is ahead right now: the single top scorer, or a draw on a tie.
    #[must_use]
    pub fn standing(&self) -> GameResult {
        let best = self.players.values().map(|p| p.score).max().unwrap_or(0);
        let mut leaders = self.players.iter().filter(|(_, p)| p.score == best);

        match (leaders.next(), leaders.next()) {
            (Some((id, _)), None) => GameResult::Winner(id),
            _ => GameResult::Draw,
        }
    }
}

/// Unchecked wire form of a `GameSession`.
#[derive(Deserialize)]
struct SessionRepr {
    config: GameConfig,
    cards: Vec<Card>,
    selection: SmallVec<[CardId; 2]>,
    move_count: u32,
    players: PlayerMap<Player>,
    active_player: PlayerId,
    matched_count: usize,
    pending_mismatch: bool,
    history: Vector<TurnRecord>,
}

impl TryFrom<SessionRepr> for GameSession {
    type Error = MatchError;

    fn try_from(repr: SessionRepr) -> Result<Self, Self::Error> {
        let session = Self {
            config: repr.config,
            cards: repr.cards,
            selection: repr.selection,
            move_count: repr.move_count,
            players: repr.players,
            active_player: repr.active_player,
            matched_count: repr.matched_count,
            pending_mismatch: repr.pending_mismatch,
            history: repr.history,
        };
        session.validate()?;
        Ok(session)
    }
}
