//! The match engine.
//!
//! `MatchEngine` deals sessions and drives the flip-resolution state machine:
//!
//! - `new_session`: validate the grid, deal and shuffle a deck
//! - `select_card`: flip a card; on the second flip, resolve match or mismatch
//! - `acknowledge_mismatch`: hide a displayed mismatch and pass the turn
//! - `restart`: throw a session away and deal a new one
//!
//! Every call completes synchronously. The engine keeps no per-game state;
//! the caller owns each `GameSession`.

use tracing::{debug, info, trace};

use super::outcome::{CompletionReport, SelectionOutcome};
use crate::cards::{deal, CardId, CardState, Palette};
use crate::core::{
    Clock, ElapsedTime, GameConfig, GameMode, GameRng, GameRngState, GameSession, MatchError,
    TurnRecord,
};

/// Deals sessions from a palette and resolves selections.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::{GameMode, MatchEngine, Palette, SelectionOutcome};
///
/// let mut engine = MatchEngine::new(Palette::new(["A", "B"]), 42);
/// let mut session = engine.new_session(2, 2, GameMode::Single).unwrap();
///
/// let first = session.cards()[0].id;
/// let outcome = engine.select_card(&mut session, first, Duration::ZERO).unwrap();
/// assert!(matches!(outcome, SelectionOutcome::AwaitingSecondCard { .. }));
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    palette: Palette,
    rng: GameRng,
}

impl MatchEngine {
    /// Create an engine with a seeded RNG. Same seed, same sequence of deals.
    #[must_use]
    pub fn new(palette: Palette, seed: u64) -> Self {
        Self {
            palette,
            rng: GameRng::new(seed),
        }
    }

    /// Create an engine with an entropy-seeded RNG.
    #[must_use]
    pub fn from_entropy(palette: Palette) -> Self {
        Self {
            palette,
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume an engine whose RNG state was saved earlier.
    #[must_use]
    pub fn from_rng_state(palette: Palette, state: &GameRngState) -> Self {
        Self {
            palette,
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current RNG state, for reproducing the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Sessions ===

    /// Deal a new session over this engine's palette.
    pub fn new_session(
        &mut self,
        rows: usize,
        cols: usize,
        mode: GameMode,
    ) -> Result<GameSession, MatchError> {
        let config = GameConfig::new(rows, cols, mode, self.palette.clone());
        self.new_session_with(config)
    }

    /// Deal a new session from a full configuration, palette included.
    pub fn new_session_with(&mut self, config: GameConfig) -> Result<GameSession, MatchError> {
        config.validate()?;

        let cards = deal(&config.palette, config.pair_count(), &mut self.rng);
        debug!(
            rows = config.rows,
            cols = config.cols,
            mode = %config.mode,
            cards = cards.len(),
            "dealt new session"
        );

        Ok(GameSession::new(config, cards))
    }

    /// Discard `session` and deal a fresh one.
    pub fn restart(
        &mut self,
        session: GameSession,
        rows: usize,
        cols: usize,
        mode: GameMode,
    ) -> Result<GameSession, MatchError> {
        debug!(
            moves = session.move_count(),
            matched = session.matched_count(),
            "restarting session"
        );
        drop(session);
        self.new_session(rows, cols, mode)
    }

    // === Turns ===

    /// Flip `card` and, if it is the second of a pair, resolve the pair.
    ///
    /// `clock` is read only when this selection completes the game.
    ///
    /// Fails with `GameAlreadyComplete` once every pair is found. Selections
    /// that cannot flip anything return `Ignored` and leave the session as is.
    pub fn select_card<C: Clock>(
        &self,
        session: &mut GameSession,
        card: CardId,
        clock: C,
    ) -> Result<SelectionOutcome, MatchError> {
        if session.is_complete() {
            return Err(MatchError::GameAlreadyComplete);
        }
        if let Some(reason) = session.ignore_reason(card) {
            trace!(%card, ?reason, "selection ignored");
            return Ok(SelectionOutcome::Ignored(reason));
        }

        session.cards[card.index()].state = CardState::FaceUp;
        session.selection.push(card);
        let cols = session.cols();
        trace!(%card, row = card.row(cols), col = card.col(cols), "card flipped");

        let cards = match session.selection[..] {
            [first, second] => [first, second],
            _ => return Ok(SelectionOutcome::AwaitingSecondCard { card }),
        };

        session.move_count += 1;
        let player = session.active_player;
        let [first, second] = cards;
        let matched = session.cards[first.index()].matches(&session.cards[second.index()]);

        session.history.push_back(TurnRecord {
            move_number: session.move_count,
            player,
            cards,
            matched,
        });

        if !matched {
            session.pending_mismatch = true;
            debug!(%first, %second, %player, "mismatch");
            return Ok(SelectionOutcome::Mismatch { cards, player });
        }

        for id in cards {
            session.cards[id.index()].state = CardState::Matched;
        }
        session.matched_count += 2;
        session.selection.clear();
        session.players[player].score += 1;
        debug!(%first, %second, %player, "pair matched");

        if !session.is_complete() {
            return Ok(SelectionOutcome::Matched { cards, player });
        }

        let report = CompletionReport {
            cards,
            scores: session.scores(),
            move_count: session.move_count,
            elapsed: ElapsedTime::from(clock.elapsed()),
            result: session.standing(),
        };
        info!(
            moves = report.move_count,
            elapsed = %report.elapsed,
            scores = ?report.scores,
            result = ?report.result,
            "game complete"
        );
        Ok(SelectionOutcome::GameComplete(report))
    }

    /// Flip a displayed mismatch back face down and pass the turn.
    ///
    /// Fails with `NoPendingAcknowledgement` unless the last selection was a
    /// mismatch that has not been acknowledged yet.
    pub fn acknowledge_mismatch(&self, session: &mut GameSession) -> Result<(), MatchError> {
        if !session.pending_mismatch {
            return Err(MatchError::NoPendingAcknowledgement);
        }

        for id in session.selection.drain(..) {
            session.cards[id.index()].state = CardState::FaceDown;
        }
        session.pending_mismatch = false;

        if session.mode().is_multiplayer() {
            session.active_player = session.active_player.next(session.players.player_count());
        }
        debug!(next = %session.active_player, "mismatch acknowledged");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;
    use crate::core::{PlayerId, TurnPhase};
    use crate::rules::{GameResult, IgnoreReason};
    use std::time::Duration;

    fn engine() -> MatchEngine {
        MatchEngine::new(Palette::new(["A", "B", "C", "D", "E", "F", "G", "H"]), 7)
    }

    /// Ids of the cards showing `symbol`.
    fn ids_of(session: &GameSession, symbol: &str) -> Vec<CardId> {
        session
            .cards()
            .iter()
            .filter(|c| c.symbol == Symbol::from(symbol))
            .map(|c| c.id)
            .collect()
    }

    /// A pair of cards with different symbols.
    fn mismatched_pair(session: &GameSession) -> [CardId; 2] {
        let first = &session.cards()[0];
        let second = session
            .cards()
            .iter()
            .find(|c| !c.matches(first))
            .unwrap();
        [first.id, second.id]
    }

    #[test]
    fn test_new_session_validates() {
        let mut engine = engine();

        assert!(matches!(
            engine.new_session(1, 4, GameMode::Single),
            Err(MatchError::InvalidConfiguration { rows: 1, cols: 4, .. })
        ));
        assert!(matches!(
            engine.new_session(3, 3, GameMode::Single),
            Err(MatchError::InvalidConfiguration { rows: 3, cols: 3, .. })
        ));
        assert!(engine.new_session(3, 4, GameMode::TwoPlayer).is_ok());
    }

    #[test]
    fn test_new_session_with_custom_palette() {
        let mut engine = engine();
        let config = GameConfig::new(2, 3, GameMode::Single, Palette::new(["x", "y", "z"]));

        let session = engine.new_session_with(config).unwrap();

        assert_eq!(ids_of(&session, "x").len(), 2);
        assert_eq!(ids_of(&session, "y").len(), 2);
        assert_eq!(ids_of(&session, "z").len(), 2);
    }

    #[test]
    fn test_first_selection_awaits_second() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::Single).unwrap();
        let card = CardId::new(5);

        let outcome = engine.select_card(&mut session, card, Duration::ZERO).unwrap();

        assert_eq!(outcome, SelectionOutcome::AwaitingSecondCard { card });
        assert_eq!(session.card(card).unwrap().state, CardState::FaceUp);
        assert_eq!(session.selection(), &[card]);
        assert_eq!(session.phase(), TurnPhase::OneSelected);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_same_card_twice_is_ignored() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::Single).unwrap();
        let card = CardId::new(0);

        engine.select_card(&mut session, card, Duration::ZERO).unwrap();
        let repeat = engine.select_card(&mut session, card, Duration::ZERO).unwrap();

        assert_eq!(repeat, SelectionOutcome::Ignored(IgnoreReason::AlreadyFaceUp));
        assert_eq!(session.selection(), &[card]);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut engine = engine();
        let mut session = engine.new_session(2, 2, GameMode::Single).unwrap();
        let before = session.clone();

        let outcome = engine.select_card(&mut session, CardId::new(4), Duration::ZERO).unwrap();

        assert_eq!(outcome, SelectionOutcome::Ignored(IgnoreReason::UnknownCard));
        assert_eq!(session, before);
    }

    #[test]
    fn test_match_keeps_turn() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::TwoPlayer).unwrap();
        let pair = ids_of(&session, "A");

        engine.select_card(&mut session, pair[0], Duration::ZERO).unwrap();
        let outcome = engine.select_card(&mut session, pair[1], Duration::ZERO).unwrap();

        assert_eq!(
            outcome,
            SelectionOutcome::Matched {
                cards: [pair[0], pair[1]],
                player: PlayerId::new(0),
            }
        );
        assert!(session.card(pair[0]).unwrap().is_matched());
        assert!(session.card(pair[1]).unwrap().is_matched());
        assert_eq!(session.matched_count(), 2);
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.active_player(), PlayerId::new(0));
        assert_eq!(session.players()[PlayerId::new(0)].score, 1);
        assert!(session.selection().is_empty());
        assert_eq!(session.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_mismatch_blocks_until_acknowledged() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::TwoPlayer).unwrap();
        let [a, b] = mismatched_pair(&session);

        engine.select_card(&mut session, a, Duration::ZERO).unwrap();
        let outcome = engine.select_card(&mut session, b, Duration::ZERO).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Mismatch {
                cards: [a, b],
                player: PlayerId::new(0),
            }
        );
        assert_eq!(session.phase(), TurnPhase::Resolving);
        assert_eq!(session.move_count(), 1);

        // Any third card is ignored while the mismatch is on the table
        let third = session.selectable_cards().first().copied();
        assert!(third.is_none());
        let blocked = engine
            .select_card(&mut session, CardId::new(15), Duration::ZERO)
            .unwrap();
        assert_eq!(blocked, SelectionOutcome::Ignored(IgnoreReason::AwaitingAcknowledgement));

        engine.acknowledge_mismatch(&mut session).unwrap();

        assert!(session.card(a).unwrap().is_face_down());
        assert!(session.card(b).unwrap().is_face_down());
        assert!(session.selection().is_empty());
        assert_eq!(session.active_player(), PlayerId::new(1));
        assert_eq!(session.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_acknowledge_without_mismatch_fails() {
        let mut engine = engine();
        let mut session = engine.new_session(2, 2, GameMode::TwoPlayer).unwrap();

        assert_eq!(
            engine.acknowledge_mismatch(&mut session),
            Err(MatchError::NoPendingAcknowledgement)
        );

        engine.select_card(&mut session, CardId::new(0), Duration::ZERO).unwrap();
        let before = session.clone();
        assert_eq!(
            engine.acknowledge_mismatch(&mut session),
            Err(MatchError::NoPendingAcknowledgement)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_single_player_turn_never_moves() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::Single).unwrap();
        let [a, b] = mismatched_pair(&session);

        engine.select_card(&mut session, a, Duration::ZERO).unwrap();
        engine.select_card(&mut session, b, Duration::ZERO).unwrap();
        engine.acknowledge_mismatch(&mut session).unwrap();

        assert_eq!(session.active_player(), PlayerId::new(0));
    }

    #[test]
    fn test_complete_game_and_after() {
        let mut engine = MatchEngine::new(Palette::new(["A", "B"]), 3);
        let mut session = engine.new_session(2, 2, GameMode::Single).unwrap();
        let a = ids_of(&session, "A");
        let b = ids_of(&session, "B");

        engine.select_card(&mut session, a[0], Duration::ZERO).unwrap();
        let first = engine.select_card(&mut session, a[1], Duration::ZERO).unwrap();
        assert!(matches!(first, SelectionOutcome::Matched { .. }));

        engine.select_card(&mut session, b[0], Duration::ZERO).unwrap();
        let last = engine
            .select_card(&mut session, b[1], Duration::from_secs(65))
            .unwrap();

        let SelectionOutcome::GameComplete(report) = &last else {
            panic!("expected completion, got {last:?}");
        };
        assert_eq!(report.move_count, 2);
        assert_eq!(report.cards, [b[0], b[1]]);
        assert_eq!(report.scores[PlayerId::new(0)], 2);
        assert_eq!(report.elapsed.to_string(), "1:05");
        assert_eq!(report.result, GameResult::Winner(PlayerId::new(0)));
        assert_eq!(session.phase(), TurnPhase::Complete);

        let before = session.clone();
        assert_eq!(
            engine.select_card(&mut session, a[0], Duration::ZERO),
            Err(MatchError::GameAlreadyComplete)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_history_records_turns() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::TwoPlayer).unwrap();
        let [a, b] = mismatched_pair(&session);

        engine.select_card(&mut session, a, Duration::ZERO).unwrap();
        engine.select_card(&mut session, b, Duration::ZERO).unwrap();
        engine.acknowledge_mismatch(&mut session).unwrap();

        let pair = ids_of(&session, "C");
        engine.select_card(&mut session, pair[0], Duration::ZERO).unwrap();
        engine.select_card(&mut session, pair[1], Duration::ZERO).unwrap();

        let history: Vec<_> = session.history().iter().copied().collect();
        assert_eq!(
            history,
            vec![
                TurnRecord {
                    move_number: 1,
                    player: PlayerId::new(0),
                    cards: [a, b],
                    matched: false,
                },
                TurnRecord {
                    move_number: 2,
                    player: PlayerId::new(1),
                    cards: [pair[0], pair[1]],
                    matched: true,
                },
            ]
        );
    }

    #[test]
    fn test_restart_deals_fresh_session() {
        let mut engine = engine();
        let mut session = engine.new_session(4, 4, GameMode::Single).unwrap();
        engine.select_card(&mut session, CardId::new(0), Duration::ZERO).unwrap();

        let fresh = engine.restart(session, 2, 4, GameMode::TwoPlayer).unwrap();

        assert_eq!(fresh.cards().len(), 8);
        assert_eq!(fresh.mode(), GameMode::TwoPlayer);
        assert_eq!(fresh.phase(), TurnPhase::Idle);
        assert!(fresh.cards().iter().all(|c| c.is_face_down()));

        let session = fresh;
        assert!(engine.restart(session, 3, 3, GameMode::Single).is_err());
    }

    #[test]
    fn test_rng_state_reproduces_deal() {
        let mut engine = engine();
        engine.new_session(4, 4, GameMode::Single).unwrap();

        let saved = engine.rng_state();
        let next = engine.new_session(4, 4, GameMode::Single).unwrap();

        let mut resumed = MatchEngine::from_rng_state(engine.palette().clone(), &saved);
        let replay = resumed.new_session(4, 4, GameMode::Single).unwrap();

        assert_eq!(next.cards(), replay.cards());
    }
}
