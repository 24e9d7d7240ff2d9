//! Cards on the table.
//!
//! A `Card` is one grid cell: a stable position id, the symbol printed on
//! its face, and whether it is face down, face up or already matched.

use serde::{Deserialize, Serialize};

use super::palette::Symbol;

/// Grid position of a card, 0-based and row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the position as an index into the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Grid row of this card in a grid `cols` wide.
    ///
    /// ```
    /// use memory_match::cards::CardId;
    ///
    /// assert_eq!(CardId::new(5).row(4), 1);
    /// assert_eq!(CardId::new(5).col(4), 1);
    /// ```
    #[must_use]
    pub const fn row(self, cols: usize) -> usize {
        self.index() / cols
    }

    /// Grid column of this card in a grid `cols` wide.
    #[must_use]
    pub const fn col(self, cols: usize) -> usize {
        self.index() % cols
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Visible state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Hidden and selectable.
    #[default]
    FaceDown,
    /// Revealed as part of the current, unresolved selection.
    FaceUp,
    /// Part of a found pair. Stays revealed for the rest of the game.
    Matched,
}

/// A single card in a session's deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the grid.
    pub id: CardId,
    /// Face symbol; cards with equal symbols match.
    pub symbol: Symbol,
    /// Current visible state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: CardState::FaceDown,
        }
    }

    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.state == CardState::FaceDown
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Whether this card shows the same symbol as `other`.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_row_and_col() {
        let at = |id: u16, cols| (CardId::new(id).row(cols), CardId::new(id).col(cols));

        assert_eq!(at(0, 4), (0, 0));
        assert_eq!(at(3, 4), (0, 3));
        assert_eq!(at(4, 4), (1, 0));
        assert_eq!(at(7, 2), (3, 1));
        assert_eq!(at(99, 10), (9, 9));
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(12)), "Card(12)");
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardId::new(2), Symbol::from("fox.png"));
        assert!(card.is_face_down());
        assert!(!card.is_matched());
        assert_eq!(card.state, CardState::default());
    }

    #[test]
    fn test_matches_compares_symbols() {
        let a = Card::new(CardId::new(0), Symbol::from("🍎"));
        let b = Card::new(CardId::new(7), Symbol::from("🍎"));
        let c = Card::new(CardId::new(3), Symbol::from("🍌"));

        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card {
            id: CardId::new(4),
            symbol: Symbol::from("panda.png"),
            state: CardState::Matched,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"panda.png\""));
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
