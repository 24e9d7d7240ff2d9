//! Symbols and palettes.
//!
//! A `Palette` is the ordered list of distinct face symbols a game deals
//! from. When a grid needs more pairs than the palette holds, symbols are
//! reused from the start of the list.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Face symbol of a card: an image name, an emoji, or any other token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Symbol {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of symbols to deal pairs from.
///
/// ```
/// use memory_match::cards::{Palette, Symbol};
///
/// let palette = Palette::new(["A", "B", "C"]);
/// let pairs = palette.pair_symbols(5);
/// let names: Vec<_> = pairs.iter().map(Symbol::as_str).collect();
/// assert_eq!(names, ["A", "B", "C", "A", "B"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    symbols: Vec<Symbol>,
}

impl Palette {
    /// Create a palette from any list of tokens.
    ///
    /// Uniqueness is checked when a configuration is validated, not here.
    pub fn new<S: Into<Symbol>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            symbols: tokens.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// First symbol that appears more than once, if any.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<&Symbol> {
        let mut seen = FxHashSet::default();
        self.symbols.iter().find(|s| !seen.insert(*s))
    }

    /// One symbol per pair, cycling through the palette.
    ///
    /// Returns an empty list for an empty palette.
    #[must_use]
    pub fn pair_symbols(&self, pair_count: usize) -> Vec<Symbol> {
        self.symbols.iter().cycle().take(pair_count).cloned().collect()
    }
}
