//! Dealing a shuffled deck.

use super::card::{Card, CardId};
use super::palette::Palette;
use crate::core::GameRng;

/// Deal `pair_count` pairs from `palette`, shuffled and laid out in row-major
/// order.
///
/// Two copies of the pair symbols are concatenated before the shuffle, so
/// every pair slot is backed by exactly two cards.
pub fn deal(palette: &Palette, pair_count: usize, rng: &mut GameRng) -> Vec<Card> {
    let pairs = palette.pair_symbols(pair_count);

    let mut faces = Vec::with_capacity(pairs.len() * 2);
    faces.extend(pairs.iter().cloned());
    faces.extend(pairs);
    rng.shuffle(&mut faces);

    faces
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::new(CardId::new(i as u16), symbol))
        .collect()
}
