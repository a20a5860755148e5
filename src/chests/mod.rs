//! Treasure-chest detection.
//!
//! A chest is a completed set: all four suits of one rank. The detector is a
//! pure scan over a card collection and reports qualifying ranks in
//! enumerated rank order (2, 3, ..., A).

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::card::{Card, Rank, Suit};
use crate::core::player::TreasureChest;

/// Scan `cards` for ranks with all four suits present.
///
/// Returns one chest per qualifying rank, in enumerated rank order. The suit
/// set of each chest lists the distinct suits in the order they were first
/// encountered in the collection. Deck uniqueness means duplicates cannot
/// occur, but the scan only ever records distinct suits regardless.
#[must_use]
pub fn detect_chests<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<TreasureChest> {
    let mut suits_by_rank: FxHashMap<Rank, SmallVec<[Suit; 4]>> = FxHashMap::default();

    for card in cards {
        let suits = suits_by_rank.entry(card.rank).or_default();
        if !suits.contains(&card.suit) {
            suits.push(card.suit);
        }
    }

    Rank::all()
        .filter_map(|rank| {
            let suits = suits_by_rank.remove(&rank)?;
            (suits.len() == 4).then(|| TreasureChest::new(rank, suits))
        })
        .collect()
}
