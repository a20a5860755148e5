//! Deck construction, shuffling, and dealing.
//!
//! - [`create_deck`] builds the canonical 52-card enumeration.
//! - [`shuffle_deck`] is a Fisher-Yates permutation driven by an injected
//!   [`GameRng`], so shuffles are seedable and replayable.
//! - [`deal`] splits a (shuffled) deck round-robin into N hands.
//!
//! All three are pure with respect to their inputs; the shuffler copies.

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Build the canonical 52-card deck: every (rank, suit) pair exactly once.
///
/// Rank varies fastest within each suit. The order carries no meaning beyond
/// giving the shuffler a stable enumeration.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::all() {
        for rank in Rank::all() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Return a uniformly random permutation of `deck`.
///
/// Fisher-Yates from the last index down to 1, drawing a uniform index in
/// `[0, i]` at each step. The input is not mutated.
#[must_use]
pub fn shuffle_deck(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Deal `deck` round-robin into `num_hands` hands.
///
/// The card at position `k` goes to hand `k mod num_hands`, so remainder
/// cards land in the lowest-indexed hands. Works for any deck length.
#[must_use]
pub fn deal(deck: &[Card], num_hands: usize) -> Vec<Vec<Card>> {
    assert!(num_hands > 0, "Must deal to at least 1 hand");

    let mut hands: Vec<Vec<Card>> = (0..num_hands)
        .map(|_| Vec::with_capacity(deck.len() / num_hands + 1))
        .collect();

    for (k, card) in deck.iter().enumerate() {
        hands[k % num_hands].push(*card);
    }

    hands
}
