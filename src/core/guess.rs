//! Guess input: one tagged value per protocol step.
//!
//! The UI collects one piece of the guess at a time; each piece is a `Guess`
//! variant. The variant must match the current [`GuessStage`]; a mismatched
//! variant is ignored by the resolver (the state comes back unchanged), so
//! there is no "wrong field for the current stage" ambiguity.
//!
//! [`GuessStage`]: super::state::GuessStage

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Rank, Suit};
use super::player::PlayerId;

/// One step of guess input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    /// Select the opponent to interrogate (stage `Player`).
    Opponent(PlayerId),
    /// Guess that the opponent holds at least one card of this rank (stage `Rank`).
    Rank(Rank),
    /// Guess exactly how many cards of the guessed rank the opponent holds,
    /// 1 through 4 (stage `Quantity`).
    Quantity(u8),
    /// Guess which suits those cards are; one suit per guessed card
    /// (stage `Suit`).
    Suits(SmallVec<[Suit; 4]>),
    /// Acknowledge the outcome and start the next guess cycle
    /// (stage `Complete`).
    Advance,
}

impl Guess {
    /// Convenience constructor for a suit guess.
    #[must_use]
    pub fn suits(suits: impl IntoIterator<Item = Suit>) -> Self {
        Guess::Suits(suits.into_iter().collect())
    }
}
