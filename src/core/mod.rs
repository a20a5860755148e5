//! Core value types: cards, players, guess input, state, RNG.
//!
//! Everything here is an immutable value; card movement and state transitions
//! live in `deck`, `chests`, and `engine`.

pub mod card;
pub mod guess;
pub mod player;
pub mod rng;
pub mod state;

pub use card::{Card, Rank, Suit, RANKS, SUITS};
pub use guess::Guess;
pub use player::{Player, PlayerId, TreasureChest};
pub use rng::GameRng;
pub use state::{GameState, GuessStage};
