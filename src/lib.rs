//! # treasure-chest
//!
//! Engine for a four-player turn-based card deduction game: players
//! interrogate each other through a multi-step guess protocol (opponent →
//! rank → quantity → suits), win matching cards on an exact call, and retire
//! completed four-suit sets into "treasure chests". The last chest count
//! standing wins.
//!
//! ## Design Principles
//!
//! 1. **Immutable state**: `GameState` is a value. Every transition consumes
//!    the previous state and returns a new one; old states stay valid for
//!    replay and undo. Hands use `im` persistent vectors so the per-turn copy
//!    is O(1) amortized.
//!
//! 2. **Deterministic**: the shuffle is the only randomness and its source is
//!    injectable. A fixed seed plus the same guess sequence reproduces the
//!    entire game.
//!
//! 3. **Tagged input**: each protocol step is a `Guess` variant, not a pile
//!    of optional parameters. A variant that doesn't match the current stage
//!    is ignored, never misread.
//!
//! ## Modules
//!
//! - `core`: cards, players, guess input, state, RNG
//! - `deck`: deck builder, Fisher-Yates shuffler, round-robin dealer
//! - `chests`: completed-set detection
//! - `engine`: game construction and the guess resolver
//!
//! ## Example
//!
//! ```
//! use treasure_chest::{initialize_game_seeded, make_guess, Guess, GuessStage, PlayerId, Rank};
//!
//! let state = initialize_game_seeded(42);
//! let state = make_guess(state, Guess::Opponent(PlayerId::new(1)));
//! assert_eq!(state.stage, GuessStage::Rank);
//!
//! let state = make_guess(state, Guess::Rank(Rank::Seven));
//! // Holds any sevens? On to quantity. Otherwise the guess failed.
//! assert!(matches!(state.stage, GuessStage::Quantity | GuessStage::Complete));
//! ```

pub mod chests;
pub mod core;
pub mod deck;
pub mod engine;

// Re-export the public surface
pub use crate::core::{
    Card, GameRng, GameState, Guess, GuessStage, Player, PlayerId, Rank, Suit, TreasureChest,
    RANKS, SUITS,
};

pub use crate::chests::detect_chests;
pub use crate::deck::{create_deck, deal, shuffle_deck, DECK_SIZE};
pub use crate::engine::{
    all_hands_empty, initialize_game, initialize_game_seeded, leading_player, make_guess,
    GameBuilder, PLAYER_COUNT,
};
