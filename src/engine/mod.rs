//! The game engine: construction and the guess-resolution transition.
//!
//! The presentation layer sees exactly two operations: build a game
//! ([`initialize_game`] / [`GameBuilder`]) and advance it one input at a time
//! ([`make_guess`]). Everything else is rendering.

pub mod resolver;
pub mod setup;

pub use resolver::{all_hands_empty, leading_player, make_guess};
pub use setup::{initialize_game, initialize_game_seeded, GameBuilder, PLAYER_COUNT};
