//! The root game-state aggregate.
//!
//! `GameState` is an immutable value: every transition consumes the previous
//! state and produces a wholly new one. There is no mutation API on shared
//! state, which makes replay and undo trivial: keep the old values around.
//! Player hands and chest piles are `im` vectors, so the per-transition copy
//! is O(1) amortized.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Rank, Suit};
use super::player::{Player, PlayerId};

/// The current step of the multi-part guess protocol.
///
/// Stages cycle `Player → Rank → Quantity → Suit → Complete → Player`, with
/// early exits to `Complete` on a wrong rank or quantity guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessStage {
    /// Choosing which opponent to interrogate.
    Player,
    /// Guessing a rank the opponent holds.
    Rank,
    /// Guessing exactly how many cards of that rank they hold.
    Quantity,
    /// Guessing the suits of those cards.
    Suit,
    /// Guess resolved; awaiting acknowledgement to start the next cycle.
    Complete,
}

/// The root aggregate: players, whose turn it is, and the partial guess
/// accumulated across stages.
///
/// Created once per game by [`initialize_game`] and thereafter replaced
/// wholesale by [`make_guess`]; neither function mutates a state in place.
///
/// [`initialize_game`]: crate::engine::initialize_game
/// [`make_guess`]: crate::engine::make_guess
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed-size ordered seat list; indices are stable for the game's lifetime.
    pub players: Vector<Player>,

    /// Whose turn is active.
    pub current_player: PlayerId,

    /// Opponent currently targeted mid-guess. Set by the `Player` stage,
    /// cleared on `Advance`.
    pub selected_player: Option<PlayerId>,

    /// Current protocol step.
    pub stage: GuessStage,

    /// Rank guessed this cycle, once the `Rank` stage has consumed input.
    pub guessed_rank: Option<Rank>,

    /// Quantity guessed this cycle, once the `Quantity` stage has consumed input.
    pub guessed_quantity: Option<u8>,

    /// Suits guessed this cycle, once the `Suit` stage has consumed input.
    pub guessed_suits: Option<SmallVec<[Suit; 4]>>,

    /// Outcome of the most recently completed guess sequence.
    pub last_guess_correct: Option<bool>,

    /// Set once all cards have migrated into treasure chests; never unset.
    pub game_over: bool,

    /// Winning player, set together with `game_over`.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Create a fresh state at stage `Player` with no guess in progress.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
            current_player: PlayerId::new(0),
            selected_player: None,
            stage: GuessStage::Player,
            guessed_rank: None,
            guessed_quantity: None,
            guessed_suits: None,
            last_guess_correct: None,
            game_over: false,
            winner: None,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn is active.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player.index()]
    }

    /// The player at the given seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Total cards still held in hands across all players.
    ///
    /// Zero means every card has been retired into a chest and the game is
    /// over.
    #[must_use]
    pub fn total_cards_in_play(&self) -> usize {
        self.players.iter().map(|p| p.cards.len()).sum()
    }

    /// New state with one seat replaced.
    #[must_use]
    pub(crate) fn with_player(&self, player: Player) -> Self {
        let mut players = self.players.clone();
        players.set(player.id.index(), player);
        Self { players, ..self.clone() }
    }
}
