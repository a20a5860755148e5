//! Game construction: build, shuffle, deal, seat the players.

use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::deck::{create_deck, deal, shuffle_deck};

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 4;

/// Builder for a fresh game.
///
/// Player names and the shuffle seed are optional; missing names fall back to
/// `"Player 1"` .. `"Player 4"`, and a missing seed is drawn from OS entropy.
///
/// ## Example
///
/// ```
/// use treasure_chest::engine::GameBuilder;
///
/// let state = GameBuilder::new()
///     .player_names(["Alice", "Bob"])
///     .seed(42)
///     .build();
///
/// assert_eq!(state.players[0].name, "Alice");
/// assert_eq!(state.players[2].name, "Player 3");
/// assert_eq!(state.total_cards_in_play(), 52);
/// ```
#[derive(Default)]
pub struct GameBuilder {
    names: Vec<String>,
    seed: Option<u64>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply display names, in seat order. At most [`PLAYER_COUNT`] are
    /// used; missing seats get default names.
    #[must_use]
    pub fn player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().take(PLAYER_COUNT).map(Into::into).collect();
        self
    }

    /// Fix the shuffle seed for a reproducible deal.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the initial state: full deck shuffled and dealt 13 cards to each
    /// of the four seats, stage `Player`, no guess in progress.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let deck = create_deck();
        let shuffled = shuffle_deck(&deck, &mut rng);
        let hands = deal(&shuffled, PLAYER_COUNT);

        let players = hands.into_iter().enumerate().map(|(index, cards)| {
            let name = self
                .names
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("Player {}", index + 1));
            Player::with_hand(PlayerId::new(index as u8), name, cards)
        });

        GameState::new(players)
    }
}

/// Start a game with default names and an entropy-seeded shuffle.
#[must_use]
pub fn initialize_game() -> GameState {
    GameBuilder::new().build()
}

/// Start a game with default names and a fixed shuffle seed.
#[must_use]
pub fn initialize_game_seeded(seed: u64) -> GameState {
    GameBuilder::new().seed(seed).build()
}
