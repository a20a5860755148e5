//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 0-based seat indices, stable for the
//! lifetime of a game.
//!
//! ## Player
//!
//! A player's hand and treasure-chest pile. All card movement goes through
//! pure helpers that return a new `Player` value; nothing mutates in place.
//! Hands use `im::Vector` so the whole-state copy made on every transition
//! is O(1) amortized.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};

/// Player identifier. 0-based seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A completed set: all four suits of one rank, retired from active play.
///
/// Suits are the distinct suits present for the rank, in the order they were
/// first encountered in the hand. `SmallVec` keeps the set inline (always 4
/// entries for a formed chest).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureChest {
    pub rank: Rank,
    pub suits: SmallVec<[Suit; 4]>,
}

impl TreasureChest {
    /// Create a chest record.
    #[must_use]
    pub fn new(rank: Rank, suits: SmallVec<[Suit; 4]>) -> Self {
        Self { rank, suits }
    }
}

/// A player: seat id, display name, current hand, and completed chests.
///
/// Chests are append-only; insertion order is completion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub cards: Vector<Card>,
    pub treasure_chests: Vector<TreasureChest>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vector::new(),
            treasure_chests: Vector::new(),
        }
    }

    /// Create a player with a starting hand.
    #[must_use]
    pub fn with_hand(
        id: PlayerId,
        name: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cards: cards.into_iter().collect(),
            treasure_chests: Vector::new(),
        }
    }

    /// Number of cards of `rank` currently held.
    #[must_use]
    pub fn count_of_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    /// Does this player hold at least one card of `rank`?
    #[must_use]
    pub fn holds_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank == rank)
    }

    /// The card of (`rank`, `suit`), if held. At most one exists.
    #[must_use]
    pub fn card_of(&self, rank: Rank, suit: Suit) -> Option<Card> {
        self.cards.iter().copied().find(|c| c.rank == rank && c.suit == suit)
    }

    /// Has a chest for `rank` already been formed?
    #[must_use]
    pub fn has_chest_for(&self, rank: Rank) -> bool {
        self.treasure_chests.iter().any(|chest| chest.rank == rank)
    }

    /// New player value with the given cards removed from the hand.
    #[must_use]
    pub fn without_cards(&self, cards_to_remove: &[Card]) -> Self {
        let cards = self
            .cards
            .iter()
            .copied()
            .filter(|card| !cards_to_remove.contains(card))
            .collect();
        Self { cards, ..self.clone() }
    }

    /// New player value with the given cards appended to the hand.
    #[must_use]
    pub fn with_cards(&self, cards_to_add: &[Card]) -> Self {
        let mut cards = self.cards.clone();
        cards.extend(cards_to_add.iter().copied());
        Self { cards, ..self.clone() }
    }

    /// New player value with a chest appended to the pile.
    #[must_use]
    pub fn with_chest(&self, chest: TreasureChest) -> Self {
        let mut treasure_chests = self.treasure_chests.clone();
        treasure_chests.push_back(chest);
        Self { treasure_chests, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{p0}"), "Player 0");

        let all: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(all, vec![PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)]);
    }

    #[test]
    fn test_count_of_rank() {
        let player = Player::with_hand(
            PlayerId::new(0),
            "Alice",
            [
                card(Rank::Seven, Suit::Hearts),
                card(Rank::Seven, Suit::Spades),
                card(Rank::King, Suit::Clubs),
            ],
        );

        assert_eq!(player.count_of_rank(Rank::Seven), 2);
        assert_eq!(player.count_of_rank(Rank::King), 1);
        assert_eq!(player.count_of_rank(Rank::Ace), 0);
        assert!(player.holds_rank(Rank::Seven));
        assert!(!player.holds_rank(Rank::Two));
    }

    #[test]
    fn test_card_of() {
        let player = Player::with_hand(
            PlayerId::new(1),
            "Bob",
            [card(Rank::Nine, Suit::Diamonds)],
        );

        assert_eq!(
            player.card_of(Rank::Nine, Suit::Diamonds),
            Some(card(Rank::Nine, Suit::Diamonds))
        );
        assert_eq!(player.card_of(Rank::Nine, Suit::Clubs), None);
    }

    #[test]
    fn test_without_cards_is_pure() {
        let original = Player::with_hand(
            PlayerId::new(0),
            "Alice",
            [card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Hearts)],
        );

        let updated = original.without_cards(&[card(Rank::Two, Suit::Hearts)]);

        assert_eq!(original.cards.len(), 2);
        assert_eq!(updated.cards.len(), 1);
        assert_eq!(updated.cards[0], card(Rank::Three, Suit::Hearts));
    }

    #[test]
    fn test_with_cards_appends() {
        let player = Player::with_hand(PlayerId::new(0), "Alice", [card(Rank::Two, Suit::Hearts)]);
        let updated = player.with_cards(&[card(Rank::Two, Suit::Spades)]);

        assert_eq!(updated.cards.len(), 2);
        assert_eq!(updated.cards[1], card(Rank::Two, Suit::Spades));
    }

    #[test]
    fn test_with_chest_appends_in_order() {
        let full = || -> SmallVec<[Suit; 4]> {
            smallvec![Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
        };

        let player = Player::new(PlayerId::new(0), "Alice")
            .with_chest(TreasureChest::new(Rank::Five, full()))
            .with_chest(TreasureChest::new(Rank::Nine, full()));

        assert_eq!(player.treasure_chests.len(), 2);
        assert_eq!(player.treasure_chests[0].rank, Rank::Five);
        assert_eq!(player.treasure_chests[1].rank, Rank::Nine);
        assert!(player.has_chest_for(Rank::Five));
        assert!(!player.has_chest_for(Rank::Ace));
    }

    #[test]
    fn test_player_serde() {
        let player = Player::with_hand(PlayerId::new(2), "Carol", [card(Rank::Ace, Suit::Spades)]);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
