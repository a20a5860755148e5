//! The guess resolver: the state-machine core of the engine.
//!
//! Stages cycle `Player → Rank → Quantity → Suit → Complete → Player`, with
//! early exits to `Complete` on a wrong rank or quantity. Each call to
//! [`make_guess`] consumes the prior state and returns a wholly new value;
//! nothing is mutated in place, so old states stay valid for replay or undo.
//!
//! A guess variant that does not match the current stage is a caller bug and
//! is silently ignored; the state comes back unchanged.

use smallvec::SmallVec;

use crate::chests::detect_chests;
use crate::core::card::{Card, Rank, Suit};
use crate::core::guess::Guess;
use crate::core::player::{Player, PlayerId};
use crate::core::state::{GameState, GuessStage};

/// Advance the game by one step of guess input.
///
/// Interprets `guess` against the current stage per the protocol table:
///
/// | Stage      | Input        | Effect                                                        |
/// |------------|--------------|---------------------------------------------------------------|
/// | `Player`   | `Opponent`   | select the target, move to `Rank`                             |
/// | `Rank`     | `Rank`       | target holds the rank? `Quantity` : failed, `Complete`        |
/// | `Quantity` | `Quantity`   | exact count match? `Suit` : failed, `Complete`                |
/// | `Suit`     | `Suits`      | all suits held and count exact? transfer + chests : failed    |
/// | `Complete` | `Advance`    | clear the guess, rotate turn on failure, check for game end   |
///
/// Any other (stage, input) pairing returns the state unchanged, as does any
/// call made after `game_over` is set.
///
/// ## Panics
///
/// Selecting an opponent that does not exist, or selecting the current
/// player as their own opponent, is a programming error and panics. A
/// self-guess would let a "transfer" duplicate the won cards.
#[must_use]
pub fn make_guess(state: GameState, guess: Guess) -> GameState {
    if state.game_over {
        return state;
    }

    match (state.stage, guess) {
        (GuessStage::Player, Guess::Opponent(target)) => select_opponent(state, target),
        (GuessStage::Rank, Guess::Rank(rank)) => resolve_rank(state, rank),
        (GuessStage::Quantity, Guess::Quantity(quantity)) => resolve_quantity(state, quantity),
        (GuessStage::Suit, Guess::Suits(suits)) => resolve_suits(state, suits),
        (GuessStage::Complete, Guess::Advance) => advance(state),
        // Input for some other stage: caller bug, ignored
        (_, _) => state,
    }
}

/// The opponent selected during the `Player` stage.
///
/// States produced by this module always carry a selection past that stage;
/// a hand-built state that does not is a programming error.
fn selected(state: &GameState) -> PlayerId {
    state
        .selected_player
        .expect("guess protocol is past the Player stage with no selected opponent")
}

fn select_opponent(state: GameState, target: PlayerId) -> GameState {
    assert!(
        target.index() < state.player_count(),
        "selected opponent {target} does not exist"
    );
    assert!(
        target != state.current_player,
        "current player cannot select themselves as the opponent"
    );

    GameState {
        selected_player: Some(target),
        stage: GuessStage::Rank,
        ..state
    }
}

fn resolve_rank(state: GameState, rank: Rank) -> GameState {
    let opponent = state.player(selected(&state));

    if opponent.holds_rank(rank) {
        GameState {
            guessed_rank: Some(rank),
            stage: GuessStage::Quantity,
            ..state
        }
    } else {
        GameState {
            guessed_rank: Some(rank),
            last_guess_correct: Some(false),
            stage: GuessStage::Complete,
            ..state
        }
    }
}

fn resolve_quantity(state: GameState, quantity: u8) -> GameState {
    let rank = state
        .guessed_rank
        .expect("Quantity stage reached with no guessed rank");
    let actual = state.player(selected(&state)).count_of_rank(rank);

    if actual == quantity as usize {
        GameState {
            guessed_quantity: Some(quantity),
            stage: GuessStage::Suit,
            ..state
        }
    } else {
        GameState {
            guessed_quantity: Some(quantity),
            last_guess_correct: Some(false),
            stage: GuessStage::Complete,
            ..state
        }
    }
}

fn resolve_suits(state: GameState, suits: SmallVec<[Suit; 4]>) -> GameState {
    // The suit list is the one stage input the UI can hand over empty;
    // treat that like any other out-of-protocol call.
    if suits.is_empty() {
        return state;
    }

    let rank = state
        .guessed_rank
        .expect("Suit stage reached with no guessed rank");
    let quantity = state
        .guessed_quantity
        .expect("Suit stage reached with no guessed quantity");
    let opponent = state.player(selected(&state));

    // Evaluate against the distinct guessed suits; at most one card exists
    // per (rank, suit), so the match count is the distinct-suit hit count.
    let mut distinct: SmallVec<[Suit; 4]> = SmallVec::new();
    for suit in &suits {
        if !distinct.contains(suit) {
            distinct.push(*suit);
        }
    }

    let matching: Option<Vec<Card>> = distinct
        .iter()
        .map(|&suit| opponent.card_of(rank, suit))
        .collect();

    let correct = matches!(&matching, Some(cards) if cards.len() == quantity as usize);

    let state = GameState {
        guessed_suits: Some(suits),
        last_guess_correct: Some(correct),
        stage: GuessStage::Complete,
        ..state
    };

    match matching {
        Some(cards) if correct => transfer_and_form_chests(state, &cards),
        _ => state,
    }
}

/// Move the won cards from the opponent to the current player, then retire
/// any newly completed sets into chests.
fn transfer_and_form_chests(state: GameState, cards: &[Card]) -> GameState {
    let opponent = state.player(selected(&state)).without_cards(cards);
    let mut current = state.current().with_cards(cards);

    // A single transfer can complete several ranks at once (a set dealt whole
    // at the start only surfaces on the owner's first won guess). Chests for
    // ranks already in the pile are filtered out.
    let detected = detect_chests(current.cards.iter());
    for chest in detected {
        if current.has_chest_for(chest.rank) {
            continue;
        }
        let members: Vec<Card> = current
            .cards
            .iter()
            .copied()
            .filter(|card| card.rank == chest.rank && chest.suits.contains(&card.suit))
            .collect();
        current = current.without_cards(&members).with_chest(chest);
    }

    state.with_player(opponent).with_player(current)
}

fn advance(state: GameState) -> GameState {
    let keep_turn = state.last_guess_correct == Some(true);
    let current_player = if keep_turn {
        state.current_player
    } else {
        PlayerId::new(((state.current_player.index() + 1) % state.player_count()) as u8)
    };

    let state = GameState {
        current_player,
        selected_player: None,
        guessed_rank: None,
        guessed_quantity: None,
        guessed_suits: None,
        last_guess_correct: None,
        stage: GuessStage::Player,
        ..state
    };

    if all_hands_empty(&state.players) {
        GameState {
            game_over: true,
            winner: leading_player(&state.players),
            ..state
        }
    } else {
        state
    }
}

/// Are all hands empty, i.e. has every card been retired into a chest?
#[must_use]
pub fn all_hands_empty<'a>(players: impl IntoIterator<Item = &'a Player>) -> bool {
    players.into_iter().all(|p| p.cards.is_empty())
}

/// The player with the strictly greatest chest count; ties go to the lowest
/// id (first maximum in seat order). `None` only for an empty seat list.
#[must_use]
pub fn leading_player<'a>(players: impl IntoIterator<Item = &'a Player>) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, usize)> = None;
    for player in players {
        let chests = player.treasure_chests.len();
        match best {
            Some((_, most)) if chests <= most => {}
            _ => best = Some((player.id, chests)),
        }
    }
    best.map(|(id, _)| id)
}
