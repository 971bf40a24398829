use crate::domain::game_transition::start_round_with_deck;
use crate::domain::redeal::{decline_redeal, redeal_available, redeal_hand};
use crate::domain::state::{GameState, Side};
use crate::domain::test_state_helpers::{card, parse_cards, stacked_deck};
use crate::domain::tricks::play_card;
use crate::errors::domain::ValidationKind;

fn dealt(player: &[&str], ai: &[&str], leader: Side) -> GameState {
    let mut state = GameState::new(5).unwrap();
    state.last_round_leader = Some(leader.other());
    start_round_with_deck(&mut state, stacked_deck(player, ai)).unwrap();
    state
}

#[test]
fn weak_player_hand_is_offered_a_redeal() {
    let state = dealt(
        &["9S", "8H", "2C", "3D", "7S"],
        &["AS", "KH", "QC", "JD", "TS"],
        Side::Player,
    );
    assert!(redeal_available(&state, Side::Player));
    assert!(!redeal_available(&state, Side::Ai));
}

#[test]
fn hand_with_a_ten_is_not_offered() {
    let state = dealt(
        &["9S", "8H", "2C", "3D", "TS"],
        &["AS", "KH", "QC", "JD", "TD"],
        Side::Player,
    );
    assert!(!redeal_available(&state, Side::Player));
    let mut state = state;
    let err = redeal_hand(&mut state, Side::Player).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::RedealNotAllowed));
}

#[test]
fn redeal_takes_next_five_from_deck() {
    let mut state = dealt(
        &["9S", "8H", "2C", "3D", "7S"],
        &["AS", "KH", "QC", "JD", "TS"],
        Side::Player,
    );
    let deck_before = state.deck.len();
    let outcome = redeal_hand(&mut state, Side::Player).unwrap();

    assert_eq!(outcome.discarded, parse_cards(&["9S", "8H", "2C", "3D", "7S"]));
    // The stacked deck continues in standard order after the ten dealt cards.
    assert_eq!(outcome.new_hand, parse_cards(&["3C", "4C", "5C", "6C", "7C"]));
    assert_eq!(state.hand(Side::Player), outcome.new_hand.as_slice());
    assert_eq!(state.deck.len(), deck_before - 5);
    assert_eq!(state.discards.len(), 5);

    // Only once per round.
    assert!(!redeal_available(&state, Side::Player));
}

#[test]
fn declining_closes_the_offer() {
    let mut state = dealt(
        &["9S", "8H", "2C", "3D", "7S"],
        &["AS", "KH", "QC", "JD", "TS"],
        Side::Player,
    );
    decline_redeal(&mut state, Side::Player);
    assert!(!redeal_available(&state, Side::Player));
}

#[test]
fn first_card_played_closes_redeal() {
    let mut state = dealt(
        &["9S", "8H", "2C", "3D", "7S"],
        &["AS", "KH", "QC", "JD", "TS"],
        Side::Ai,
    );
    assert!(redeal_available(&state, Side::Player));
    play_card(&mut state, Side::Ai, card("AS")).unwrap();
    assert!(!redeal_available(&state, Side::Player));
    let err = redeal_hand(&mut state, Side::Player).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::RedealNotAllowed));
}

#[test]
fn ai_weak_hand_is_redealt_at_the_deal() {
    let state = dealt(
        &["AS", "KH", "QC", "JD", "TS"],
        &["9S", "8H", "2C", "3D", "7S"],
        Side::Player,
    );
    assert_eq!(state.discards, parse_cards(&["9S", "8H", "2C", "3D", "7S"]));
    assert_eq!(state.hand(Side::Ai), parse_cards(&["3C", "4C", "5C", "6C", "7C"]).as_slice());
    assert!(state.redeal_closed[Side::Ai.index()]);
    assert_eq!(state.deck.len(), 52 - 15);
}
