use crate::domain::dealing::{full_deck, Deck};
use crate::domain::game_transition::{
    first_leader, start_new_match, start_new_match_with_deck, start_new_round,
    start_round_with_deck,
};
use crate::domain::test_state_helpers::parse_cards;
use crate::domain::Card;
use crate::domain::state::{GameState, Phase, Side};
use crate::domain::tricks::{clear_trick, play_card, valid_cards};
use crate::errors::domain::ValidationKind;

/// Play the current round to completion, each side taking its first legal card.
fn play_out_round(state: &mut GameState) {
    while state.is_round_active() {
        if state.phase == Phase::TrickResolved {
            clear_trick(state);
            continue;
        }
        let actor = state.current_player;
        let card = valid_cards(state, actor)[0];
        play_card(state, actor, card).unwrap();
    }
}

#[test]
fn new_match_deals_two_hands_and_zeroes_scores() {
    let mut state = GameState::new(5).unwrap();
    state.scores = [3, 4];
    let start = start_new_match(&mut state, 42).unwrap();

    assert_eq!(start.round_no, 1);
    assert_eq!(state.scores, [0, 0]);
    assert_eq!(state.phase, Phase::LeadPending);
    assert_eq!(state.trick_no, 1);
    assert_eq!(state.hand(Side::Player).len(), 5);
    assert_eq!(state.hand(Side::Ai).len(), 5);
    assert_eq!(state.current_player, start.leader);
    assert_eq!(start.leader, first_leader(42));
    let expected_deck = if start.ai_redealt { 52 - 15 } else { 52 - 10 };
    assert_eq!(state.deck.len(), expected_deck);
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = GameState::new(5).unwrap();
    let mut b = GameState::new(5).unwrap();
    start_new_match(&mut a, 7).unwrap();
    start_new_match(&mut b, 7).unwrap();
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.lead_player, b.lead_player);
}

#[test]
fn first_leader_is_not_fixed() {
    let leaders: Vec<Side> = (0..64).map(first_leader).collect();
    assert!(leaders.contains(&Side::Player));
    assert!(leaders.contains(&Side::Ai));
}

#[test]
fn leader_alternates_between_rounds_and_scores_carry() {
    let mut state = GameState::new(20).unwrap();
    let first = start_new_match(&mut state, 99).unwrap();
    play_out_round(&mut state);
    assert_eq!(state.phase, Phase::RoundOver);
    let scores_after_round = state.scores;
    assert_eq!(scores_after_round.iter().sum::<u32>(), 1);

    let second = start_new_round(&mut state).unwrap();
    assert_eq!(second.round_no, 2);
    assert_eq!(second.leader, first.leader.other());
    assert_eq!(state.scores, scores_after_round);
    assert!(state.tricks.is_empty());
    assert_eq!(state.trick_no, 1);

    play_out_round(&mut state);
    let third = start_new_round(&mut state).unwrap();
    assert_eq!(third.leader, first.leader);
}

#[test]
fn round_cannot_restart_while_in_progress() {
    let mut state = GameState::new(5).unwrap();
    start_new_match(&mut state, 1).unwrap();
    let err = start_new_round(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
}

/// 52 cards where the AI's first two cards repeat the player's first two.
fn deck_with_repeats() -> Deck {
    let mut cards = parse_cards(&["AS", "KS", "2C", "3D", "4D", "AS", "KS", "5C", "6C", "7C"]);
    let rest: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !cards.contains(c))
        .collect();
    cards.extend(rest);
    cards.truncate(52);
    Deck::from_cards(cards)
}

#[test]
fn round_rejects_deck_with_repeated_cards() {
    let mut state = GameState::new(5).unwrap();
    let before = state.clone();

    let err = start_round_with_deck(&mut state, deck_with_repeats()).unwrap_err();
    assert_eq!(err.kind(), None);
    assert!(err.to_string().contains("repeated card"));
    assert_eq!(state, before);
    assert!(!state.is_round_active());
}

#[test]
fn failed_match_start_leaves_previous_state_unchanged() {
    let mut state = GameState::new(20).unwrap();
    start_new_match(&mut state, 3).unwrap();
    play_out_round(&mut state);
    assert_eq!(state.phase, Phase::RoundOver);
    let before = state.clone();

    let short = Deck::from_cards(parse_cards(&["AS", "KS", "QS"]));
    assert!(start_new_match_with_deck(&mut state, 2, short).is_err());
    assert_eq!(state, before);

    assert!(start_new_match_with_deck(&mut state, 2, deck_with_repeats()).is_err());
    assert_eq!(state, before);
    assert_eq!(state.tricks.len(), 5);
    assert_eq!(state.scores.iter().sum::<u32>(), 1);
}

#[test]
fn goal_of_one_ends_match_after_first_round() {
    let mut state = GameState::new(1).unwrap();
    start_new_match(&mut state, 5).unwrap();
    play_out_round(&mut state);

    assert_eq!(state.phase, Phase::MatchOver);
    let winner = state.match_winner().unwrap();
    assert_eq!(state.score(winner), 1);
    assert_eq!(state.score(winner.other()), 0);

    let err = start_new_round(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::MatchOver));

    // A new match resets everything.
    start_new_match(&mut state, 6).unwrap();
    assert_eq!(state.scores, [0, 0]);
    assert_eq!(state.round_no, 1);
    assert!(state.match_winner().is_none());
}
