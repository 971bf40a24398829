use crate::domain::state::{Phase, Side};
use crate::domain::test_state_helpers::{card, state_with_hands};
use crate::domain::tricks::{can_play_card, clear_trick, evaluate_trick, play_card, valid_cards};
use crate::errors::domain::ValidationKind;

#[test]
fn leader_may_play_any_card() {
    let state = state_with_hands(
        &["AS", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    assert_eq!(valid_cards(&state, Side::Player).len(), 5);
    for c in state.hand(Side::Player) {
        assert!(can_play_card(&state, Side::Player, *c));
    }
}

#[test]
fn follower_must_follow_suit() {
    let mut state = state_with_hands(
        &["AS", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6S"],
        Side::Player,
    );
    play_card(&mut state, Side::Player, card("AS")).unwrap();
    assert_eq!(state.phase, Phase::FollowPending);
    assert_eq!(state.current_player, Side::Ai);

    let valid = valid_cards(&state, Side::Ai);
    assert_eq!(valid, vec![card("TS"), card("6S")]);
    assert!(!can_play_card(&state, Side::Ai, card("3H")));

    let err = play_card(&mut state, Side::Ai, card("3H")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::MustFollowSuit));
    // Rejected play leaves the state untouched.
    assert_eq!(state.hand(Side::Ai).len(), 5);
    assert_eq!(state.follow_card, None);
}

#[test]
fn void_follower_may_play_anything() {
    let mut state = state_with_hands(
        &["AS", "KH", "2C", "3D", "4D"],
        &["TH", "3H", "4C", "5C", "6D"],
        Side::Player,
    );
    play_card(&mut state, Side::Player, card("AS")).unwrap();
    assert_eq!(valid_cards(&state, Side::Ai).len(), 5);
}

#[test]
fn out_of_turn_and_missing_cards_are_rejected() {
    let mut state = state_with_hands(
        &["AS", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    assert!(!can_play_card(&state, Side::Ai, card("TS")));
    let err = play_card(&mut state, Side::Ai, card("TS")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::OutOfTurn));

    assert!(!can_play_card(&state, Side::Player, card("AD")));
    let err = play_card(&mut state, Side::Player, card("AD")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::CardNotInHand));
}

#[test]
fn higher_same_suit_follow_wins_and_takes_lead() {
    let mut state = state_with_hands(
        &["9S", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    play_card(&mut state, Side::Player, card("9S")).unwrap();
    let result = play_card(&mut state, Side::Ai, card("TS")).unwrap();

    assert!(result.trick_completed);
    let trick = result.trick.unwrap();
    assert_eq!(trick.winner, Side::Ai);
    assert_eq!(trick.trick_no, 1);
    assert_eq!(result.point_to, None);
    assert_eq!(result.trick_no_after, 2);
    assert_eq!(state.phase, Phase::TrickResolved);
    assert_eq!(state.lead_player, Side::Ai);
    assert_eq!(state.current_player, Side::Ai);
    // Slots stay populated for display.
    assert_eq!(state.lead_card, Some(card("9S")));
    assert_eq!(state.follow_card, Some(card("TS")));
    // Non-final tricks never score.
    assert_eq!(state.scores, [0, 0]);
}

#[test]
fn off_suit_follow_loses_even_with_ace() {
    let mut state = state_with_hands(
        &["2S", "KH", "2C", "3D", "4D"],
        &["AH", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    play_card(&mut state, Side::Player, card("2S")).unwrap();
    let result = play_card(&mut state, Side::Ai, card("AH")).unwrap();
    assert_eq!(result.trick.unwrap().winner, Side::Player);
}

#[test]
fn no_play_until_resolved_trick_is_cleared() {
    let mut state = state_with_hands(
        &["9S", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    play_card(&mut state, Side::Player, card("9S")).unwrap();
    play_card(&mut state, Side::Ai, card("TS")).unwrap();

    assert!(!can_play_card(&state, Side::Ai, card("3H")));
    let err = play_card(&mut state, Side::Ai, card("3H")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));

    assert!(clear_trick(&mut state));
    assert_eq!(state.phase, Phase::LeadPending);
    assert_eq!(state.lead_card, None);
    assert_eq!(state.follow_card, None);
    assert!(can_play_card(&state, Side::Ai, card("3H")));
}

#[test]
fn clear_trick_does_not_drop_an_unanswered_lead() {
    let mut state = state_with_hands(
        &["9S", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    play_card(&mut state, Side::Player, card("9S")).unwrap();
    assert!(!clear_trick(&mut state));
    assert_eq!(state.lead_card, Some(card("9S")));
    assert_eq!(state.phase, Phase::FollowPending);
}

#[test]
fn evaluate_trick_requires_both_cards() {
    let mut state = state_with_hands(
        &["9S", "KH", "2C", "3D", "4D"],
        &["TS", "3H", "4C", "5C", "6C"],
        Side::Player,
    );
    let err = evaluate_trick(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
    assert!(state.tricks.is_empty());
}

#[test]
fn only_trick_five_scores() {
    let mut state = state_with_hands(
        &["2S", "3S", "4S", "5S", "6S"],
        &["7S", "8S", "9S", "TS", "JS"],
        Side::Player,
    );
    for (i, (p, a)) in [("2S", "7S"), ("3S", "8S"), ("4S", "9S"), ("5S", "TS")]
        .into_iter()
        .enumerate()
    {
        // AI wins every trick and leads the next one.
        let leader = state.lead_player;
        let (first, second) = if leader == Side::Player { (p, a) } else { (a, p) };
        play_card(&mut state, leader, card(first)).unwrap();
        let result = play_card(&mut state, leader.other(), card(second)).unwrap();
        assert_eq!(result.trick.unwrap().winner, Side::Ai);
        assert_eq!(state.scores, [0, 0], "trick {} must not score", i + 1);
        clear_trick(&mut state);
    }

    assert_eq!(state.trick_no, 5);
    play_card(&mut state, Side::Ai, card("JS")).unwrap();
    let result = play_card(&mut state, Side::Player, card("6S")).unwrap();
    assert_eq!(result.point_to, Some(Side::Ai));
    assert!(result.round_over());
    assert!(!result.match_over());
    assert_eq!(state.phase, Phase::RoundOver);
    assert_eq!(state.scores, [0, 1]);
    assert_eq!(state.resolved_tricks(), 5);
    assert!(!state.is_round_active());
}
