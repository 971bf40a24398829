/// Property-based tests for card conservation and round structure
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::rules::HAND_SIZE;
use crate::domain::{
    clear_trick, play_card, start_round_with_deck, test_gens, test_prelude, valid_cards, Card,
    Deck, GameState, Phase, Side,
};

fn cards_accounted(state: &GameState) -> usize {
    state.hand(Side::Player).len()
        + state.hand(Side::Ai).len()
        + 2 * state.resolved_tricks()
        + state.in_flight_cards()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every dealt card is in a hand, in a resolved trick, or
    /// on the table, after every play and every clear.
    #[test]
    fn prop_cards_are_conserved(
        deck in test_gens::shuffled_deck(),
        picks in proptest::collection::vec(0usize..5, 10),
        leader in test_gens::side(),
    ) {
        let mut state = GameState::new(20).unwrap();
        state.last_round_leader = Some(leader.other());
        start_round_with_deck(&mut state, Deck::from_cards(deck)).unwrap();
        prop_assert_eq!(state.current_player, leader);
        prop_assert_eq!(cards_accounted(&state), 2 * HAND_SIZE);

        let mut seen: HashSet<Card> = state.hands.iter().flatten().copied().collect();
        prop_assert_eq!(seen.len(), 2 * HAND_SIZE);

        for pick in picks {
            let actor = state.current_player;
            let legal = valid_cards(&state, actor);
            let card = legal[pick % legal.len()];
            play_card(&mut state, actor, card).unwrap();
            prop_assert_eq!(cards_accounted(&state), 2 * HAND_SIZE);
            clear_trick(&mut state);
            prop_assert_eq!(cards_accounted(&state), 2 * HAND_SIZE);
            if !state.is_round_active() {
                break;
            }
        }

        prop_assert_eq!(state.phase, Phase::RoundOver);
        prop_assert_eq!(state.resolved_tricks(), 5);
        prop_assert_eq!(state.scores.iter().sum::<u32>(), 1);
        let last = state.last_trick().unwrap();
        prop_assert_eq!(last.trick_no, 5);
        prop_assert_eq!(state.score(last.winner), 1);

        // No card was played twice.
        for trick in &state.tricks {
            seen.remove(&trick.lead_card);
            seen.remove(&trick.follow_card);
        }
        prop_assert!(seen.is_empty());
    }

    /// Property: each trick after the first is led by the previous winner.
    #[test]
    fn prop_winner_leads_next_trick(
        deck in test_gens::shuffled_deck(),
        picks in proptest::collection::vec(0usize..5, 10),
    ) {
        let mut state = GameState::new(20).unwrap();
        state.last_round_leader = Some(Side::Ai);
        start_round_with_deck(&mut state, Deck::from_cards(deck)).unwrap();
        for pick in picks {
            let actor = state.current_player;
            let legal = valid_cards(&state, actor);
            play_card(&mut state, actor, legal[pick % legal.len()]).unwrap();
            clear_trick(&mut state);
            if !state.is_round_active() {
                break;
            }
        }
        for pair in state.tricks.windows(2) {
            prop_assert_eq!(pair[1].lead_player, pair[0].winner);
            prop_assert_eq!(pair[1].trick_no, pair[0].trick_no + 1);
        }
    }
}
