/// Property-based tests for follow-suit legality and fail-closed play checks
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::tricks::legal_from_hand;
use crate::domain::{
    can_play_card, play_card, start_round_with_deck, test_gens, test_prelude, valid_cards, Card,
    Deck, GameState, Side,
};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Follow-suit legality
    /// If a hand contains cards of the lead suit, the legal plays are exactly those cards.
    #[test]
    fn prop_follow_suit_legality(
        lead_card in test_gens::card(),
        other_cards in test_gens::unique_cards_up_to(5),
        keep_rank in test_gens::rank(),
    ) {
        let held = Card { suit: lead_card.suit, rank: keep_rank };
        let mut hand = vec![held];
        for card in other_cards {
            if card != held {
                hand.push(card);
            }
        }

        let legal = legal_from_hand(&hand, Some(lead_card));
        let expected: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead_card.suit).collect();
        prop_assert_eq!(legal, expected);
    }

    /// Property: when void in the lead suit, the whole hand is legal.
    #[test]
    fn prop_follow_suit_when_void((lead_suit, hand) in test_gens::suit().prop_flat_map(|s| {
        (Just(s), test_gens::hand_without_suit(s))
    }), rank in test_gens::rank()) {
        let legal = legal_from_hand(&hand, Some(Card { suit: lead_suit, rank }));
        prop_assert_eq!(legal, hand);
    }

    /// Property: legal plays are a duplicate-free subset of the hand.
    #[test]
    fn prop_legal_plays_subset(
        hand in test_gens::hand(),
        lead in proptest::option::of(test_gens::card()),
    ) {
        let legal = legal_from_hand(&hand, lead);
        let legal_set: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(legal_set.len(), legal.len());
        for card in &legal {
            prop_assert!(hand.contains(card));
        }
        prop_assert!(!legal.is_empty());
    }

    /// Property: across random play-outs, `can_play_card` is false for every
    /// card outside the acting hand and for every out-of-turn attempt, and
    /// `play_card` agrees with it.
    #[test]
    fn prop_can_play_card_fails_closed(
        deck in test_gens::shuffled_deck(),
        picks in proptest::collection::vec(0usize..5, 10),
        leader in test_gens::side(),
    ) {
        let mut state = GameState::new(20).unwrap();
        state.last_round_leader = Some(leader);
        start_round_with_deck(&mut state, Deck::from_cards(deck)).unwrap();
        state.redeal_closed = [true; 2];

        for pick in picks {
            let actor = state.current_player;
            for card in crate::domain::dealing::full_deck() {
                if !state.hand(actor).contains(&card) {
                    prop_assert!(!can_play_card(&state, actor, card));
                }
                prop_assert!(!can_play_card(&state, actor.other(), card));
            }

            let legal = valid_cards(&state, actor);
            prop_assert!(!legal.is_empty());
            let card = legal[pick % legal.len()];
            prop_assert!(can_play_card(&state, actor, card));
            play_card(&mut state, actor, card).unwrap();
            crate::domain::clear_trick(&mut state);
            if !state.is_round_active() {
                break;
            }
        }
        prop_assert!(!state.is_round_active());
        prop_assert!(state.hand(Side::Player).is_empty());
    }
}
