use crate::domain::dealing::{full_deck, Deck};
use crate::domain::game_transition::start_round_with_deck;
use crate::domain::state::{GameState, Phase, Side};
use crate::domain::{try_parse_cards, Card};

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// A stacked deck: player hand, AI hand, then the rest of the 52 cards in
/// standard order.
pub fn stacked_deck(player: &[&str], ai: &[&str]) -> Deck {
    let mut cards = parse_cards(player);
    cards.extend(parse_cards(ai));
    let rest: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !cards.contains(c))
        .collect();
    cards.extend(rest);
    Deck::from_cards(cards)
}

/// A state mid-round at the start of trick 1 with the given hands and leader.
pub fn state_with_hands(player: &[&str], ai: &[&str], leader: Side) -> GameState {
    let mut state = GameState::new(5).expect("valid goal");
    // Leader for the first round is the opposite of the recorded previous one.
    state.last_round_leader = Some(leader.other());
    start_round_with_deck(&mut state, stacked_deck(player, ai)).expect("deal succeeds");
    // Tests that use this helper set hands explicitly; undo any AI redeal.
    state.hands = [parse_cards(player), parse_cards(ai)];
    state.redeal_closed = [true; 2];
    assert_eq!(state.phase, Phase::LeadPending);
    state
}
