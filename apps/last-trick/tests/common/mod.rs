#![allow(dead_code)]

use last_trick::domain::dealing::{full_deck, Deck};
use last_trick::domain::game_transition::first_leader;
use last_trick::domain::seed_derivation::derive_match_seed;
use last_trick::domain::{try_parse_cards, valid_cards, Card};
use last_trick::services::game_flow::{Advance, GameSession, NextAction};
use last_trick::Side;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Player's five, AI's five, then the rest of the deck in standard order.
pub fn stacked_deck(player: &[&str], ai: &[&str]) -> Deck {
    let mut cards = try_parse_cards(player).expect("valid player tokens");
    cards.extend(try_parse_cards(ai).expect("valid ai tokens"));
    let rest: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !cards.contains(c))
        .collect();
    cards.extend(rest);
    Deck::from_cards(cards)
}

/// A session seed whose first match is led by `side`.
pub fn seed_where_first_leader_is(side: Side) -> u64 {
    (0..)
        .find(|&seed| first_leader(derive_match_seed(seed, 1)) == side)
        .expect("both leaders occur")
}

/// Drive the session until the match ends, the human always playing its
/// first legal card and declining redeals. Returns the number of rounds.
pub fn play_out_match(session: &mut GameSession) -> u32 {
    let mut rounds = 1;
    loop {
        match session.next_action() {
            NextAction::StartMatch => {
                session.start_match().expect("match starts");
            }
            NextAction::HumanRedeal => session.decline_redeal(),
            NextAction::HumanPlay => {
                let card = valid_cards(session.state(), Side::Player)[0];
                session.human_play(card).expect("legal human play");
            }
            NextAction::AiPlay => {
                session
                    .run_ai_turn()
                    .expect("AI turn succeeds")
                    .expect("AI had a move");
            }
            NextAction::Advance => match session.advance().expect("advance") {
                Advance::RoundStarted(_) => rounds += 1,
                Advance::MatchOver { .. } => return rounds,
                Advance::TrickCleared | Advance::Idle => {}
            },
            NextAction::MatchOver => return rounds,
        }
        assert!(rounds < 1000, "match did not terminate");
    }
}
