//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_transition;
pub mod player_view;
pub mod redeal;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_redeal;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, follow_wins, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::Deck;
pub use game_transition::{
    start_new_match, start_new_match_with_deck, start_new_round, start_round_with_deck, RoundStart,
};
pub use player_view::PlayerView;
pub use redeal::{decline_redeal, redeal_available, redeal_hand, RedealOutcome};
pub use rules::hand_qualifies_for_redeal;
pub use snapshot::GameSnapshot;
pub use state::{GameState, Phase, Side, TrickRecord};
pub use tricks::{can_play_card, clear_trick, evaluate_trick, play_card, valid_cards, PlayCardResult};
