//! Strategic — the Hard opponent.
//!
//! Shapes its hand early and counts cards for the last trick:
//! - Leading tricks 1–4: lowest card of the shortest held suit, working
//!   towards voids.
//! - Leading trick 5: the card with the best `value + 2 × higher same-suit
//!   cards already played` score.
//! - Following tricks 1–4: void → lowest; otherwise the highest card still
//!   below the lead, else the lowest winning card.
//! - Following trick 5: cheapest winner, else lowest.

use crate::ai::memory::{best_final_lead, LeadBonuses, RoundMemory};
use crate::ai::tactics::{cheapest_winner, losers_in_suit, lowest_in_suit, shortest_suit};
use crate::ai::trait_def::{legal_plays_or_err, AiError, AiPlayer};
use crate::domain::cards_logic::{highest, lowest};
use crate::domain::{hand_has_suit, Card, PlayerView};

#[derive(Clone, Default)]
pub struct Strategic;

impl Strategic {
    pub const NAME: &'static str = "Strategic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn choose_lead(view: &PlayerView, legal: &[Card]) -> Option<Card> {
        if view.is_final_trick() {
            let memory = RoundMemory::from_view(view);
            return best_final_lead(legal, &memory, LeadBonuses::NONE);
        }
        shortest_suit(legal).and_then(|suit| lowest_in_suit(legal, suit))
    }

    fn choose_follow(view: &PlayerView, legal: &[Card], lead: Card) -> Option<Card> {
        if !hand_has_suit(legal, lead.suit) {
            return lowest(legal);
        }
        if view.is_final_trick() {
            return cheapest_winner(legal, lead).or_else(|| lowest(legal));
        }
        highest(&losers_in_suit(legal, lead)).or_else(|| cheapest_winner(legal, lead))
    }
}

impl AiPlayer for Strategic {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = legal_plays_or_err(view)?;
        let choice = match view.lead_card {
            None => Self::choose_lead(view, &legal),
            Some(lead) => Self::choose_follow(view, &legal, lead),
        };
        choice.ok_or_else(|| AiError::Internal("Strategic found no card".into()))
    }
}
