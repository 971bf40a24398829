//! Heuristic — the Medium opponent.
//!
//! Deterministic and cheap. Plays low and gives tricks away on purpose
//! before the last one, then goes for the point:
//! - Leading tricks 1–4: lowest legal card.
//! - Following suit on tricks 1–4: lowest card below the lead (a deliberate
//!   loss), else the lowest same-suit card (which wins).
//! - Void: lowest card overall.
//! - Trick 5: lead the highest card; follow with the cheapest winner, else
//!   the lowest card.

use crate::ai::tactics::{cheapest_winner, losers_in_suit};
use crate::ai::trait_def::{legal_plays_or_err, AiError, AiPlayer};
use crate::domain::cards_logic::{highest, lowest};
use crate::domain::{hand_has_suit, Card, PlayerView};

#[derive(Clone, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn choose(view: &PlayerView, legal: &[Card]) -> Option<Card> {
        let Some(lead) = view.lead_card else {
            return if view.is_final_trick() {
                highest(legal)
            } else {
                lowest(legal)
            };
        };

        if view.is_final_trick() {
            return cheapest_winner(legal, lead).or_else(|| lowest(legal));
        }

        if hand_has_suit(legal, lead.suit) {
            lowest(&losers_in_suit(legal, lead)).or_else(|| lowest(legal))
        } else {
            lowest(legal)
        }
    }
}

impl AiPlayer for Heuristic {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = legal_plays_or_err(view)?;
        Self::choose(view, &legal)
            .ok_or_else(|| AiError::Internal("Heuristic found no card".into()))
    }
}
