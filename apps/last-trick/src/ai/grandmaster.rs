//! Grandmaster — the strongest opponent.
//!
//! Tracks the suits the opponent could not follow on its own leads and
//! never ducks a trick it can take before the last one.
//!
//! Leading:
//! - Trick 5: lowest card of a suit the opponent is void in (a sure point),
//!   else the best trick-5 score with void, ace and king bonuses.
//! - Tricks 1–4: lowest singleton first; otherwise the highest card of the
//!   weakest multi-card suit on tricks 1–2 and of the strongest on tricks 3–4.
//!   Suits compare by card count, then by total value.
//!
//! Following:
//! - Trick 5: cheapest same-suit winner, else lowest.
//! - Tricks 1–4: cheapest winner, else the highest losing same-suit card,
//!   else the lowest off-suit card.

use crate::ai::memory::{best_final_lead, LeadBonuses, RoundMemory};
use crate::ai::tactics::{
    cheapest_winner, highest_in_suit, losers_in_suit, suit_counts, suit_strength,
};
use crate::ai::trait_def::{legal_plays_or_err, AiError, AiPlayer};
use crate::domain::cards_logic::{highest, lowest};
use crate::domain::{Card, PlayerView, Suit};

const BONUSES: LeadBonuses = LeadBonuses {
    void_suit: 20,
    ace: 5,
    king: 3,
};

#[derive(Clone, Default)]
pub struct Grandmaster;

impl Grandmaster {
    pub const NAME: &'static str = "Grandmaster";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn choose_lead(view: &PlayerView, legal: &[Card], memory: &RoundMemory) -> Option<Card> {
        if view.is_final_trick() {
            let void_cards: Vec<Card> = legal
                .iter()
                .copied()
                .filter(|c| memory.opponent_void_in(c.suit))
                .collect();
            return lowest(&void_cards).or_else(|| best_final_lead(legal, memory, BONUSES));
        }

        let counts = suit_counts(legal);
        let singletons: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|c| counts.iter().any(|&(s, n)| s == c.suit && n == 1))
            .collect();
        if let Some(card) = lowest(&singletons) {
            return Some(card);
        }

        let keyed = counts
            .iter()
            .map(|&(s, n)| (s, (n, suit_strength(legal, s))));
        let suit = if view.trick_no <= 2 {
            pick_suit(keyed, |candidate, best| candidate < best)
        } else {
            pick_suit(keyed, |candidate, best| candidate > best)
        };
        suit.and_then(|s| highest_in_suit(legal, s))
    }

    fn choose_follow(view: &PlayerView, legal: &[Card], lead: Card) -> Option<Card> {
        if let Some(winner) = cheapest_winner(legal, lead) {
            return Some(winner);
        }
        if view.is_final_trick() {
            return lowest(legal);
        }
        highest(&losers_in_suit(legal, lead)).or_else(|| lowest(legal))
    }
}

/// First suit (in the given order) whose key no later suit improves on.
fn pick_suit<K: Copy>(
    keyed: impl Iterator<Item = (Suit, K)>,
    better: impl Fn(K, K) -> bool,
) -> Option<Suit> {
    keyed
        .fold(None, |best: Option<(Suit, K)>, (s, k)| match best {
            Some((_, bk)) if !better(k, bk) => best,
            _ => Some((s, k)),
        })
        .map(|(s, _)| s)
}

impl AiPlayer for Grandmaster {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = legal_plays_or_err(view)?;
        let memory = RoundMemory::from_view(view);
        let choice = match view.lead_card {
            None => Self::choose_lead(view, &legal, &memory),
            Some(lead) => Self::choose_follow(view, &legal, lead),
        };
        choice.ok_or_else(|| AiError::Internal("Grandmaster found no card".into()))
    }
}
