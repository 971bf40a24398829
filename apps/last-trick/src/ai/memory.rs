//! What an AI can remember about the current round: cards already played and
//! suits the opponent has shown void in.
//!
//! Rebuilt from the public trick history before every decision, so strategies
//! stay pure functions of the observable state.

use crate::domain::{Card, PlayerView, Rank, Suit};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundMemory {
    played: Vec<Card>,
    opponent_voids: Vec<Suit>,
}

impl RoundMemory {
    pub fn from_view(view: &PlayerView) -> Self {
        Self {
            played: view.played_cards().collect(),
            opponent_voids: update_opponent_voids(view),
        }
    }

    pub fn opponent_void_in(&self, suit: Suit) -> bool {
        self.opponent_voids.contains(&suit)
    }

    /// How many already-played cards of `card`'s suit outrank it.
    pub fn higher_played(&self, card: Card) -> usize {
        self.played
            .iter()
            .filter(|p| p.suit == card.suit && p.value() > card.value())
            .count()
    }
}

/// Suits the opponent failed to follow when this side led.
///
/// Scans every resolved trick of the round; the result is in discovery order
/// without duplicates.
pub fn update_opponent_voids(view: &PlayerView) -> Vec<Suit> {
    let mut voids = Vec::new();
    for trick in &view.tricks {
        if trick.lead_player == view.side
            && trick.follower_was_void()
            && !voids.contains(&trick.lead_card.suit)
        {
            voids.push(trick.lead_card.suit);
        }
    }
    voids
}

/// Bonuses layered on top of the base trick-5 lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeadBonuses {
    pub void_suit: u32,
    pub ace: u32,
    pub king: u32,
}

impl LeadBonuses {
    pub const NONE: LeadBonuses = LeadBonuses {
        void_suit: 0,
        ace: 0,
        king: 0,
    };
}

/// Trick-5 lead score: card value plus two per higher same-suit card already
/// gone, plus any bonuses that apply.
pub fn final_lead_score(card: Card, memory: &RoundMemory, bonuses: LeadBonuses) -> u32 {
    let mut score = card.value() as u32 + 2 * memory.higher_played(card) as u32;
    if memory.opponent_void_in(card.suit) {
        score += bonuses.void_suit;
    }
    match card.rank {
        Rank::Ace => score += bonuses.ace,
        Rank::King => score += bonuses.king,
        _ => {}
    }
    score
}

/// Highest-scoring card for a trick-5 lead; ties keep the first encountered.
pub fn best_final_lead(cards: &[Card], memory: &RoundMemory, bonuses: LeadBonuses) -> Option<Card> {
    cards.iter().copied().fold(None, |best, c| match best {
        Some(b) if final_lead_score(b, memory, bonuses) >= final_lead_score(c, memory, bonuses) => {
            Some(b)
        }
        _ => Some(c),
    })
}
