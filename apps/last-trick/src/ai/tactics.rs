//! Small, pure card-selection helpers shared by the deterministic strategies.

use crate::domain::cards_logic::{cards_in_suit, highest, lowest};
use crate::domain::{Card, Suit};

/// Cheapest same-suit card that beats `lead`.
pub fn cheapest_winner(cards: &[Card], lead: Card) -> Option<Card> {
    lowest(&winners(cards, lead))
}

/// Same-suit cards that beat `lead`, in hand order.
pub fn winners(cards: &[Card], lead: Card) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.suit == lead.suit && c.value() > lead.value())
        .collect()
}

/// Same-suit cards that lose to `lead`, in hand order.
pub fn losers_in_suit(cards: &[Card], lead: Card) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.suit == lead.suit && c.value() < lead.value())
        .collect()
}

/// Suits present in `cards` with their counts, in `Suit::ALL` order.
pub fn suit_counts(cards: &[Card]) -> Vec<(Suit, usize)> {
    Suit::ALL
        .into_iter()
        .map(|s| (s, cards.iter().filter(|c| c.suit == s).count()))
        .filter(|&(_, n)| n > 0)
        .collect()
}

/// Held suit with the fewest cards; ties keep `Suit::ALL` order.
pub fn shortest_suit(cards: &[Card]) -> Option<Suit> {
    suit_counts(cards)
        .into_iter()
        .fold(None, |best: Option<(Suit, usize)>, (s, n)| match best {
            Some((_, bn)) if bn <= n => best,
            _ => Some((s, n)),
        })
        .map(|(s, _)| s)
}

/// Total value of the cards of `suit`.
pub fn suit_strength(cards: &[Card], suit: Suit) -> u32 {
    cards
        .iter()
        .filter(|c| c.suit == suit)
        .map(|c| c.value() as u32)
        .sum()
}

/// Highest card of `suit`.
pub fn highest_in_suit(cards: &[Card], suit: Suit) -> Option<Card> {
    highest(&cards_in_suit(cards, suit))
}

/// Lowest card of `suit`.
pub fn lowest_in_suit(cards: &[Card], suit: Suit) -> Option<Card> {
    lowest(&cards_in_suit(cards, suit))
}
