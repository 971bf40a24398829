//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Cards of `suit`, in hand order.
pub fn cards_in_suit(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.suit == suit).collect()
}

/// Whether `a` beats `b` in a trick led in `lead`. No trumps: only lead-suit
/// cards can win, and among those the higher value wins.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.value() > b.value();
    }
    false
}

/// Whether the follow card takes the trick from the lead card.
pub fn follow_wins(lead: Card, follow: Card) -> bool {
    card_beats(follow, lead, lead.suit)
}

/// Lowest-value card; ties keep the first encountered.
pub fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.value() <= c.value() => Some(b),
        _ => Some(c),
    })
}

/// Highest-value card; ties keep the first encountered.
pub fn highest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.value() >= c.value() => Some(b),
        _ => Some(c),
    })
}

/// Highest card in the hand by value, if any.
pub fn max_value(hand: &[Card]) -> Option<u8> {
    hand.iter().map(|c| c.value()).max()
}
