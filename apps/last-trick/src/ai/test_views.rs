//! Hand-built `PlayerView`s for strategy tests.

use crate::domain::{try_parse_cards, Card, PlayerView, Side, TrickRecord};

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// AI view with `hand`, the card to follow (if any) and the trick number.
/// Earlier tricks are left empty.
pub fn view(hand: &[&str], lead: Option<&str>, trick_no: u8) -> PlayerView {
    view_with_tricks(hand, lead, trick_no, Vec::new())
}

pub fn view_with_tricks(
    hand: &[&str],
    lead: Option<&str>,
    trick_no: u8,
    tricks: Vec<TrickRecord>,
) -> PlayerView {
    let hand = try_parse_cards(hand).expect("hardcoded valid card tokens");
    let opponent_hand_size = match lead {
        Some(_) => hand.len().saturating_sub(1),
        None => hand.len(),
    };
    PlayerView {
        side: Side::Ai,
        hand,
        opponent_hand_size,
        lead_card: lead.map(card),
        trick_no,
        round_no: 1,
        tricks,
        scores: [0, 0],
        score_goal: 5,
    }
}

/// A resolved trick; the winner follows the normal rule.
pub fn trick(trick_no: u8, lead: &str, follow: &str, lead_player: Side) -> TrickRecord {
    let lead_card = card(lead);
    let follow_card = card(follow);
    let winner = if crate::domain::follow_wins(lead_card, follow_card) {
        lead_player.other()
    } else {
        lead_player
    };
    TrickRecord {
        trick_no,
        lead_card,
        follow_card,
        lead_player,
        winner,
    }
}
