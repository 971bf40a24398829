//! One-time replacement of a weak starting hand.
//!
//! After the deal and before the first card of the round, a side whose hand
//! qualifies (no card above 9) may throw it away and take the next five cards
//! from the remaining deck. The deck is not reshuffled; a stacked deck too
//! short for another five cards offers no redeal.

use crate::domain::rules::{hand_qualifies_for_redeal, HAND_SIZE};
use crate::domain::state::{GameState, Phase, Side};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedealOutcome {
    pub side: Side,
    pub discarded: Vec<Card>,
    pub new_hand: Vec<Card>,
}

/// Whether `side` may still redeal this round.
pub fn redeal_available(state: &GameState, side: Side) -> bool {
    state.phase == Phase::LeadPending
        && state.tricks.is_empty()
        && state.lead_card.is_none()
        && !state.redeal_closed[side.index()]
        && state.hand(side).len() == HAND_SIZE
        && state.deck.len() >= HAND_SIZE
        && hand_qualifies_for_redeal(state.hand(side))
}

/// Replace `side`'s hand with the next five cards of the deck.
pub fn redeal_hand(state: &mut GameState, side: Side) -> Result<RedealOutcome, DomainError> {
    if !redeal_available(state, side) {
        return Err(DomainError::validation(
            ValidationKind::RedealNotAllowed,
            format!("Redeal not available for {}", side.name()),
        ));
    }
    let new_hand = state.deck.deal(HAND_SIZE)?;
    let discarded = std::mem::replace(&mut state.hands[side.index()], new_hand.clone());
    state.discards.extend(discarded.iter().copied());
    state.redeal_closed[side.index()] = true;
    Ok(RedealOutcome {
        side,
        discarded,
        new_hand,
    })
}

/// Turn down the redeal offer for this round.
pub fn decline_redeal(state: &mut GameState, side: Side) {
    state.redeal_closed[side.index()] = true;
}
