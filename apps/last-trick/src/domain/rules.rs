use std::ops::RangeInclusive;

use crate::domain::cards_logic::max_value;
use crate::domain::Card;

pub const SIDES: usize = 2;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 5;
/// Tricks per round; only the last one scores.
pub const TRICKS_PER_ROUND: u8 = 5;
pub const SCORE_GOAL_RANGE: RangeInclusive<u8> = 1..=20;
pub const DEFAULT_SCORE_GOAL: u8 = 5;
/// A hand whose best card is at most this value may be redealt.
pub const REDEAL_MAX_VALUE: u8 = 9;

/// Whether `trick_no` is the scoring trick of the round.
pub fn is_final_trick(trick_no: u8) -> bool {
    trick_no == TRICKS_PER_ROUND
}

pub fn score_goal_is_valid(goal: u8) -> bool {
    SCORE_GOAL_RANGE.contains(&goal)
}

/// A hand qualifies for redeal iff it holds no 10, face card or ace.
/// An empty hand never qualifies.
pub fn hand_qualifies_for_redeal(hand: &[Card]) -> bool {
    max_value(hand).is_some_and(|v| v <= REDEAL_MAX_VALUE)
}
