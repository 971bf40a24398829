//! Observable state for one side of the table.
//!
//! AI strategies receive a `PlayerView` and nothing else: their own hand, the
//! card they must answer (if any), counters, scores and the public history of
//! resolved tricks. The opponent's hand is visible only as a count.

use crate::domain::rules::is_final_trick;
use crate::domain::state::{GameState, Phase, Side, TrickRecord};
use crate::domain::tricks::legal_from_hand;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub side: Side,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,
    /// The card to follow, when this side is answering a lead.
    pub lead_card: Option<Card>,
    pub trick_no: u8,
    pub round_no: u32,
    /// Resolved tricks of this round, oldest first.
    pub tricks: Vec<TrickRecord>,
    /// Scores indexed by `Side::index`.
    pub scores: [u32; 2],
    pub score_goal: u8,
}

impl PlayerView {
    pub fn from_state(state: &GameState, side: Side) -> Self {
        let lead_card = match state.phase {
            Phase::FollowPending if state.lead_player != side => state.lead_card,
            _ => None,
        };
        Self {
            side,
            hand: state.hand(side).to_vec(),
            opponent_hand_size: state.hand(side.other()).len(),
            lead_card,
            trick_no: state.trick_no,
            round_no: state.round_no,
            tricks: state.tricks.clone(),
            scores: state.scores,
            score_goal: state.score_goal,
        }
    }

    /// Legal plays from this side's hand, in hand order.
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_from_hand(&self.hand, self.lead_card)
    }

    pub fn is_final_trick(&self) -> bool {
        is_final_trick(self.trick_no)
    }

    /// Every card already played in resolved tricks this round.
    pub fn played_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.tricks
            .iter()
            .flat_map(|t| [t.lead_card, t.follow_card])
    }
}

impl GameState {
    /// Observable state for `side`.
    pub fn view_for(&self, side: Side) -> PlayerView {
        PlayerView::from_state(self, side)
    }
}
