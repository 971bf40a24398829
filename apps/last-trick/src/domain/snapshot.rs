//! Render model handed to the presentation layer after every mutation.

use serde::Serialize;

use crate::domain::redeal::redeal_available;
use crate::domain::state::{GameState, Phase, Side, TrickRecord};
use crate::domain::tricks::can_play_card;
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandCard {
    pub card: Card,
    pub playable: bool,
}

/// Everything the human's screen shows. The AI hand is a count only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub round_no: u32,
    pub trick_no: u8,
    pub player_hand: Vec<HandCard>,
    pub ai_card_count: usize,
    pub lead_card: Option<Card>,
    pub follow_card: Option<Card>,
    pub lead_player: Side,
    pub current_player: Side,
    pub player_score: u32,
    pub ai_score: u32,
    pub score_goal: u8,
    pub last_trick: Option<TrickRecord>,
    pub redeal_offered: bool,
    pub match_winner: Option<Side>,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player_hand = state
            .hand(Side::Player)
            .iter()
            .map(|&card| HandCard {
                card,
                playable: can_play_card(state, Side::Player, card),
            })
            .collect();
        Self {
            phase: state.phase,
            round_no: state.round_no,
            trick_no: state.trick_no,
            player_hand,
            ai_card_count: state.hand(Side::Ai).len(),
            lead_card: state.lead_card,
            follow_card: state.follow_card,
            lead_player: state.lead_player,
            current_player: state.current_player,
            player_score: state.score(Side::Player),
            ai_score: state.score(Side::Ai),
            score_goal: state.score_goal,
            last_trick: state.last_trick().copied(),
            redeal_offered: redeal_available(state, Side::Player),
            match_winner: state.match_winner(),
        }
    }

    pub fn is_player_turn(&self) -> bool {
        self.current_player == Side::Player
            && matches!(self.phase, Phase::LeadPending | Phase::FollowPending)
    }
}
