use serde::{Deserialize, Serialize};

use crate::domain::dealing::Deck;
use crate::domain::rules::{score_goal_is_valid, SIDES};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub const BOTH: [Side; SIDES] = [Side::Player, Side::Ai];

    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Round/trick progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing dealt yet.
    Idle,
    /// No card played in the current trick.
    LeadPending,
    /// Lead card played, follow outstanding.
    FollowPending,
    /// Both cards played and the winner computed; slots still populated
    /// until `clear_trick`.
    TrickResolved,
    /// Trick 5 resolved; the match continues with another round.
    RoundOver,
    /// Trick 5 resolved and a score reached the goal.
    MatchOver,
}

impl Phase {
    /// Phases in which a card may be played.
    pub const fn accepts_play(self) -> bool {
        matches!(self, Phase::LeadPending | Phase::FollowPending)
    }
}

/// Immutable record of a resolved trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub trick_no: u8,
    pub lead_card: Card,
    pub follow_card: Card,
    pub lead_player: Side,
    pub winner: Side,
}

impl TrickRecord {
    pub fn card_of(&self, side: Side) -> Card {
        if side == self.lead_player {
            self.lead_card
        } else {
            self.follow_card
        }
    }

    /// Whether the follower played a different suit than the lead.
    pub fn follower_was_void(&self) -> bool {
        self.follow_card.suit != self.lead_card.suit
    }
}

/// Aggregate root for a match: deck, hands, in-flight trick, history, scores.
///
/// Created once per session and owned by the caller. `tricks::play_card` is
/// the only operation that moves cards out of hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    /// Remaining cards of the current round's deck.
    pub deck: Deck,
    /// Hands indexed by `Side::index`, in insertion order.
    pub hands: [Vec<Card>; SIDES],
    /// Cards thrown away by redeals this round.
    pub discards: Vec<Card>,
    pub lead_card: Option<Card>,
    pub follow_card: Option<Card>,
    /// Side leading the current trick.
    pub lead_player: Side,
    /// Side expected to act.
    pub current_player: Side,
    /// Current trick number within the round (1-based; 0 before the first deal).
    pub trick_no: u8,
    /// Rounds started in this match (1-based once dealt).
    pub round_no: u32,
    /// Resolved tricks of the current round, oldest first.
    pub tricks: Vec<TrickRecord>,
    /// Match points indexed by `Side::index`.
    pub scores: [u32; SIDES],
    pub score_goal: u8,
    /// Whether each side has used (or declined) its redeal this round.
    pub redeal_closed: [bool; SIDES],
    /// Seed for the current match.
    pub match_seed: u64,
    /// Leader of the most recent round, for alternation.
    pub last_round_leader: Option<Side>,
}

impl GameState {
    /// Create an idle game with the given score goal (1..=20).
    pub fn new(score_goal: u8) -> Result<Self, DomainError> {
        if !score_goal_is_valid(score_goal) {
            return Err(DomainError::validation(
                ValidationKind::InvalidScoreGoal,
                format!("Score goal must be 1..=20, got {score_goal}"),
            ));
        }
        Ok(Self {
            phase: Phase::Idle,
            deck: Deck::from_cards(Vec::new()),
            hands: [Vec::new(), Vec::new()],
            discards: Vec::new(),
            lead_card: None,
            follow_card: None,
            lead_player: Side::Player,
            current_player: Side::Player,
            trick_no: 0,
            round_no: 0,
            tricks: Vec::new(),
            scores: [0; SIDES],
            score_goal,
            redeal_closed: [false; SIDES],
            match_seed: 0,
            last_round_leader: None,
        })
    }

    pub fn hand(&self, side: Side) -> &[Card] {
        &self.hands[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    /// Cards committed to the current, not yet resolved, trick.
    pub fn in_flight_cards(&self) -> usize {
        match self.phase {
            Phase::FollowPending => 1,
            _ => 0,
        }
    }

    pub fn resolved_tricks(&self) -> usize {
        self.tricks.len()
    }

    pub fn last_trick(&self) -> Option<&TrickRecord> {
        self.tricks.last()
    }

    /// Whether a round is being played (cards can still move this round).
    pub fn is_round_active(&self) -> bool {
        matches!(
            self.phase,
            Phase::LeadPending | Phase::FollowPending | Phase::TrickResolved
        )
    }

    pub fn is_match_over(&self) -> bool {
        self.phase == Phase::MatchOver
    }

    /// The side that reached the goal, once the match is over.
    pub fn match_winner(&self) -> Option<Side> {
        if !self.is_match_over() {
            return None;
        }
        Side::BOTH
            .into_iter()
            .find(|&side| self.score(side) >= self.score_goal as u32)
    }
}

pub fn require_lead_card(state: &GameState, ctx: &'static str) -> Result<Card, DomainError> {
    state
        .lead_card
        .ok_or_else(|| DomainError::invariant(format!("lead_card must be set ({ctx})")))
}

pub fn require_follow_card(state: &GameState, ctx: &'static str) -> Result<Card, DomainError> {
    state
        .follow_card
        .ok_or_else(|| DomainError::invariant(format!("follow_card must be set ({ctx})")))
}
