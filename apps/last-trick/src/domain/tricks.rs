use tracing::debug;

use crate::domain::rules::is_final_trick;
use crate::domain::state::{require_follow_card, require_lead_card, GameState, Phase, Side, TrickRecord};
use crate::domain::{follow_wins, hand_has_suit, Card};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed a trick.
    pub trick_completed: bool,
    /// The resolved trick, if one was completed.
    pub trick: Option<TrickRecord>,
    /// Trick number after this play (advanced when a non-final trick resolves).
    pub trick_no_after: u8,
    /// Phase after this play.
    pub phase_after: Phase,
    /// Side awarded a match point, if trick 5 resolved.
    pub point_to: Option<Side>,
}

impl PlayCardResult {
    pub fn round_over(&self) -> bool {
        matches!(self.phase_after, Phase::RoundOver | Phase::MatchOver)
    }

    pub fn match_over(&self) -> bool {
        self.phase_after == Phase::MatchOver
    }
}

/// Compute the cards `side` may play, independent of turn enforcement.
///
/// Leading: the whole hand. Following: the lead-suit cards when the hand has
/// any, otherwise the whole hand. Empty outside the playing phases. Cards keep
/// hand order.
pub fn valid_cards(state: &GameState, side: Side) -> Vec<Card> {
    if !state.phase.accepts_play() {
        return Vec::new();
    }
    let hand = state.hand(side);
    legal_from_hand(hand, state.lead_card.filter(|_| side != state.lead_player))
}

/// Follow-suit rule on a bare hand. `lead` is the card to follow, if any.
pub fn legal_from_hand(hand: &[Card], lead: Option<Card>) -> Vec<Card> {
    if let Some(lead) = lead {
        if hand_has_suit(hand, lead.suit) {
            return hand.iter().copied().filter(|c| c.suit == lead.suit).collect();
        }
    }
    hand.to_vec()
}

/// Whether `side` may play `card` right now. Fails closed.
pub fn can_play_card(state: &GameState, side: Side, card: Card) -> bool {
    check_play(state, side, card).is_ok()
}

fn check_play(state: &GameState, side: Side, card: Card) -> Result<(), DomainError> {
    if !state.phase.accepts_play() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Cannot play in phase {:?}", state.phase),
        ));
    }
    if state.current_player != side {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }
    if !state.hand(side).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    }
    if !valid_cards(state, side).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            "Must follow suit",
        ));
    }
    Ok(())
}

/// Play a card into the current trick, enforcing phase, turn and suit-following.
///
/// On error the state is unchanged and the same side should be asked again.
/// A follow play evaluates the trick before returning.
pub fn play_card(
    state: &mut GameState,
    side: Side,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    check_play(state, side, card)?;

    let pos = state.hands[side.index()]
        .iter()
        .position(|&c| c == card)
        .ok_or_else(|| DomainError::invariant("checked card vanished from hand"))?;

    // First card of the round closes every pending redeal offer.
    state.redeal_closed = [true; 2];

    match state.phase {
        Phase::LeadPending => {
            state.hands[side.index()].remove(pos);
            state.lead_card = Some(card);
            state.lead_player = side;
            state.current_player = side.other();
            state.phase = Phase::FollowPending;
            Ok(PlayCardResult {
                trick_completed: false,
                trick: None,
                trick_no_after: state.trick_no,
                phase_after: state.phase,
                point_to: None,
            })
        }
        Phase::FollowPending => {
            state.hands[side.index()].remove(pos);
            state.follow_card = Some(card);
            let trick = evaluate_trick(state)?;
            let point_to = is_final_trick(trick.trick_no).then_some(trick.winner);
            Ok(PlayCardResult {
                trick_completed: true,
                trick: Some(trick),
                trick_no_after: state.trick_no,
                phase_after: state.phase,
                point_to,
            })
        }
        other => Err(DomainError::invariant(format!(
            "play accepted in phase {other:?}"
        ))),
    }
}

/// Resolve the trick whose lead and follow cards are both on the table.
///
/// The higher card of the lead suit wins; an off-suit follow always loses.
/// Trick 5 awards a match point and ends the round; earlier tricks hand the
/// lead to the winner and advance the trick number.
pub fn evaluate_trick(state: &mut GameState) -> Result<TrickRecord, DomainError> {
    if state.phase != Phase::FollowPending {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No trick awaiting evaluation",
        ));
    }
    let lead_card = require_lead_card(state, "evaluate_trick")?;
    let follow_card = require_follow_card(state, "evaluate_trick")?;

    let winner = if follow_wins(lead_card, follow_card) {
        state.lead_player.other()
    } else {
        state.lead_player
    };

    let record = TrickRecord {
        trick_no: state.trick_no,
        lead_card,
        follow_card,
        lead_player: state.lead_player,
        winner,
    };
    state.tricks.push(record);
    debug!(
        round_no = state.round_no,
        trick_no = record.trick_no,
        lead = %lead_card,
        follow = %follow_card,
        winner = winner.name(),
        "Trick resolved"
    );

    state.lead_player = winner;
    state.current_player = winner;

    if is_final_trick(record.trick_no) {
        state.scores[winner.index()] += 1;
        state.phase = if state.score(winner) >= state.score_goal as u32 {
            Phase::MatchOver
        } else {
            Phase::RoundOver
        };
    } else {
        state.trick_no += 1;
        state.phase = Phase::TrickResolved;
    }

    Ok(record)
}

/// Clear both card slots of a resolved trick.
///
/// Returns false (and does nothing) while a trick is still incomplete.
pub fn clear_trick(state: &mut GameState) -> bool {
    match state.phase {
        Phase::TrickResolved => {
            state.lead_card = None;
            state.follow_card = None;
            state.phase = Phase::LeadPending;
            true
        }
        Phase::RoundOver | Phase::MatchOver => {
            state.lead_card = None;
            state.follow_card = None;
            true
        }
        Phase::Idle | Phase::LeadPending | Phase::FollowPending => false,
    }
}
