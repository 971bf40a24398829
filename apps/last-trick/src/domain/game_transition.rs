//! Match and round lifecycle: dealing, leader rotation, AI redeal.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::dealing::Deck;
use crate::domain::redeal::{redeal_available, redeal_hand};
use crate::domain::rules::{DECK_SIZE, HAND_SIZE};
use crate::domain::seed_derivation::{derive_dealing_seed, derive_leader_seed};
use crate::domain::state::{GameState, Phase, Side};
use crate::errors::domain::{DomainError, ValidationKind};

/// What happened when a round was dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStart {
    pub round_no: u32,
    pub leader: Side,
    /// The AI hand qualified and was replaced.
    pub ai_redealt: bool,
}

/// First leader of a match: a coin flip derived from the match seed.
pub fn first_leader(match_seed: u64) -> Side {
    let mut rng = ChaCha8Rng::seed_from_u64(derive_leader_seed(match_seed));
    if rng.random_bool(0.5) {
        Side::Player
    } else {
        Side::Ai
    }
}

/// Leader for the next round: random at match start, then alternating.
pub fn next_round_leader(state: &GameState) -> Side {
    match state.last_round_leader {
        None => first_leader(state.match_seed),
        Some(prev) => prev.other(),
    }
}

/// Zero both scores and deal the first round of a new match.
pub fn start_new_match(state: &mut GameState, match_seed: u64) -> Result<RoundStart, DomainError> {
    reset_match(state, match_seed);
    start_new_round(state)
}

/// Like `start_new_match`, but the first round is dealt from `deck`.
pub fn start_new_match_with_deck(
    state: &mut GameState,
    match_seed: u64,
    deck: Deck,
) -> Result<RoundStart, DomainError> {
    check_deck(&deck)?;
    reset_match(state, match_seed);
    start_round_with_deck(state, deck)
}

fn reset_match(state: &mut GameState, match_seed: u64) {
    state.scores = [0; 2];
    state.round_no = 0;
    state.match_seed = match_seed;
    state.last_round_leader = None;
    state.phase = Phase::Idle;
}

fn check_deck(deck: &Deck) -> Result<(), DomainError> {
    if deck.len() < 2 * HAND_SIZE || deck.len() > DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "deck of {} cards cannot start a round",
            deck.len()
        )));
    }
    if !deck.all_distinct() {
        return Err(DomainError::invariant("deck contains a repeated card"));
    }
    Ok(())
}

/// Shuffle a fresh deck and deal the next round, keeping scores.
pub fn start_new_round(state: &mut GameState) -> Result<RoundStart, DomainError> {
    let seed = derive_dealing_seed(state.match_seed, state.round_no + 1);
    start_round_with_deck(state, Deck::shuffled(seed))
}

/// Deal the next round from `deck` in FIFO order: five to the player, then
/// five to the AI. The AI's hand is redealt at once if it qualifies.
pub fn start_round_with_deck(state: &mut GameState, deck: Deck) -> Result<RoundStart, DomainError> {
    if state.phase == Phase::MatchOver {
        return Err(DomainError::validation(
            ValidationKind::MatchOver,
            "Match is over; start a new match",
        ));
    }
    if state.is_round_active() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Round still in progress",
        ));
    }
    check_deck(&deck)?;

    let leader = next_round_leader(state);

    state.deck = deck;
    let player_hand = state.deck.deal(HAND_SIZE)?;
    let ai_hand = state.deck.deal(HAND_SIZE)?;
    state.hands = [player_hand, ai_hand];
    state.discards.clear();
    state.lead_card = None;
    state.follow_card = None;
    state.tricks.clear();
    state.trick_no = 1;
    state.round_no += 1;
    state.redeal_closed = [false; 2];
    state.lead_player = leader;
    state.current_player = leader;
    state.last_round_leader = Some(leader);
    state.phase = Phase::LeadPending;

    let ai_redealt = if redeal_available(state, Side::Ai) {
        redeal_hand(state, Side::Ai)?;
        true
    } else {
        state.redeal_closed[Side::Ai.index()] = true;
        false
    };

    Ok(RoundStart {
        round_no: state.round_no,
        leader,
        ai_redealt,
    })
}
