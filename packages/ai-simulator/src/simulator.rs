//! In-memory match simulator: two AIs, one in each seat, playing whole
//! matches through the same domain operations the game uses.

use last_trick::ai::AiPlayer;
use last_trick::domain::{
    clear_trick, play_card, redeal_available, redeal_hand, start_new_match, start_new_round,
    GameState, Phase, Side, TrickRecord,
};
use last_trick::AppError;
use tracing::debug;

/// Safety valve against a match that never reaches its goal.
const MAX_ROUNDS: u32 = 10_000;

/// One finished round.
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub round_no: u32,
    pub leader: Side,
    /// Whether each seat threw in its starting hand.
    pub redealt: [bool; 2],
    pub tricks: Vec<TrickRecord>,
    pub point_to: Side,
}

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub final_scores: [u32; 2],
    pub winner: Side,
    pub rounds: Vec<RoundRecord>,
}

pub struct Simulator {
    match_seed: u64,
    score_goal: u8,
}

impl Simulator {
    pub fn new(match_seed: u64, score_goal: u8) -> Self {
        Self {
            match_seed,
            score_goal,
        }
    }

    /// Play a match. `ais[0]` sits in the player seat and `ais[1]` in the AI
    /// seat. The player seat always takes a redeal it is offered; the AI seat
    /// redeals automatically at the deal.
    pub fn simulate_match(&self, ais: &[Box<dyn AiPlayer>; 2]) -> Result<MatchResult, AppError> {
        let mut state = GameState::new(self.score_goal)?;
        let mut start = start_new_match(&mut state, self.match_seed)?;
        let mut rounds = Vec::new();

        loop {
            let mut redealt = [false, start.ai_redealt];
            if redeal_available(&state, Side::Player) {
                redeal_hand(&mut state, Side::Player)?;
                redealt[Side::Player.index()] = true;
            }

            while state.is_round_active() {
                if clear_trick(&mut state) {
                    continue;
                }
                let side = state.current_player;
                let view = state.view_for(side);
                let card = ais[side.index()].choose_play(&view)?;
                play_card(&mut state, side, card)?;
            }

            let point_to = state
                .last_trick()
                .map(|t| t.winner)
                .ok_or_else(|| AppError::internal("round ended without tricks"))?;
            debug!(
                round_no = state.round_no,
                point_to = point_to.name(),
                scores = ?state.scores,
                "Simulated round"
            );
            rounds.push(RoundRecord {
                round_no: state.round_no,
                leader: start.leader,
                redealt,
                tricks: state.tricks.clone(),
                point_to,
            });

            if state.phase == Phase::MatchOver {
                break;
            }
            if state.round_no >= MAX_ROUNDS {
                return Err(AppError::internal(format!(
                    "match exceeded {MAX_ROUNDS} rounds"
                )));
            }
            clear_trick(&mut state);
            start = start_new_round(&mut state)?;
        }

        let winner = state
            .match_winner()
            .ok_or_else(|| AppError::internal("match over without a winner"))?;
        Ok(MatchResult {
            final_scores: state.scores,
            winner,
            rounds,
        })
    }
}
