use tracing::info;

use super::GameSession;
use crate::domain::seed_derivation::derive_match_seed;
use crate::domain::{
    clear_trick, start_new_match, start_new_match_with_deck, start_new_round, Deck, Phase,
    RoundStart, Side,
};
use crate::error::AppError;

/// What `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Nothing to advance; someone still has to play.
    Idle,
    /// A resolved trick was cleared; the winner leads next.
    TrickCleared,
    RoundStarted(RoundStart),
    /// The match is over; `start_match` begins a rematch.
    MatchOver { winner: Side },
}

impl GameSession {
    /// Zero the scores and deal the first round of a new match.
    pub fn start_match(&mut self) -> Result<RoundStart, AppError> {
        self.match_no += 1;
        let match_seed = derive_match_seed(self.base_seed, self.match_no);
        let start = start_new_match(&mut self.state, match_seed)?;
        info!(
            match_no = self.match_no,
            difficulty = %self.difficulty,
            score_goal = self.state.score_goal,
            leader = start.leader.name(),
            ai_redealt = start.ai_redealt,
            "Match started"
        );
        Ok(start)
    }

    /// Start a match whose first round is dealt from `deck` (player's five
    /// cards first, then the AI's). Later rounds shuffle as usual.
    pub fn start_match_with_deck(&mut self, deck: Deck) -> Result<RoundStart, AppError> {
        self.match_no += 1;
        let match_seed = derive_match_seed(self.base_seed, self.match_no);
        let start = start_new_match_with_deck(&mut self.state, match_seed, deck)?;
        info!(
            match_no = self.match_no,
            difficulty = %self.difficulty,
            leader = start.leader.name(),
            "Match started from a prepared deck"
        );
        Ok(start)
    }

    /// Move past a resolved trick or a finished round.
    ///
    /// A finished round deals the next one unless the match is over; a
    /// finished match never starts another round on its own.
    pub fn advance(&mut self) -> Result<Advance, AppError> {
        match self.state.phase {
            Phase::TrickResolved => {
                clear_trick(&mut self.state);
                Ok(Advance::TrickCleared)
            }
            Phase::RoundOver => {
                clear_trick(&mut self.state);
                let start = start_new_round(&mut self.state)?;
                info!(
                    round_no = start.round_no,
                    leader = start.leader.name(),
                    player_score = self.state.score(Side::Player),
                    ai_score = self.state.score(Side::Ai),
                    "Round started"
                );
                Ok(Advance::RoundStarted(start))
            }
            Phase::MatchOver => {
                clear_trick(&mut self.state);
                let winner = self.state.match_winner().ok_or_else(|| {
                    AppError::internal("match over without a winner")
                })?;
                Ok(Advance::MatchOver { winner })
            }
            Phase::Idle | Phase::LeadPending | Phase::FollowPending => Ok(Advance::Idle),
        }
    }
}
