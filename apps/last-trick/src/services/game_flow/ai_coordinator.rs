use tracing::{debug, info, warn};

use super::GameSession;
use crate::ai::{AiError, AiFailureMode, AiPlayer};
use crate::domain::{can_play_card, play_card, Card, PlayCardResult, Side};
use crate::error::AppError;

impl GameSession {
    /// Let the AI play if it is its turn.
    ///
    /// Returns `Ok(None)` when the AI has nothing to do. Every choice is
    /// checked with `can_play_card`; a failed or illegal choice is replaced
    /// by a random legal card unless the session surfaces AI failures.
    pub fn run_ai_turn(&mut self) -> Result<Option<PlayCardResult>, AppError> {
        if !self.state.phase.accepts_play() || self.state.current_player != Side::Ai {
            return Ok(None);
        }
        self.require_redeal_resolved()?;

        let view = self.state.view_for(Side::Ai);
        let card = match self.checked_choice(self.ai.as_ref(), &view) {
            Ok(card) => card,
            Err(e) => match self.failure_mode {
                AiFailureMode::Panic => return Err(e.into()),
                AiFailureMode::FallbackRandom => {
                    warn!(
                        round_no = self.state.round_no,
                        trick_no = self.state.trick_no,
                        difficulty = %self.difficulty,
                        error = %e,
                        "AI choice rejected; falling back to random play"
                    );
                    self.checked_choice(&self.fallback, &view)?
                }
            },
        };

        let result = play_card(&mut self.state, Side::Ai, card)?;
        debug!(
            round_no = self.state.round_no,
            trick_no = self.state.trick_no,
            %card,
            "AI played"
        );
        if let Some(side) = result.point_to {
            info!(
                round_no = self.state.round_no,
                side = side.name(),
                "Final trick won"
            );
        }
        Ok(Some(result))
    }

    fn checked_choice(
        &self,
        ai: &dyn AiPlayer,
        view: &crate::domain::PlayerView,
    ) -> Result<Card, AiError> {
        let card = ai.choose_play(view)?;
        if !can_play_card(&self.state, Side::Ai, card) {
            return Err(AiError::InvalidMove(format!("{card} is not playable")));
        }
        Ok(card)
    }
}
