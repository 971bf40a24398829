use tracing::{debug, info};

use super::GameSession;
use crate::domain::{decline_redeal, play_card, redeal_hand, Card, PlayCardResult, RedealOutcome, Side};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameSession {
    /// Play a card for the human.
    ///
    /// Illegal plays come back as a validation error with the state untouched;
    /// the caller prompts again.
    pub fn human_play(&mut self, card: Card) -> Result<PlayCardResult, AppError> {
        self.require_redeal_resolved()?;
        debug!(
            round_no = self.state.round_no,
            trick_no = self.state.trick_no,
            %card,
            "Human plays"
        );
        let result = play_card(&mut self.state, Side::Player, card)?;
        if let Some(side) = result.point_to {
            info!(
                round_no = self.state.round_no,
                side = side.name(),
                "Final trick won"
            );
        }
        Ok(result)
    }

    /// Take the offered redeal.
    pub fn accept_redeal(&mut self) -> Result<RedealOutcome, AppError> {
        let outcome = redeal_hand(&mut self.state, Side::Player)?;
        info!(round_no = self.state.round_no, "Player redealt");
        Ok(outcome)
    }

    /// Keep the dealt hand.
    pub fn decline_redeal(&mut self) {
        decline_redeal(&mut self.state, Side::Player);
        debug!(round_no = self.state.round_no, "Player declined redeal");
    }

    pub(super) fn require_redeal_resolved(&self) -> Result<(), AppError> {
        if self.redeal_pending() {
            return Err(DomainError::validation(
                ValidationKind::Other("REDEAL_PENDING".into()),
                "Accept or decline the redeal before trick 1",
            )
            .into());
        }
        Ok(())
    }
}
