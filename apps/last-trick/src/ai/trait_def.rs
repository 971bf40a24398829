//! AI player trait definition.

use std::fmt;

use crate::domain::{Card, PlayerView};

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for AI players.
///
/// Implementations receive the state visible to their side and must choose a
/// legal card. `view.legal_plays()` already applies the follow-suit rule.
pub trait AiPlayer: Send + Sync {
    /// Choose a card to play.
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}

/// Shared precondition: the legal plays, or `InvalidMove` when there are none.
pub(crate) fn legal_plays_or_err(view: &PlayerView) -> Result<Vec<Card>, AiError> {
    let legal = view.legal_plays();
    if legal.is_empty() {
        return Err(AiError::InvalidMove("No legal plays available".into()));
    }
    Ok(legal)
}
