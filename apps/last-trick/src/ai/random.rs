//! Random AI player: uniform choice among legal moves. Backs the Easy
//! difficulty and the fallback path when another strategy misbehaves.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{legal_plays_or_err, AiError, AiPlayer};
use crate::domain::{Card, PlayerView};

/// AI that makes random legal moves.
///
/// The RNG sits behind a `Mutex` because `choose_play` takes `&self`. A seed
/// makes the sequence reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal_plays = legal_plays_or_err(view)?;

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
