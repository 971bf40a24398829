//! AI opponents.
//!
//! This module provides:
//! - the `AiPlayer` trait, one implementation per `Difficulty`
//! - round memory (played cards, opponent voids) shared by the stronger AIs
//! - a static registry and `create_ai` for construction

mod difficulty;
mod grandmaster;
mod heuristic;
pub mod memory;
mod random;
pub mod registry;
mod strategic;
mod tactics;
mod trait_def;

#[cfg(test)]
mod test_views;

pub use difficulty::Difficulty;
pub use grandmaster::Grandmaster;
pub use heuristic::Heuristic;
pub use memory::{update_opponent_voids, RoundMemory};
pub use random::RandomPlayer;
pub use strategic::Strategic;
pub use trait_def::{AiError, AiPlayer};
use tracing::warn;

/// AI failure mode - how to handle AI errors or illegal choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiFailureMode {
    /// Panic on errors (for tests)
    Panic,
    /// Fall back to random play
    FallbackRandom,
}

/// Create the AI registered for `difficulty`. The seed only affects Easy.
pub fn create_ai(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn AiPlayer> {
    match registry::for_difficulty(difficulty) {
        Some(factory) => (factory.make)(seed),
        None => {
            warn!(%difficulty, "No AI registered for difficulty; using RandomPlayer");
            Box::new(RandomPlayer::new(seed))
        }
    }
}
