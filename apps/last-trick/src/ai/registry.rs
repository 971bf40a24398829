//! How to register an AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry with a stable `name`, `version` and the
//!    difficulty it backs.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use crate::ai::{AiPlayer, Difficulty, Grandmaster, Heuristic, RandomPlayer, Strategic};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub difficulty: Difficulty,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        difficulty: Difficulty::Easy,
        make: make_random_player,
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        difficulty: Difficulty::Medium,
        make: make_heuristic,
    },
    AiFactory {
        name: Strategic::NAME,
        version: Strategic::VERSION,
        difficulty: Difficulty::Hard,
        make: make_strategic,
    },
    AiFactory {
        name: Grandmaster::NAME,
        version: Grandmaster::VERSION,
        difficulty: Difficulty::Grandmaster,
        make: make_grandmaster,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// The factory backing a difficulty level.
pub fn for_difficulty(difficulty: Difficulty) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.difficulty == difficulty)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_heuristic(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(Heuristic::new())
}

fn make_strategic(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(Strategic::new())
}

fn make_grandmaster(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(Grandmaster::new())
}
