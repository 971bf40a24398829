//! Game flow orchestration - bridges the pure domain with an AI opponent and
//! the human's choices.
//!
//! `GameSession` owns one `GameState` and drives it through fine-grained
//! transitions (`human_play`, `run_ai_turn`, `advance`, ...). Frontends poll
//! `next_action` and render `snapshot` after every call.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use round_lifecycle::Advance;

use crate::ai::{create_ai, AiFailureMode, AiPlayer, Difficulty, RandomPlayer};
use crate::domain::redeal::redeal_available;
use crate::domain::{GameSnapshot, GameState, Phase, Side};
use crate::error::AppError;
use crate::settings::Settings;

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// No match dealt yet.
    StartMatch,
    /// The human may accept or decline a redeal before trick 1.
    HumanRedeal,
    HumanPlay,
    AiPlay,
    /// A resolved trick or finished round is on the table.
    Advance,
    MatchOver,
}

pub struct GameSession {
    state: GameState,
    difficulty: Difficulty,
    ai: Box<dyn AiPlayer>,
    fallback: RandomPlayer,
    failure_mode: AiFailureMode,
    base_seed: u64,
    match_no: u32,
}

impl GameSession {
    /// A session for the given settings. `seed` makes every deal and every
    /// Easy AI choice reproducible; without one the OS supplies entropy.
    pub fn new(settings: &Settings, seed: Option<u64>) -> Result<Self, AppError> {
        let base_seed = seed.unwrap_or_else(|| StdRng::from_os_rng().random());
        Ok(Self {
            state: GameState::new(settings.score_goal)?,
            difficulty: settings.difficulty,
            ai: create_ai(settings.difficulty, Some(base_seed)),
            fallback: RandomPlayer::new(Some(base_seed.wrapping_add(1))),
            failure_mode: AiFailureMode::FallbackRandom,
            base_seed,
            match_no: 0,
        })
    }

    /// Replace the AI, e.g. with a scripted one in tests.
    pub fn with_ai(mut self, ai: Box<dyn AiPlayer>) -> Self {
        self.ai = ai;
        self
    }

    pub fn with_failure_mode(mut self, mode: AiFailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    /// Whether the human still has an open redeal offer this round.
    pub fn redeal_pending(&self) -> bool {
        redeal_available(&self.state, Side::Player)
    }

    pub fn next_action(&self) -> NextAction {
        match self.state.phase {
            Phase::Idle => NextAction::StartMatch,
            Phase::TrickResolved | Phase::RoundOver => NextAction::Advance,
            Phase::MatchOver => NextAction::MatchOver,
            Phase::LeadPending | Phase::FollowPending => {
                if self.redeal_pending() {
                    NextAction::HumanRedeal
                } else if self.state.current_player == Side::Player {
                    NextAction::HumanPlay
                } else {
                    NextAction::AiPlay
                }
            }
        }
    }
}
