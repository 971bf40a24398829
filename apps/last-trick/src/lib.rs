#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod presentation;
pub mod services;
pub mod settings;
pub mod telemetry;


// Re-exports for public API
pub use ai::{create_ai, AiError, AiFailureMode, AiPlayer, Difficulty};
pub use domain::{Card, GameSnapshot, GameState, Phase, PlayCardResult, PlayerView, Side};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use services::game_flow::{Advance, GameSession, NextAction};
pub use settings::{Settings, SettingsStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
