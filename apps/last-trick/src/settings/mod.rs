//! Player preferences, loaded and saved through a `SettingsStore`.
//!
//! Game logic never reads settings; the session copies what it needs
//! (difficulty, score goal) when a match starts.

mod store;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

pub use store::{InMemoryStore, JsonFileStore, SettingsStore};

use crate::ai::Difficulty;
use crate::domain::rules::{score_goal_is_valid, DEFAULT_SCORE_GOAL, SCORE_GOAL_RANGE};
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_CARD_BACK: &str = "classic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    #[serde(deserialize_with = "clamped_goal")]
    pub score_goal: u8,
    pub card_back: String,
    pub sound_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            score_goal: DEFAULT_SCORE_GOAL,
            card_back: DEFAULT_CARD_BACK.to_string(),
            sound_effects: true,
        }
    }
}

impl Settings {
    /// Change the score goal. An out-of-range goal is rejected and the last
    /// valid value kept.
    pub fn set_score_goal(&mut self, goal: i64) -> Result<(), DomainError> {
        match u8::try_from(goal) {
            Ok(g) if score_goal_is_valid(g) => {
                self.score_goal = g;
                Ok(())
            }
            _ => {
                warn!(goal, kept = self.score_goal, "Rejected out-of-range score goal");
                Err(DomainError::validation(
                    ValidationKind::InvalidScoreGoal,
                    format!(
                        "Score goal must be {}..={}, got {goal}",
                        SCORE_GOAL_RANGE.start(),
                        SCORE_GOAL_RANGE.end()
                    ),
                ))
            }
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn set_card_back(&mut self, name: impl Into<String>) {
        self.card_back = name.into();
    }

    pub fn set_sound_effects(&mut self, enabled: bool) {
        self.sound_effects = enabled;
    }
}

/// Clamp any persisted integer into the valid goal range.
pub fn clamp_score_goal(raw: i64) -> u8 {
    raw.clamp(
        *SCORE_GOAL_RANGE.start() as i64,
        *SCORE_GOAL_RANGE.end() as i64,
    ) as u8
}

fn clamped_goal<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_score_goal(raw))
}

/// Load settings, treating missing or malformed data as defaults.
pub fn load_or_default(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(Some(settings)) => {
            info!(
                difficulty = %settings.difficulty,
                score_goal = settings.score_goal,
                "Loaded settings"
            );
            settings
        }
        Ok(None) => {
            info!("No saved settings; using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable settings; using defaults");
            Settings::default()
        }
    }
}
