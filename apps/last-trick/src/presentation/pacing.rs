//! Cosmetic sequencing for the table: how long the AI "thinks" and how long a
//! resolved trick stays visible.
//!
//! Pure and clock-free. `beats_after` turns the result of a play into an
//! ordered list of beats; the frontend decides how to wait on them.

use std::time::Duration;

use crate::domain::{PlayCardResult, Side, TrickRecord};

pub const DEFAULT_AI_THINK: Duration = Duration::from_millis(700);
pub const DEFAULT_TRICK_DISPLAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub ai_think: Duration,
    pub trick_display: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            ai_think: DEFAULT_AI_THINK,
            trick_display: DEFAULT_TRICK_DISPLAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    /// Pause before the AI's card appears.
    AiThink(Duration),
    /// Keep the completed trick on the table.
    ShowTrick { trick: TrickRecord, hold: Duration },
    RoundOver { point_to: Side },
    MatchOver { winner: Side },
}

impl Beat {
    pub fn delay(&self) -> Duration {
        match self {
            Beat::AiThink(d) => *d,
            Beat::ShowTrick { hold, .. } => *hold,
            Beat::RoundOver { .. } | Beat::MatchOver { .. } => Duration::ZERO,
        }
    }
}

impl Pacing {
    /// No delays at all (tests, simulations, `--fast`).
    pub const fn instant() -> Self {
        Self {
            ai_think: Duration::ZERO,
            trick_display: Duration::ZERO,
        }
    }

    pub const fn from_millis(ai_think: u64, trick_display: u64) -> Self {
        Self {
            ai_think: Duration::from_millis(ai_think),
            trick_display: Duration::from_millis(trick_display),
        }
    }

    /// Beat shown before the AI acts with nothing else pending.
    pub fn before_ai_turn(&self) -> Beat {
        Beat::AiThink(self.ai_think)
    }

    /// Beats to present after `result`, given who acts next (`None` when
    /// nobody does).
    pub fn beats_after(&self, result: &PlayCardResult, next_actor: Option<Side>) -> Vec<Beat> {
        let mut beats = Vec::new();
        if let Some(trick) = result.trick {
            beats.push(Beat::ShowTrick {
                trick,
                hold: self.trick_display,
            });
        }
        if let Some(point_to) = result.point_to {
            beats.push(Beat::RoundOver { point_to });
            if result.match_over() {
                beats.push(Beat::MatchOver { winner: point_to });
            }
            return beats;
        }
        if next_actor == Some(Side::Ai) {
            beats.push(self.before_ai_turn());
        }
        beats
    }

    /// Total time the beats take.
    pub fn total(beats: &[Beat]) -> Duration {
        beats.iter().map(Beat::delay).sum()
    }
}
