//! Metrics collection and output for simulated matches.

use last_trick::domain::{Side, TrickRecord};
use serde::Serialize;

use crate::simulator::{MatchResult, RoundRecord};
use crate::types::MetricsLevel;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    pub seats: [SeatMetrics; 2],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    /// AI in the player seat, then the AI seat.
    pub ai_types: [String; 2],
    pub score_goal: u8,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub final_scores: [u32; 2],
    pub winner: Side,
    pub rounds_played: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMetrics {
    pub seat: Side,
    pub ai_type: String,
    pub points: u32,
    /// Tricks taken across all rounds, scoring or not.
    pub tricks_won: u32,
    pub redeals: u32,
    /// Rounds this seat led from the first trick.
    pub rounds_led: u32,
    /// Final tricks won by this seat when it was leading.
    pub final_tricks_won_on_lead: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub leader: Side,
    pub redealt: [bool; 2],
    pub point_to: Side,
    pub tricks: Vec<TrickRecord>,
}

/// Build metrics from a finished match.
pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    config: MatchConfig,
    result: &MatchResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let seats =
        Side::BOTH.map(|side| build_seat_metrics(side, &config.ai_types[side.index()], result));

    let rounds = match level {
        MetricsLevel::Basic => Vec::new(),
        MetricsLevel::Detailed => result.rounds.iter().map(build_round_metrics).collect(),
    };

    MatchMetrics {
        match_id,
        seed,
        timestamp,
        config,
        result: MatchResultMetrics {
            final_scores: result.final_scores,
            winner: result.winner,
            rounds_played: result.rounds.len(),
            duration_ms,
        },
        seats,
        rounds,
    }
}

fn build_round_metrics(round: &RoundRecord) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        leader: round.leader,
        redealt: round.redealt,
        point_to: round.point_to,
        tricks: round.tricks.clone(),
    }
}

fn build_seat_metrics(side: Side, ai_type: &str, result: &MatchResult) -> SeatMetrics {
    let mut metrics = SeatMetrics {
        seat: side,
        ai_type: ai_type.to_string(),
        points: result.final_scores[side.index()],
        tricks_won: 0,
        redeals: 0,
        rounds_led: 0,
        final_tricks_won_on_lead: 0,
    };
    for round in &result.rounds {
        metrics.tricks_won += round.tricks.iter().filter(|t| t.winner == side).count() as u32;
        if round.redealt[side.index()] {
            metrics.redeals += 1;
        }
        if round.leader == side {
            metrics.rounds_led += 1;
        }
        if let Some(last) = round.tricks.last() {
            if last.winner == side && last.lead_player == side {
                metrics.final_tricks_won_on_lead += 1;
            }
        }
    }
    metrics
}

/// CSV summary row (one per match).
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: Side,
    pub rounds: usize,
    pub player_seat_ai: String,
    pub ai_seat_ai: String,
    pub player_seat_points: u32,
    pub ai_seat_points: u32,
    pub player_seat_tricks: u32,
    pub ai_seat_tricks: u32,
    pub player_seat_redeals: u32,
    pub ai_seat_redeals: u32,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        let [player, ai] = &metrics.seats;
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            rounds: metrics.result.rounds_played,
            player_seat_ai: player.ai_type.clone(),
            ai_seat_ai: ai.ai_type.clone(),
            player_seat_points: player.points,
            ai_seat_points: ai.points,
            player_seat_tricks: player.tricks_won,
            ai_seat_tricks: ai.tricks_won,
            player_seat_redeals: player.redeals,
            ai_seat_redeals: ai.redeals,
        }
    }
}
