//! AI Simulator CLI - fast in-memory Last Trick matches between two AIs.
//!
//! Runs matches through the game's own domain operations with no frontend
//! and no pacing, for comparing difficulties.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use last_trick::ai::registry::for_difficulty;
use last_trick::ai::{create_ai, AiPlayer, Difficulty};
use last_trick::domain::rules::{score_goal_is_valid, DEFAULT_SCORE_GOAL};
use last_trick::domain::seed_derivation::derive_match_seed;
use last_trick::Side;
use metrics::{build_match_metrics, MatchConfig};
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Last Trick simulator for comparing AI difficulties")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Difficulty playing the player seat
    #[arg(long, default_value = "medium")]
    player_seat: Difficulty,

    /// Difficulty playing the AI seat
    #[arg(long, default_value = "grandmaster")]
    ai_seat: Difficulty,

    /// Points needed to win a match (1-20)
    #[arg(long, default_value_t = DEFAULT_SCORE_GOAL)]
    goal: u8,

    /// Base seed; match N uses a seed derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSONL output
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn ai_name(difficulty: Difficulty) -> String {
    for_difficulty(difficulty)
        .map(|f| format!("{}@{}", f.name, f.version))
        .unwrap_or_else(|| difficulty.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !score_goal_is_valid(args.goal) {
        return Err(format!("score goal must be 1..=20, got {}", args.goal).into());
    }

    let base_seed = args.seed.unwrap_or_else(rand::random);
    if args.show_output {
        info!(
            matches = args.matches,
            player_seat = %args.player_seat,
            ai_seat = %args.ai_seat,
            goal = args.goal,
            base_seed,
            "Starting AI simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let ai_types = [ai_name(args.player_seat), ai_name(args.ai_seat)];
    let ais: [Box<dyn AiPlayer>; 2] = [
        create_ai(args.player_seat, Some(base_seed)),
        create_ai(args.ai_seat, Some(base_seed.wrapping_add(1))),
    ];

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_no in 1..=args.matches {
        let match_start = Instant::now();
        let match_seed = derive_match_seed(base_seed, match_no);

        match Simulator::new(match_seed, args.goal).simulate_match(&ais) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    match_no,
                    match_seed,
                    MatchConfig {
                        ai_types: ai_types.clone(),
                        score_goal: args.goal,
                        total_matches: args.matches,
                    },
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!(match_no, error = %e, "Failed to write metrics");
                }
                if args.verbose {
                    info!(match_no, scores = ?result.final_scores, "Match completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(match_no, error = %e, "Match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &ai_types, errors, elapsed, args.matches);
    }

    Ok(())
}

fn print_summary(
    results: &[MatchResult],
    ai_types: &[String; 2],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; 2];
    let mut points = [0u64; 2];
    let mut tricks = [0u64; 2];
    let mut redeals = [0u64; 2];
    let mut rounds = 0u64;

    for result in results {
        wins[result.winner.index()] += 1;
        rounds += result.rounds.len() as u64;
        for side in Side::BOTH {
            points[side.index()] += result.final_scores[side.index()] as u64;
        }
        for round in &result.rounds {
            for trick in &round.tricks {
                tricks[trick.winner.index()] += 1;
            }
            for side in Side::BOTH {
                if round.redealt[side.index()] {
                    redeals[side.index()] += 1;
                }
            }
        }
    }

    println!("Rounds played: {rounds}");
    println!("\n=== Results by Seat ===");
    for side in Side::BOTH {
        let i = side.index();
        let win_rate = wins[i] as f64 / results.len() as f64 * 100.0;
        println!(
            "{:<6} {:<20} wins={} ({:.1}%), points={}, tricks={}, redeals={}",
            side.name(),
            ai_types[i],
            wins[i],
            win_rate,
            points[i],
            tricks[i],
            redeals[i]
        );
    }
}
