//! Terminal frontend: one human against one AI opponent.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use last_trick::ai::Difficulty;
use last_trick::config::env;
use last_trick::domain::Card;
use last_trick::presentation::assets::AssetResolver;
use last_trick::presentation::pacing::{Beat, Pacing};
use last_trick::presentation::text::{render, trick_line};
use last_trick::settings::{load_or_default, JsonFileStore, SettingsStore};
use last_trick::{telemetry, Advance, AppError, GameSession, NextAction, PlayCardResult, Side};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "last-trick")]
#[command(about = "Two-player trick-taking card game where only the fifth trick scores")]
struct Args {
    /// AI difficulty (easy, medium, hard, grandmaster)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Points needed to win the match (1-20)
    #[arg(short, long)]
    goal: Option<i64>,

    /// Card back design
    #[arg(long)]
    card_back: Option<String>,

    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (defaults to $LAST_TRICK_SETTINGS or ./last-trick-settings.json)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Persist the command-line overrides
    #[arg(long)]
    save: bool,

    /// Skip all pacing delays
    #[arg(long)]
    fast: bool,

    /// AI "thinking" delay in milliseconds
    #[arg(long, default_value = "700")]
    ai_think_ms: u64,

    /// How long a finished trick stays on the table, in milliseconds
    #[arg(long, default_value = "1200")]
    trick_display_ms: u64,
}

enum Outcome {
    Finished,
    Quit,
}

struct Console<R: BufRead> {
    input: R,
    sound: bool,
}

impl<R: BufRead> Console<R> {
    /// Next trimmed input line; `None` on end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{message}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn present(&self, beats: &[Beat]) {
        for beat in beats {
            match beat {
                Beat::AiThink(d) => {
                    println!("AI is thinking...");
                    std::thread::sleep(*d);
                }
                Beat::ShowTrick { trick, hold } => {
                    println!("{}", trick_line(trick));
                    if self.sound && trick.winner == Side::Player {
                        print!("\x07");
                    }
                    std::thread::sleep(*hold);
                }
                Beat::RoundOver { point_to } => match point_to {
                    Side::Player => println!("You took the last trick: +1 point."),
                    Side::Ai => println!("The AI took the last trick: +1 point."),
                },
                Beat::MatchOver { winner } => match winner {
                    Side::Player => println!("You win the match!"),
                    Side::Ai => println!("The AI wins the match."),
                },
            }
        }
    }
}

fn next_actor(session: &GameSession) -> Option<Side> {
    let state = session.state();
    state.is_round_active().then_some(state.current_player)
}

fn parse_choice(input: &str, session: &GameSession) -> Option<Card> {
    let hand = session.state().hand(Side::Player);
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| hand.get(i).copied());
    }
    input.parse().ok()
}

fn play_match<R: BufRead>(
    session: &mut GameSession,
    pacing: &Pacing,
    console: &mut Console<R>,
) -> Result<Outcome, AppError> {
    let mut ai_paced = false;
    loop {
        match session.next_action() {
            NextAction::StartMatch => {
                session.start_match()?;
            }
            NextAction::HumanRedeal => {
                print!("{}", render(&session.snapshot()));
                let Some(answer) = console.prompt("> ")? else {
                    return Ok(Outcome::Quit);
                };
                if answer.eq_ignore_ascii_case("y") {
                    let outcome = session.accept_redeal()?;
                    println!("Redealt {} new cards.", outcome.new_hand.len());
                } else {
                    session.decline_redeal();
                }
            }
            NextAction::HumanPlay => {
                print!("{}", render(&session.snapshot()));
                let Some(answer) = console.prompt("Play a card (number or token, q to quit): ")?
                else {
                    return Ok(Outcome::Quit);
                };
                if answer.eq_ignore_ascii_case("q") {
                    return Ok(Outcome::Quit);
                }
                let Some(card) = parse_choice(&answer, session) else {
                    println!("Not a card in your hand: {answer}");
                    continue;
                };
                match session.human_play(card) {
                    Ok(result) => ai_paced = present_play(session, pacing, console, &result),
                    Err(AppError::Domain(e)) => println!("{e}"),
                    Err(e) => return Err(e),
                }
            }
            NextAction::AiPlay => {
                if !ai_paced {
                    console.present(&[pacing.before_ai_turn()]);
                }
                if let Some(result) = session.run_ai_turn()? {
                    let card = result
                        .trick
                        .map(|t| t.card_of(Side::Ai))
                        .or(session.state().lead_card);
                    if let Some(card) = card {
                        println!("AI plays {}", card.label());
                    }
                    ai_paced = present_play(session, pacing, console, &result);
                }
            }
            NextAction::Advance => match session.advance()? {
                Advance::RoundStarted(start) => {
                    println!("--- Round {} ---", start.round_no);
                    if start.ai_redealt {
                        println!("The AI threw in a weak hand and redealt.");
                    }
                    ai_paced = false;
                }
                Advance::TrickCleared | Advance::Idle => {}
                Advance::MatchOver { .. } => return Ok(Outcome::Finished),
            },
            NextAction::MatchOver => return Ok(Outcome::Finished),
        }
    }
}

/// Show the beats after a play; true when they already covered the AI's
/// thinking pause.
fn present_play<R: BufRead>(
    session: &GameSession,
    pacing: &Pacing,
    console: &Console<R>,
    result: &PlayCardResult,
) -> bool {
    let beats = pacing.beats_after(result, next_actor(session));
    console.present(&beats);
    beats.iter().any(|b| matches!(b, Beat::AiThink(_)))
}

fn run(args: Args) -> Result<(), AppError> {
    let store = JsonFileStore::new(args.settings.clone().unwrap_or_else(env::settings_path));
    let mut settings = load_or_default(&store);

    if let Some(difficulty) = args.difficulty {
        settings.set_difficulty(difficulty);
    }
    if let Some(goal) = args.goal {
        if let Err(e) = settings.set_score_goal(goal) {
            println!("{e}; keeping {}", settings.score_goal);
        }
    }
    if let Some(back) = &args.card_back {
        settings.set_card_back(back.clone());
    }
    if args.save {
        store.save(&settings)?;
        info!(path = %store.path().display(), "Settings saved");
    }

    let assets = AssetResolver::new(env::assets_dir());
    info!(
        card_back = %assets.back_path(&settings.card_back).display(),
        "Using card back"
    );

    let pacing = if args.fast {
        Pacing::instant()
    } else {
        Pacing::from_millis(args.ai_think_ms, args.trick_display_ms)
    };

    let mut session = GameSession::new(&settings, args.seed)?;
    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
        sound: settings.sound_effects,
    };

    println!(
        "Last Trick vs {} AI, first to {} points. Only the fifth trick scores.",
        settings.difficulty, settings.score_goal
    );
    loop {
        session.start_match()?;
        match play_match(&mut session, &pacing, &mut console)? {
            Outcome::Quit => return Ok(()),
            Outcome::Finished => {
                let snap = session.snapshot();
                println!("Final score: You {} - {} AI", snap.player_score, snap.ai_score);
            }
        }
        match console.prompt("Play again? (y/n) ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), error = %e, "last-trick failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
