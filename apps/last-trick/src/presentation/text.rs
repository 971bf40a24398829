//! Plain-text rendering of a `GameSnapshot` for the terminal frontend.

use std::fmt::Write;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::{Card, Phase, Side, TrickRecord};

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "You",
        Side::Ai => "AI",
    }
}

fn slot(card: Option<Card>) -> String {
    card.map(Card::label).unwrap_or_else(|| "--".to_string())
}

/// One line describing a resolved trick.
pub fn trick_line(trick: &TrickRecord) -> String {
    format!(
        "Trick {}: {} led {}, {} played {} -> {} won",
        trick.trick_no,
        side_label(trick.lead_player),
        trick.lead_card.label(),
        side_label(trick.lead_player.other()),
        trick.follow_card.label(),
        side_label(trick.winner),
    )
}

/// The whole table: scores, trick counter, cards on the table and the hand.
/// Playable cards are numbered; the rest are shown in brackets.
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Round {}  |  You {} - {} AI  |  first to {}",
        snapshot.round_no, snapshot.player_score, snapshot.ai_score, snapshot.score_goal
    );
    if matches!(
        snapshot.phase,
        Phase::LeadPending | Phase::FollowPending | Phase::TrickResolved
    ) {
        let _ = writeln!(out, "Trick {} of 5", snapshot.trick_no);
    }

    let (lead_label, follow_label) = match snapshot.lead_player {
        Side::Player => ("You", "AI"),
        Side::Ai => ("AI", "You"),
    };
    let _ = writeln!(
        out,
        "Table: {lead_label} {}  /  {follow_label} {}",
        slot(snapshot.lead_card),
        slot(snapshot.follow_card)
    );
    let _ = writeln!(out, "AI holds {} card(s)", snapshot.ai_card_count);

    let mut hand = String::new();
    for (i, hc) in snapshot.player_hand.iter().enumerate() {
        if hc.playable {
            let _ = write!(hand, " {}:{}", i + 1, hc.card.label());
        } else {
            let _ = write!(hand, " [{}]", hc.card.label());
        }
    }
    let _ = writeln!(out, "Your hand:{hand}");

    if let Some(trick) = &snapshot.last_trick {
        let _ = writeln!(out, "{}", trick_line(trick));
    }
    if snapshot.redeal_offered {
        let _ = writeln!(out, "Your hand has nothing above 9: redeal? (y/n)");
    }
    if let Some(winner) = snapshot.match_winner {
        let _ = writeln!(out, "Match over: {} won", side_label(winner));
    }
    out
}
