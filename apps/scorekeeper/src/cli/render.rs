//! Rendering of snapshots to plain text.

use std::fmt::Write as _;

use crate::domain::scoring::Standing;
use crate::domain::snapshot::{GameSnapshot, ScoreboardRow};
use crate::domain::state::{Player, RoundRecord};

/// One-line round header: round counter, dealer, trump.
pub fn round_header(snap: &GameSnapshot, round: &RoundRecord) -> String {
    let dealer = snap
        .game
        .dealer
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("-");
    format!(
        "Round {}/{} · Dealer {} · Trump {}",
        snap.game.round_no, snap.game.total_rounds, dealer, round.trump.symbol()
    )
}

/// Scoreboard: one line per player with per-round deltas and the total.
pub fn scoreboard_table(rows: &[ScoreboardRow]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.player.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .round_scores
            .iter()
            .map(|cell| match cell {
                Some(score) => format!("{score:>4}"),
                None => format!("{:>4}", "·"),
            })
            .collect();
        let _ = writeln!(
            out,
            "{:<name_width$}  {}  = {}",
            row.player.name,
            cells.join(" "),
            row.total
        );
    }
    out
}

/// Per-player outcome of a scored round.
pub fn round_result(round: &RoundRecord, players: &[Player]) -> String {
    let mut out = String::new();
    for player in players {
        let bid = round.bids.get(&player.id).copied().unwrap_or(0);
        let took = round.tricks.get(&player.id).copied().unwrap_or(0);
        let score = round.scores.get(&player.id).copied().unwrap_or(0);
        let _ = writeln!(
            out,
            "  {}: bid {bid} · won {took} → {}",
            player.name,
            signed(score)
        );
    }
    out
}

/// Final ranking, winner first.
pub fn standings_table(standings: &[Standing]) -> String {
    let mut out = String::new();
    for standing in standings {
        let marker = if standing.rank == 1 { "🏆" } else { "  " };
        let _ = writeln!(
            out,
            "{marker} {}. {} — {} pts",
            standing.rank, standing.player.name, standing.total
        );
    }
    out
}

fn signed(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}
