//! Public snapshot API for observing game state without exposing internals.
//!
//! The presentation layer renders these projections and never reaches into
//! the reducer's bookkeeping directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::rules::valid_bid_range;
use crate::domain::scoring::{standings, totals, Standing};
use crate::domain::state::{GameState, Phase, Player, PlayerId, RoundRecord};

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub round_no: u8,
    pub total_rounds: u8,
    pub players: Vec<Player>,
    /// Current dealer; `None` when no game is running.
    pub dealer: Option<Player>,
    /// Cumulative totals across all scored rounds.
    pub totals: BTreeMap<PlayerId, i32>,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup,
    Bidding(BiddingSnapshot),
    Results(ResultsSnapshot),
    GameOver(GameOverSnapshot),
}

/// Bidding phase snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub round: RoundRecord,
    /// Players in bid order: left of the dealer first, dealer last.
    pub bid_order: Vec<Player>,
    pub min_bid: u8,
    pub max_bid: u8,
}

/// Results phase snapshot: bids are in, tricks still to be entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultsSnapshot {
    pub round: RoundRecord,
    /// Tricks across the table must total this (advisory).
    pub expected_tricks: u8,
}

/// Game-over snapshot: the final ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOverSnapshot {
    pub standings: Vec<Standing>,
    /// Rounds that actually received scores (fewer than `total_rounds`
    /// after an early end).
    pub rounds_scored: u8,
}

/// One scoreboard row: a player's per-round deltas in round order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardRow {
    pub player: Player,
    /// One cell per recorded round, `None` where the round is unscored.
    pub round_scores: Vec<Option<i32>>,
    pub total: i32,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; produces safe defaults for inconsistent states.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let game = GameHeader {
        round_no: state.current_round,
        total_rounds: state.total_rounds,
        players: state.players.clone(),
        dealer: state.dealer().cloned(),
        totals: totals(state),
    };

    let phase = match state.phase {
        Phase::Setup => PhaseSnapshot::Setup,
        Phase::Bidding => snapshot_bidding(state),
        Phase::Results => snapshot_results(state),
        Phase::GameOver => snapshot_game_over(state),
    };

    GameSnapshot { game, phase }
}

/// Per-player scoreboard rows for the chronological display.
pub fn scoreboard(state: &GameState) -> Vec<ScoreboardRow> {
    let totals = totals(state);
    state
        .players
        .iter()
        .map(|player| ScoreboardRow {
            player: player.clone(),
            round_scores: state
                .rounds
                .values()
                .map(|round| round.scores.get(&player.id).copied())
                .collect(),
            total: totals.get(&player.id).copied().unwrap_or(0),
        })
        .collect()
}

fn snapshot_bidding(state: &GameState) -> PhaseSnapshot {
    let round = current_round_or_empty(state);
    let range = valid_bid_range(round.round_no);

    PhaseSnapshot::Bidding(BiddingSnapshot {
        min_bid: *range.start(),
        max_bid: *range.end(),
        bid_order: bid_order(state),
        round,
    })
}

fn snapshot_results(state: &GameState) -> PhaseSnapshot {
    let round = current_round_or_empty(state);

    PhaseSnapshot::Results(ResultsSnapshot {
        expected_tricks: round.round_no,
        round,
    })
}

fn snapshot_game_over(state: &GameState) -> PhaseSnapshot {
    let rounds_scored = state
        .rounds
        .values()
        .filter(|r| !r.scores.is_empty())
        .count() as u8;

    PhaseSnapshot::GameOver(GameOverSnapshot {
        standings: standings(state),
        rounds_scored,
    })
}

fn current_round_or_empty(state: &GameState) -> RoundRecord {
    state.current_round_record().cloned().unwrap_or_else(|| {
        RoundRecord::empty(
            state.current_round,
            state.dealer().map(|p| p.id.clone()).unwrap_or_default(),
        )
    })
}

/// Bid order starts left of the dealer and ends with the dealer, matching
/// how bids are collected at a real table.
fn bid_order(state: &GameState) -> Vec<Player> {
    let n = state.players.len();
    if n == 0 {
        return Vec::new();
    }
    let start = (state.dealer_index + 1) % n;
    (0..n)
        .map(|offset| state.players[(start + offset) % n].clone())
        .collect()
}
