use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Player, PlayerId};

/// Score for a single player in a single round.
///
/// An exact bid earns 20 plus 10 per trick taken; a miss costs 10 per trick
/// of difference.
pub fn round_score(bid: u8, tricks: u8) -> i32 {
    if bid == tricks {
        20 + 10 * i32::from(tricks)
    } else {
        -10 * (i32::from(bid) - i32::from(tricks)).abs()
    }
}

/// Per-player score deltas for a round. Every player gets an entry; a
/// missing bid or trick count reads as 0.
pub fn round_scores(
    players: &[Player],
    bids: &BTreeMap<PlayerId, u8>,
    tricks: &BTreeMap<PlayerId, u8>,
) -> BTreeMap<PlayerId, i32> {
    players
        .iter()
        .map(|p| {
            let bid = bids.get(&p.id).copied().unwrap_or(0);
            let taken = tricks.get(&p.id).copied().unwrap_or(0);
            (p.id.clone(), round_score(bid, taken))
        })
        .collect()
}

/// Cumulative totals per player, summed over recorded rounds in round
/// order. Players with no scored rounds total 0.
pub fn totals(state: &GameState) -> BTreeMap<PlayerId, i32> {
    let mut totals: BTreeMap<PlayerId, i32> = state
        .players
        .iter()
        .map(|p| (p.id.clone(), 0))
        .collect();
    for round in state.rounds.values() {
        for (id, score) in &round.scores {
            *totals.entry(id.clone()).or_insert(0) += score;
        }
    }
    totals
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position after sorting by total, descending.
    pub rank: usize,
    pub player: Player,
    pub total: i32,
}

/// Players ranked by total score, highest first. Ties keep registration
/// order, matching the scoreboard display order.
pub fn standings(state: &GameState) -> Vec<Standing> {
    let totals = totals(state);
    let mut ordered: Vec<&Player> = state.players.iter().collect();
    ordered.sort_by_key(|p| -totals.get(&p.id).copied().unwrap_or(0));
    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, player)| Standing {
            rank: idx + 1,
            player: player.clone(),
            total: totals.get(&player.id).copied().unwrap_or(0),
        })
        .collect()
}
