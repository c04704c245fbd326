//! Builders shared by the domain unit tests.

use std::collections::BTreeMap;

use crate::domain::command::Command;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::transition::transition;

const NAMES: [&str; 6] = ["Alice", "Bram", "Cleo", "Dara", "Edda", "Finn"];

pub fn start_names(count: usize) -> Vec<String> {
    NAMES.iter().take(count).map(|s| s.to_string()).collect()
}

/// A freshly started game with `count` players.
pub fn started_game(count: usize) -> GameState {
    transition(
        &GameState::initial(),
        Command::StartGame {
            names: start_names(count),
        },
    )
}

pub fn ids(state: &GameState) -> Vec<PlayerId> {
    state.players.iter().map(|p| p.id.clone()).collect()
}

/// Zip per-player values (in registration order) into an id-keyed map.
pub fn entries(state: &GameState, values: &[u8]) -> BTreeMap<PlayerId, u8> {
    state
        .players
        .iter()
        .zip(values)
        .map(|(p, v)| (p.id.clone(), *v))
        .collect()
}

/// Submit bids then tricks for the current round, in registration order.
pub fn play_round(state: &GameState, bids: &[u8], tricks: &[u8]) -> GameState {
    let after_bids = transition(
        state,
        Command::SubmitBids {
            bids: entries(state, bids),
        },
    );
    transition(
        &after_bids,
        Command::SubmitResults {
            tricks: entries(&after_bids, tricks),
        },
    )
}
