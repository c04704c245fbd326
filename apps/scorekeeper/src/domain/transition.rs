//! The game engine: a pure state-transition function over the game record.
//!
//! Every command produces a brand-new `GameState`; the input is never
//! mutated. The function is total for the whole command set — commands that
//! reference a round that does not exist, or arrive in the wrong phase, are
//! no-ops rather than errors. Advisory preconditions (player counts, bid and
//! trick totals) live in `domain::rules` and are the caller's job; the
//! reducer computes whatever the scoring formula yields.

use std::collections::BTreeMap;

use crate::domain::command::Command;
use crate::domain::scoring::round_scores;
use crate::domain::state::{next_dealer_index, GameState, Phase, Player, PlayerId, RoundRecord};
use crate::domain::{rules, Trump};
use crate::utils::player_id::player_id;

/// Apply a command to a game record, returning the successor record.
pub fn transition(state: &GameState, command: Command) -> GameState {
    match command {
        Command::StartGame { names } => start_game(&names),
        Command::SetTrump { trump } => set_trump(state, trump),
        Command::SubmitBids { bids } => submit_bids(state, bids),
        Command::SubmitResults { tricks } => submit_results(state, tricks),
        Command::EndGameEarly => end_game_early(state),
        Command::ResetGame => GameState::initial(),
    }
}

fn start_game(names: &[String]) -> GameState {
    // A startable game has at least one name; the caller enforces 3..=6.
    // Degenerate input collapses to the initial record instead of producing
    // a round with no dealer.
    if names.is_empty() {
        return GameState::initial();
    }

    let players: Vec<Player> = names
        .iter()
        .enumerate()
        .map(|(index, name)| Player {
            id: player_id(index),
            name: name.clone(),
        })
        .collect();
    let total_rounds = rules::total_rounds_for(players.len());
    let first_dealer = players[0].id.clone();

    let mut rounds = BTreeMap::new();
    rounds.insert(1, RoundRecord::empty(1, first_dealer));

    GameState {
        players,
        phase: Phase::Bidding,
        current_round: 1,
        total_rounds,
        dealer_index: 0,
        rounds,
    }
}

fn set_trump(state: &GameState, trump: Trump) -> GameState {
    let mut next = state.clone();
    match next.rounds.get_mut(&next.current_round) {
        Some(round) => round.trump = trump,
        None => return next,
    }
    next
}

fn submit_bids(state: &GameState, bids: BTreeMap<PlayerId, u8>) -> GameState {
    // GameOver is terminal: bids are only accepted while bidding.
    if state.phase != Phase::Bidding {
        return state.clone();
    }
    let mut next = state.clone();
    match next.rounds.get_mut(&next.current_round) {
        Some(round) => round.bids = bids,
        None => return next,
    }
    next.phase = Phase::Results;
    next
}

fn submit_results(state: &GameState, tricks: BTreeMap<PlayerId, u8>) -> GameState {
    if state.phase != Phase::Results {
        return state.clone();
    }
    let scores = match state.current_round_record() {
        Some(round) => round_scores(&state.players, &round.bids, &tricks),
        None => return state.clone(),
    };
    let mut next = state.clone();
    if let Some(round) = next.rounds.get_mut(&next.current_round) {
        round.scores = scores;
        round.tricks = tricks;
    }

    if next.current_round >= next.total_rounds {
        next.phase = Phase::GameOver;
        return next;
    }

    next.dealer_index = next_dealer_index(next.dealer_index, next.players.len());
    next.current_round += 1;
    let dealer_id = next
        .players
        .get(next.dealer_index)
        .map(|p| p.id.clone())
        .unwrap_or_default();
    next.rounds
        .insert(next.current_round, RoundRecord::empty(next.current_round, dealer_id));
    next.phase = Phase::Bidding;
    next
}

fn end_game_early(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.phase = Phase::GameOver;
    next
}
