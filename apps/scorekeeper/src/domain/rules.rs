use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::domain::state::{GameState, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// A standard Wizard deck: 52 suit cards plus 4 Wizards and 4 Jesters.
pub const DECK_SIZE: usize = 60;
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Number of rounds in a game: one card more is dealt each round until the
/// deck is exhausted, so rounds = 60 / players.
///
/// 3 players → 20, 4 → 15, 5 → 12, 6 → 10.
pub fn total_rounds_for(player_count: usize) -> u8 {
    if player_count == 0 {
        return 0;
    }
    (DECK_SIZE / player_count) as u8
}

/// In round `n` each player holds `n` cards, so a bid is any value in
/// `0..=n`.
pub fn valid_bid_range(round_no: u8) -> RangeInclusive<u8> {
    0..=round_no
}

/// The bid the dealer must avoid: bidding last, the dealer may not bring
/// the table total to exactly the round number. `None` when every bid is
/// already safe.
pub fn forbidden_dealer_bid(round_no: u8, sum_of_other_bids: u32) -> Option<u8> {
    let target = u32::from(round_no);
    if sum_of_other_bids > target {
        return None;
    }
    let remaining = target - sum_of_other_bids;
    if remaining > u32::from(round_no) {
        return None;
    }
    Some(remaining as u8)
}

/// Caller-side guard for StartGame: 3..=6 players, every trimmed name
/// non-empty, no duplicates. The reducer itself never re-validates.
pub fn validate_player_names(names: &[String]) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        return Err(DomainError::validation(
            ValidationKind::PlayerCount,
            format!(
                "need {MIN_PLAYERS} to {MAX_PLAYERS} players, got {}",
                names.len()
            ),
        ));
    }
    let mut seen: Vec<&str> = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyPlayerName,
                "player names must be non-empty",
            ));
        }
        if seen.contains(&trimmed) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayerName,
                format!("duplicate player name '{trimmed}'"),
            ));
        }
        seen.push(trimmed);
    }
    Ok(())
}

/// Caller-side guard for SubmitBids: one bid per player, each within the
/// round's range, and the table total must not equal the round number (the
/// dealer restriction, applied to the completed set of bids).
pub fn validate_bids(state: &GameState, bids: &BTreeMap<PlayerId, u8>) -> Result<(), DomainError> {
    let round = state
        .current_round_record()
        .ok_or_else(|| DomainError::validation(ValidationKind::NoActiveRound, "no round in progress"))?;

    check_one_entry_per_player(state, bids, ValidationKind::IncompleteBids)?;
    for (id, bid) in bids {
        if !valid_bid_range(round.round_no).contains(bid) {
            return Err(DomainError::validation(
                ValidationKind::BidOutOfRange,
                format!("bid {bid} for player {id} outside 0..={}", round.round_no),
            ));
        }
    }
    let total: u32 = bids.values().map(|&b| u32::from(b)).sum();
    if total == u32::from(round.round_no) {
        return Err(DomainError::validation(
            ValidationKind::BidSumForbidden,
            format!("bids may not total exactly {} this round", round.round_no),
        ));
    }
    Ok(())
}

/// Caller-side guard for SubmitResults: one count per player, each within
/// the round's range, and the table total must equal the round number.
pub fn validate_tricks(
    state: &GameState,
    tricks: &BTreeMap<PlayerId, u8>,
) -> Result<(), DomainError> {
    let round = state
        .current_round_record()
        .ok_or_else(|| DomainError::validation(ValidationKind::NoActiveRound, "no round in progress"))?;

    check_one_entry_per_player(state, tricks, ValidationKind::IncompleteTricks)?;
    for (id, taken) in tricks {
        if *taken > round.round_no {
            return Err(DomainError::validation(
                ValidationKind::TrickOutOfRange,
                format!("{taken} tricks for player {id} outside 0..={}", round.round_no),
            ));
        }
    }
    let total: u32 = tricks.values().map(|&t| u32::from(t)).sum();
    if total != u32::from(round.round_no) {
        return Err(DomainError::validation(
            ValidationKind::TrickSumMismatch,
            format!("tricks total {total}, expected {}", round.round_no),
        ));
    }
    Ok(())
}

fn check_one_entry_per_player(
    state: &GameState,
    entries: &BTreeMap<PlayerId, u8>,
    missing_kind: ValidationKind,
) -> Result<(), DomainError> {
    for player in &state.players {
        if !entries.contains_key(&player.id) {
            return Err(DomainError::validation(
                missing_kind,
                format!("missing entry for player {}", player.name),
            ));
        }
    }
    for id in entries.keys() {
        if state.find_player(id).is_none() {
            return Err(DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("unknown player id {id}"),
            ));
        }
    }
    Ok(())
}
