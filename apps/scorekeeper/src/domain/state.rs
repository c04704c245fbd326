use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Trump;

/// Stable player identifier, unique for the lifetime of a game.
pub type PlayerId = String;

/// A registered player. Created at game start, never mutated afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// No game in progress; players not yet registered.
    Setup,
    /// Players predict the tricks they will take this round.
    Bidding,
    /// Trick counts are entered and the round is scored.
    Results,
    /// All rounds complete (or the game was ended early).
    GameOver,
}

/// Everything recorded about a single round.
///
/// `bids`, `tricks` and `scores` start empty and fill as the round
/// progresses; once submitted they contain exactly one entry per player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_no: u8,
    /// Id of the dealer at round start.
    pub dealer_id: PlayerId,
    pub trump: Trump,
    pub bids: BTreeMap<PlayerId, u8>,
    pub tricks: BTreeMap<PlayerId, u8>,
    /// Per-player score delta for this round.
    pub scores: BTreeMap<PlayerId, i32>,
}

impl RoundRecord {
    pub fn empty(round_no: u8, dealer_id: PlayerId) -> Self {
        Self {
            round_no,
            dealer_id,
            trump: Trump::None,
            bids: BTreeMap::new(),
            tricks: BTreeMap::new(),
            scores: BTreeMap::new(),
        }
    }
}

/// Entire game container, sufficient for all pure domain operations.
///
/// Rounds are keyed by round number in an ordered map so chronological
/// iteration falls out of the key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Registration order is significant: it fixes seat order and dealer
    /// rotation.
    pub players: Vec<Player>,
    pub phase: Phase,
    /// 1-based while a game is running; 0 in Setup.
    pub current_round: u8,
    /// Fixed at game start from the player count; never recomputed.
    pub total_rounds: u8,
    /// Index into `players` of the current dealer.
    pub dealer_index: usize,
    pub rounds: BTreeMap<u8, RoundRecord>,
}

impl GameState {
    /// The canonical empty record: the state before any game has started
    /// and the state every reset returns to.
    pub fn initial() -> Self {
        Self {
            players: Vec::new(),
            phase: Phase::Setup,
            current_round: 0,
            total_rounds: 0,
            dealer_index: 0,
            rounds: BTreeMap::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The record for the round currently being played, if one exists.
    pub fn current_round_record(&self) -> Option<&RoundRecord> {
        self.rounds.get(&self.current_round)
    }

    /// The current dealer, if the dealer index refers to a real player.
    pub fn dealer(&self) -> Option<&Player> {
        self.players.get(self.dealer_index)
    }

    pub fn find_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// Dealer rotation math.
///
/// These live in `domain` so the reducer, snapshots and the presentation
/// layer share a single source of truth for "who deals next".

/// Index of the dealer for the round after one dealt by `dealer_index`.
#[inline]
pub fn next_dealer_index(dealer_index: usize, player_count: usize) -> usize {
    if player_count == 0 {
        return 0;
    }
    (dealer_index + 1) % player_count
}

/// Dealer index for a 1-based round number.
///
/// Round 1 → index 0, round 2 → index 1 (mod player count).
#[inline]
pub fn dealer_index_for_round(round_no: u8, player_count: usize) -> usize {
    if player_count == 0 || round_no == 0 {
        return 0;
    }
    (round_no as usize - 1) % player_count
}
