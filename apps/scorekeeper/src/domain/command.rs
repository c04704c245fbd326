use std::collections::BTreeMap;

use crate::domain::state::PlayerId;
use crate::domain::Trump;

/// The closed set of commands the engine recognizes.
///
/// Advisory preconditions (player-count limits, bid/trick totals) are the
/// caller's responsibility — see `domain::rules`. The reducer stays total:
/// it never errors or panics for any command in this set.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a fresh game from an ordered list of trimmed, non-empty names.
    /// Always rebuilds state from scratch, discarding any prior game.
    StartGame { names: Vec<String> },

    /// Declare (or re-declare) the trump for the current round.
    SetTrump { trump: Trump },

    /// Record every player's bid for the current round and move to Results.
    SubmitBids { bids: BTreeMap<PlayerId, u8> },

    /// Record tricks taken, score the round, and either advance to the next
    /// round or finish the game.
    SubmitResults { tricks: BTreeMap<PlayerId, u8> },

    /// Force the game over, keeping every recorded round.
    EndGameEarly,

    /// Return to the canonical initial record, discarding everything.
    ResetGame,
}
