//! Domain layer: pure game logic types and helpers.

pub mod command;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod transition;
pub mod trump;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_transition;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_transition;

// Re-exports for ergonomics
pub use command::Command;
pub use rules::{total_rounds_for, valid_bid_range};
pub use scoring::{round_score, standings, totals, Standing};
pub use snapshot::{scoreboard, snapshot, GameSnapshot, PhaseSnapshot};
pub use state::{GameState, Phase, Player, PlayerId, RoundRecord};
pub use transition::transition;
pub use trump::Trump;
