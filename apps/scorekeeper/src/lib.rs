#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod utils;

// Re-exports for public API
pub use domain::command::Command;
pub use domain::snapshot::{scoreboard, snapshot, GameSnapshot};
pub use domain::state::{GameState, Phase, Player, PlayerId, RoundRecord};
pub use domain::transition::transition;
pub use domain::trump::Trump;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::session::GameSession;
pub use store::{GameStore, JsonSlotStore, MemoryStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
