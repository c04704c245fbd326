//! Error codes for the scorekeeper.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in logs and user-facing messages.

use core::fmt;

/// Centralized error codes for the scorekeeper.
///
/// This enum ensures type safety and prevents the use of ad-hoc error
/// codes. Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup validation
    /// Player count outside 3..=6
    InvalidPlayerCount,
    /// A player name was empty after trimming
    EmptyPlayerName,
    /// Two players share a name
    DuplicatePlayerName,

    // Round-entry validation
    /// An id that is not part of the current game
    UnknownPlayer,
    /// A bid is missing for at least one player
    IncompleteBids,
    /// A bid outside the round's 0..=n range
    BidOutOfRange,
    /// Bids may not total exactly the round number
    BidSumForbidden,
    /// A trick count is missing for at least one player
    IncompleteTricks,
    /// A trick count outside the round's 0..=n range
    TrickOutOfRange,
    /// Trick counts must total exactly the round number
    TrickSumMismatch,
    /// A round-scoped command was issued with no round in progress
    NoActiveRound,
    /// Unparseable trump input
    ParseTrump,
    /// General validation error
    ValidationError,

    // Operational
    /// Configuration error
    ConfigError,
    /// Persistence slot read/write failure
    StorageError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Get the canonical string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ErrorCode::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            ErrorCode::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            ErrorCode::UnknownPlayer => "UNKNOWN_PLAYER",
            ErrorCode::IncompleteBids => "INCOMPLETE_BIDS",
            ErrorCode::BidOutOfRange => "BID_OUT_OF_RANGE",
            ErrorCode::BidSumForbidden => "BID_SUM_FORBIDDEN",
            ErrorCode::IncompleteTricks => "INCOMPLETE_TRICKS",
            ErrorCode::TrickOutOfRange => "TRICK_OUT_OF_RANGE",
            ErrorCode::TrickSumMismatch => "TRICK_SUM_MISMATCH",
            ErrorCode::NoActiveRound => "NO_ACTIVE_ROUND",
            ErrorCode::ParseTrump => "PARSE_TRUMP",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
