//! Domain-level error type used by the caller-side rule validators.
//!
//! The reducer itself never errors: for the closed command set it is total
//! and treats malformed input as a no-op. `DomainError` is raised by
//! `domain::rules` before a command is issued, and converted to
//! `crate::error::AppError` at the application boundary via the provided
//! `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// What a validation failure was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    PlayerCount,
    EmptyPlayerName,
    DuplicatePlayerName,
    UnknownPlayer,
    IncompleteBids,
    BidOutOfRange,
    BidSumForbidden,
    IncompleteTricks,
    TrickOutOfRange,
    TrickSumMismatch,
    NoActiveRound,
    ParseTrump,
    Other,
}

impl ValidationKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationKind::PlayerCount => ErrorCode::InvalidPlayerCount,
            ValidationKind::EmptyPlayerName => ErrorCode::EmptyPlayerName,
            ValidationKind::DuplicatePlayerName => ErrorCode::DuplicatePlayerName,
            ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
            ValidationKind::IncompleteBids => ErrorCode::IncompleteBids,
            ValidationKind::BidOutOfRange => ErrorCode::BidOutOfRange,
            ValidationKind::BidSumForbidden => ErrorCode::BidSumForbidden,
            ValidationKind::IncompleteTricks => ErrorCode::IncompleteTricks,
            ValidationKind::TrickOutOfRange => ErrorCode::TrickOutOfRange,
            ValidationKind::TrickSumMismatch => ErrorCode::TrickSumMismatch,
            ValidationKind::NoActiveRound => ErrorCode::NoActiveRound,
            ValidationKind::ParseTrump => ErrorCode::ParseTrump,
            ValidationKind::Other => ErrorCode::ValidationError,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }

    pub fn kind(&self) -> ValidationKind {
        match self {
            DomainError::Validation(kind, _) => *kind,
        }
    }
}
