//! Pure input parsing for the terminal UI.
//!
//! Everything here turns a raw line into domain input (or a meta command)
//! without touching the session, so it is all unit-testable.

use std::str::FromStr;

use crate::domain::Trump;
use crate::errors::domain::DomainError;

/// Session-level commands accepted at any prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    /// Finish the game now, keeping recorded rounds.
    End,
    /// Throw the game away and return to setup.
    Reset,
    /// Leave the program.
    Quit,
}

pub fn parse_meta(line: &str) -> Option<MetaCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "end" => Some(MetaCommand::End),
        "reset" => Some(MetaCommand::Reset),
        "quit" | "exit" | "q" => Some(MetaCommand::Quit),
        _ => None,
    }
}

/// Split a comma-separated name list, trimming whitespace and dropping
/// empty segments. Count/duplicate rules are checked by
/// `rules::validate_player_names`, not here.
pub fn parse_names(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a bid or trick count, bounded by the round number.
pub fn parse_count(line: &str, max: u8) -> Result<u8, DomainError> {
    let value: u8 = line.trim().parse().map_err(|_| {
        DomainError::validation_other(format!("expected a number between 0 and {max}"))
    })?;
    if value > max {
        return Err(DomainError::validation_other(format!(
            "{value} is more than this round allows (0..={max})"
        )));
    }
    Ok(value)
}

/// Parse a trump declaration. An empty line means "leave it as it is".
pub fn parse_trump(line: &str) -> Result<Option<Trump>, DomainError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Trump::from_str(trimmed).map(Some)
}
