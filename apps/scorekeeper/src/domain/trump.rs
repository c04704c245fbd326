use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Trump declaration for a round.
///
/// `None` is the only valid value before a round's trump has been declared;
/// `NoTrump` and `Wizard` are deliberate declarations of the special modes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trump {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    NoTrump,
    Wizard,
    None,
}

impl Trump {
    /// Short symbol for table rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Trump::Spades => "♠",
            Trump::Hearts => "♥",
            Trump::Diamonds => "♦",
            Trump::Clubs => "♣",
            Trump::NoTrump => "∅",
            Trump::Wizard => "W",
            Trump::None => "-",
        }
    }
}

impl Display for Trump {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Trump::Spades => "spades",
            Trump::Hearts => "hearts",
            Trump::Diamonds => "diamonds",
            Trump::Clubs => "clubs",
            Trump::NoTrump => "no-trump",
            Trump::Wizard => "wizard",
            Trump::None => "none",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Trump {
    type Err = DomainError;

    /// Accepts full names, single-letter shorthands, and suit symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spades" | "s" | "♠" => Ok(Trump::Spades),
            "hearts" | "h" | "♥" => Ok(Trump::Hearts),
            "diamonds" | "d" | "♦" => Ok(Trump::Diamonds),
            "clubs" | "c" | "♣" => Ok(Trump::Clubs),
            "no-trump" | "no_trump" | "nt" => Ok(Trump::NoTrump),
            "wizard" | "w" => Ok(Trump::Wizard),
            "none" => Ok(Trump::None),
            other => Err(DomainError::validation(
                ValidationKind::ParseTrump,
                format!("unrecognized trump '{other}'"),
            )),
        }
    }
}
