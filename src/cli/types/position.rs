//! Fantasy football position types and utilities.

use crate::error::FfdpError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football stat positions.
///
/// Covers the position categories FantasyPros publishes stat and
/// projection tables for. `DST` is the team defense/special teams
/// unit, whose "player" entry is a franchise name rather than a
/// person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// All positions, in the order the source site lists them.
    pub fn all() -> [Position; 6] {
        [
            Position::QB,
            Position::RB,
            Position::WR,
            Position::TE,
            Position::K,
            Position::DST,
        ]
    }

    /// Lowercase slug used in FantasyPros URLs, e.g. `stats/qb.php`.
    pub fn url_slug(&self) -> &'static str {
        match self {
            Position::QB => "qb",
            Position::RB => "rb",
            Position::WR => "wr",
            Position::TE => "te",
            Position::K => "k",
            Position::DST => "dst",
        }
    }

    /// Whether the player column holds a team unit instead of a person.
    pub fn is_team_unit(&self) -> bool {
        matches!(self, Position::DST)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FfdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DST" | "D/ST" | "DEF" => Ok(Position::DST),
            _ => Err(FfdpError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
