//! Time-related types for NFL seasons and weeks.

use crate::error::{FfdpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season the FantasyPros archive reaches back to.
pub const FIRST_SEASON: u16 = 2009;

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Number of regular-season weeks in this season.
    ///
    /// The league expanded from 17 to 18 weeks in 2021. Seasons before
    /// the archive's first year have no calendar entry.
    pub fn weeks(&self) -> Result<u16> {
        match self.0 {
            y if y >= 2021 => Ok(18),
            y if y >= FIRST_SEASON => Ok(17),
            _ => Err(FfdpError::UnknownSeason { season: self.0 }),
        }
    }

    /// Validate a week number against this season's calendar.
    pub fn check_week(&self, week: Week) -> Result<Week> {
        let max = self.weeks()?;
        if week.as_u16() == 0 || week.as_u16() > max {
            return Err(FfdpError::WeekOutOfRange {
                week: week.as_u16(),
                season: self.0,
                max,
            });
        }
        Ok(week)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2021)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FfdpError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FfdpError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
