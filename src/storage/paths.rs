//! Cache tree layout and key-to-path mapping.
//!
//! Raw scraped tables and normalized output live in two parallel trees
//! under one root, sharing the same relative layout:
//!
//! ```text
//! <root>/raw/weekly_stats/2021/QB/week_5.csv
//! <root>/normalized/weekly_stats/2021/QB/week_5.csv
//! ```
//!
//! Keeping the trees separate means a normalization fix can be replayed
//! over cached raw data without touching the network.

use crate::cli::types::{Position, Season, Week};
use crate::error::{FfdpError, Result};
use crate::sources::fantasypros::Category;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Env var overriding the cache root directory.
pub const CACHE_DIR_ENV_VAR: &str = "FFDP_CACHE_DIR";

/// Resolve the cache root: env override, else the platform cache dir.
pub fn default_cache_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(CACHE_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffdp")
}

/// Identifies one cached dataset; raw and normalized trees share keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetKey {
    pub category: Category,
    pub season: Season,
    pub week: Option<Week>,
    pub position: Option<Position>,
}

impl DatasetKey {
    pub fn weekly_stats(position: Position, season: Season, week: Week) -> Self {
        Self {
            category: Category::WeeklyStats,
            season,
            week: Some(week),
            position: Some(position),
        }
    }

    pub fn yearly_stats(position: Position, season: Season) -> Self {
        Self {
            category: Category::YearlyStats,
            season,
            week: None,
            position: Some(position),
        }
    }

    pub fn snapcounts(season: Season, week: Week) -> Self {
        Self {
            category: Category::Snapcounts,
            season,
            week: Some(week),
            position: None,
        }
    }

    pub fn projections(position: Position, season: Season, week: Week) -> Self {
        Self {
            category: Category::Projections,
            season,
            week: Some(week),
            position: Some(position),
        }
    }

    pub fn schedule(season: Season) -> Self {
        Self {
            category: Category::Schedule,
            season,
            week: None,
            position: None,
        }
    }

    pub fn stats_summary(position: Position, season: Season) -> Self {
        Self {
            category: Category::StatsSummary,
            season,
            week: None,
            position: Some(position),
        }
    }

    fn missing(&self, part: &str) -> FfdpError {
        FfdpError::Cache {
            message: format!("{} key for {} lacks a {}", self.category, self.season, part),
        }
    }

    /// Path relative to a tree root.
    pub fn relative_path(&self) -> Result<PathBuf> {
        let mut path = PathBuf::from(self.category.dir_name());
        match self.category {
            Category::Schedule => {
                path.push(format!("{}.csv", self.season));
            }
            Category::YearlyStats | Category::StatsSummary => {
                let position = self.position.ok_or_else(|| self.missing("position"))?;
                path.push(self.season.to_string());
                path.push(format!("{}.csv", position));
            }
            Category::Snapcounts => {
                let week = self.week.ok_or_else(|| self.missing("week"))?;
                path.push(self.season.to_string());
                path.push(format!("week_{}.csv", week));
            }
            Category::WeeklyStats | Category::Projections => {
                let position = self.position.ok_or_else(|| self.missing("position"))?;
                let week = self.week.ok_or_else(|| self.missing("week"))?;
                path.push(self.season.to_string());
                path.push(position.to_string());
                path.push(format!("week_{}.csv", week));
            }
        }
        Ok(path)
    }

    /// Reverse of [`DatasetKey::relative_path`]; used when scanning the
    /// raw tree for replay.
    pub fn from_relative_path(path: &Path) -> Option<Self> {
        let mut parts = path.iter().map(|part| part.to_str().unwrap_or_default());
        let category = Category::from_dir_name(parts.next()?)?;

        let stem = |name: &str| name.strip_suffix(".csv").map(str::to_string);
        let week_of = |name: &str| {
            stem(name)?
                .strip_prefix("week_")
                .and_then(|n| n.parse().ok())
                .map(Week::new)
        };

        match category {
            Category::Schedule => {
                let season = stem(parts.next()?)?.parse().ok().map(Season::new)?;
                Some(Self::schedule(season))
            }
            Category::YearlyStats | Category::StatsSummary => {
                let season = Season::new(parts.next()?.parse().ok()?);
                let position = Position::from_str(&stem(parts.next()?)?).ok()?;
                Some(Self {
                    category,
                    season,
                    week: None,
                    position: Some(position),
                })
            }
            Category::Snapcounts => {
                let season = Season::new(parts.next()?.parse().ok()?);
                let week = week_of(parts.next()?)?;
                Some(Self::snapcounts(season, week))
            }
            Category::WeeklyStats | Category::Projections => {
                let season = Season::new(parts.next()?.parse().ok()?);
                let position = Position::from_str(parts.next()?).ok()?;
                let week = week_of(parts.next()?)?;
                Some(Self {
                    category,
                    season,
                    week: Some(week),
                    position: Some(position),
                })
            }
        }
    }
}
