//! FantasyPros dataset catalogue: URLs, schemas, and player-string formats.
//!
//! One table of configuration values replaces a loader class per stat
//! category: every dataset is described by its URL, its ordered column
//! schema, and how its player cell encodes the team.

use crate::cli::types::{Position, Season, Week};
use crate::team::normalize::ColumnType::{Float, Int, Text};
use crate::team::normalize::{ColumnType, TableSchema};
use crate::team::player::NameFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASE_URL: &str = "https://www.fantasypros.com/nfl";

/// The dataset families the pipeline knows how to fetch and cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    WeeklyStats,
    YearlyStats,
    Snapcounts,
    Projections,
    Schedule,
    StatsSummary,
}

impl Category {
    /// Directory name inside the cache trees.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::WeeklyStats => "weekly_stats",
            Category::YearlyStats => "yearly_stats",
            Category::Snapcounts => "snapcounts",
            Category::Projections => "projections",
            Category::Schedule => "schedule",
            Category::StatsSummary => "stats_summary",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Category> {
        match name {
            "weekly_stats" => Some(Category::WeeklyStats),
            "yearly_stats" => Some(Category::YearlyStats),
            "snapcounts" => Some(Category::Snapcounts),
            "projections" => Some(Category::Projections),
            "schedule" => Some(Category::Schedule),
            "stats_summary" => Some(Category::StatsSummary),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Everything needed to fetch and normalize one dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub category: Category,
    pub url: String,
    pub schema: &'static TableSchema,
}

const STATS_QB: &[(&str, ColumnType)] = &[
    ("rank", Int),
    ("player", Text),
    ("passing_cmp", Int),
    ("passing_att", Int),
    ("passing_pct", Float),
    ("passing_yds", Int),
    ("passing_ya", Float),
    ("passing_td", Int),
    ("passing_int", Int),
    ("passing_sacks", Int),
    ("rushing_att", Int),
    ("rushing_yds", Int),
    ("rushing_td", Int),
    ("fumbles_lost", Int),
    ("games", Int),
    ("fantasy_points", Float),
    ("fantasy_points_per_game", Float),
    ("rost", Float),
];

const STATS_RB: &[(&str, ColumnType)] = &[
    ("rank", Int),
    ("player", Text),
    ("rushing_att", Int),
    ("rushing_yds", Int),
    ("rushing_ya", Float),
    ("rushing_lg", Int),
    ("rushing_20p", Int),
    ("rushing_td", Int),
    ("receiving_rec", Int),
    ("receiving_tgt", Int),
    ("receiving_yds", Int),
    ("receiving_yr", Float),
    ("receiving_td", Int),
    ("fumbles_lost", Int),
    ("games", Int),
    ("fantasy_points", Float),
    ("fantasy_points_per_game", Float),
    ("rost", Float),
];

const STATS_RECEIVER: &[(&str, ColumnType)] = &[
    ("rank", Int),
    ("player", Text),
    ("receiving_rec", Int),
    ("receiving_tgt", Int),
    ("receiving_yds", Int),
    ("receiving_yr", Float),
    ("receiving_lg", Int),
    ("receiving_20p", Int),
    ("receiving_td", Int),
    ("rushing_att", Int),
    ("rushing_yds", Int),
    ("rushing_td", Int),
    ("fumbles_lost", Int),
    ("games", Int),
    ("fantasy_points", Float),
    ("fantasy_points_per_game", Float),
    ("rost", Float),
];

const STATS_K: &[(&str, ColumnType)] = &[
    ("rank", Int),
    ("player", Text),
    ("field_goal", Int),
    ("field_goal_att", Int),
    ("pct", Float),
    ("lg", Int),
    ("1-19", Int),
    ("20-29", Int),
    ("30-39", Int),
    ("40-49", Int),
    ("50+", Int),
    ("XPT", Int),
    ("XPA", Int),
    ("games", Int),
    ("fantasy_points", Float),
    ("fantasy_points_per_game", Float),
    ("rost", Float),
];

const STATS_DST: &[(&str, ColumnType)] = &[
    ("rank", Int),
    ("player", Text),
    ("defense_sacks", Int),
    ("defense_ints", Int),
    ("fumble_recovery", Int),
    ("fumble_forced", Int),
    ("defense_td", Int),
    ("defense_safety", Int),
    ("defense_spc_td", Int),
    ("games", Int),
    ("fantasy_points", Float),
    ("fantasy_points_per_game", Float),
    ("rost", Float),
];

static STATS_SCHEMA_QB: TableSchema = TableSchema {
    category: "stats QB",
    name_format: NameFormat::ParenthesizedTeam,
    columns: STATS_QB,
};
static STATS_SCHEMA_RB: TableSchema = TableSchema {
    category: "stats RB",
    name_format: NameFormat::ParenthesizedTeam,
    columns: STATS_RB,
};
static STATS_SCHEMA_WR: TableSchema = TableSchema {
    category: "stats WR",
    name_format: NameFormat::ParenthesizedTeam,
    columns: STATS_RECEIVER,
};
static STATS_SCHEMA_TE: TableSchema = TableSchema {
    category: "stats TE",
    name_format: NameFormat::ParenthesizedTeam,
    columns: STATS_RECEIVER,
};
static STATS_SCHEMA_K: TableSchema = TableSchema {
    category: "stats K",
    name_format: NameFormat::ParenthesizedTeam,
    columns: STATS_K,
};
static STATS_SCHEMA_DST: TableSchema = TableSchema {
    category: "stats DST",
    name_format: NameFormat::ParenthesizedTeam,
    columns: STATS_DST,
};

/// Weekly and yearly stat tables share one layout per position.
pub fn stats_schema(position: Position) -> &'static TableSchema {
    match position {
        Position::QB => &STATS_SCHEMA_QB,
        Position::RB => &STATS_SCHEMA_RB,
        Position::WR => &STATS_SCHEMA_WR,
        Position::TE => &STATS_SCHEMA_TE,
        Position::K => &STATS_SCHEMA_K,
        Position::DST => &STATS_SCHEMA_DST,
    }
}

const SNAPCOUNT_COLUMNS: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("position", Text),
    ("team", Text),
    ("games", Int),
    ("snaps", Int),
    ("snaps_per_game", Int),
    ("snaps_percent", Int),
    ("rush_percent", Int),
    ("tgt_percent", Int),
    ("touch_percent", Int),
    ("util_percent", Int),
    ("fantasy_points", Float),
    ("points_per_100_snaps", Float),
];

pub static SNAPCOUNTS_SCHEMA: TableSchema = TableSchema {
    category: "snapcounts",
    name_format: NameFormat::SeparateColumn,
    columns: SNAPCOUNT_COLUMNS,
};

const PROJECTIONS_QB: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("passing_att", Float),
    ("passing_cmp", Float),
    ("passing_yds", Float),
    ("passing_td", Float),
    ("passing_int", Float),
    ("rushing_att", Float),
    ("rushing_yds", Float),
    ("rushing_td", Float),
    ("fumbles_lost", Float),
    ("fantasy_points", Float),
];

const PROJECTIONS_RB: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("rushing_att", Float),
    ("rushing_yds", Float),
    ("rushing_td", Float),
    ("receiving_rec", Float),
    ("receiving_yds", Float),
    ("receiving_td", Float),
    ("fumbles_lost", Float),
    ("fantasy_points", Float),
];

const PROJECTIONS_WR: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("receiving_rec", Float),
    ("receiving_yds", Float),
    ("receiving_td", Float),
    ("rushing_att", Float),
    ("rushing_yds", Float),
    ("rushing_td", Float),
    ("fumbles_lost", Float),
    ("fantasy_points", Float),
];

const PROJECTIONS_TE: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("receiving_rec", Float),
    ("receiving_yds", Float),
    ("receiving_td", Float),
    ("fumbles_lost", Float),
    ("fantasy_points", Float),
];

const PROJECTIONS_K: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("field_goal", Float),
    ("field_goal_att", Float),
    ("XPT", Float),
    ("fantasy_points", Float),
];

const PROJECTIONS_DST: &[(&str, ColumnType)] = &[
    ("player", Text),
    ("sacks", Float),
    ("defense_int", Float),
    ("fumble_recovery", Float),
    ("fumble_forced", Float),
    ("defense_td", Float),
    ("defense_safety", Float),
    ("pa", Float),
    ("yds_against", Float),
    ("fantasy_points", Float),
];

static PROJECTIONS_SCHEMA_QB: TableSchema = TableSchema {
    category: "projections QB",
    name_format: NameFormat::ConcatenatedTeamSuffix,
    columns: PROJECTIONS_QB,
};
static PROJECTIONS_SCHEMA_RB: TableSchema = TableSchema {
    category: "projections RB",
    name_format: NameFormat::ConcatenatedTeamSuffix,
    columns: PROJECTIONS_RB,
};
static PROJECTIONS_SCHEMA_WR: TableSchema = TableSchema {
    category: "projections WR",
    name_format: NameFormat::ConcatenatedTeamSuffix,
    columns: PROJECTIONS_WR,
};
static PROJECTIONS_SCHEMA_TE: TableSchema = TableSchema {
    category: "projections TE",
    name_format: NameFormat::ConcatenatedTeamSuffix,
    columns: PROJECTIONS_TE,
};
static PROJECTIONS_SCHEMA_K: TableSchema = TableSchema {
    category: "projections K",
    name_format: NameFormat::ConcatenatedTeamSuffix,
    columns: PROJECTIONS_K,
};
static PROJECTIONS_SCHEMA_DST: TableSchema = TableSchema {
    category: "projections DST",
    name_format: NameFormat::ConcatenatedTeamSuffix,
    columns: PROJECTIONS_DST,
};

pub fn projections_schema(position: Position) -> &'static TableSchema {
    match position {
        Position::QB => &PROJECTIONS_SCHEMA_QB,
        Position::RB => &PROJECTIONS_SCHEMA_RB,
        Position::WR => &PROJECTIONS_SCHEMA_WR,
        Position::TE => &PROJECTIONS_SCHEMA_TE,
        Position::K => &PROJECTIONS_SCHEMA_K,
        Position::DST => &PROJECTIONS_SCHEMA_DST,
    }
}

pub fn weekly_stats(position: Position, season: Season, week: Week) -> Dataset {
    Dataset {
        category: Category::WeeklyStats,
        url: format!(
            "{BASE_URL}/stats/{}.php?year={}&week={}&range=week",
            position.url_slug(),
            season,
            week
        ),
        schema: stats_schema(position),
    }
}

pub fn yearly_stats(position: Position, season: Season) -> Dataset {
    Dataset {
        category: Category::YearlyStats,
        url: format!(
            "{BASE_URL}/stats/{}.php?year={}&range=full",
            position.url_slug(),
            season
        ),
        schema: stats_schema(position),
    }
}

pub fn snapcounts(season: Season, week: Week) -> Dataset {
    Dataset {
        category: Category::Snapcounts,
        url: format!(
            "{BASE_URL}/reports/snap-count-analysis/?week={}&snaps=0&range=week&year={}",
            week, season
        ),
        schema: &SNAPCOUNTS_SCHEMA,
    }
}

/// The projections page only serves the season currently in progress,
/// so no year parameter exists.
pub fn projections(position: Position, week: Week) -> Dataset {
    Dataset {
        category: Category::Projections,
        url: format!(
            "{BASE_URL}/projections/{}.php?week={}",
            position.url_slug(),
            week
        ),
        schema: projections_schema(position),
    }
}

pub fn schedule_url(season: Season) -> String {
    format!("{BASE_URL}/schedule/grid.php?year={}", season)
}
