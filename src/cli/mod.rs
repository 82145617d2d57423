//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Position, Season, Week};

/// Cache and output flags shared by the `get` commands.
#[derive(Debug, Args)]
pub struct CommonFlags {
    /// Re-run normalization from cached raw data, overwriting the
    /// normalized file.
    #[clap(long)]
    pub refresh: bool,

    /// Discard the cached raw data too and fetch from the source again.
    #[clap(long)]
    pub refetch: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Player stats for one position, per week or full season.
    Stats {
        /// Position to fetch: QB, RB, WR, TE, K, or DST.
        #[clap(long, short = 'p')]
        position: Position,

        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Single week; omit for full-season totals.
        #[clap(long, short)]
        week: Option<Week>,

        #[clap(flatten)]
        flags: CommonFlags,
    },

    /// Snap-count analysis for one week, all positions.
    Snapcounts {
        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Week to fetch.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        #[clap(flatten)]
        flags: CommonFlags,
    },

    /// Weekly projections for one position.
    ///
    /// The source only serves the season in progress; `--season` picks
    /// the cache location and the year teams resolve against.
    Projections {
        /// Position to fetch: QB, RB, WR, TE, K, or DST.
        #[clap(long, short = 'p')]
        position: Position,

        /// Season year the projections belong to.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Week to fetch.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        #[clap(flatten)]
        flags: CommonFlags,
    },

    /// Season schedule grid, flattened to one row per team-week.
    Schedule {
        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        #[clap(flatten)]
        flags: CommonFlags,
    },

    /// Accumulate cached weekly stats into a season summary.
    Summary {
        /// Position to accumulate: QB, RB, WR, TE, K, or DST.
        #[clap(long, short = 'p')]
        position: Position,

        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of a summary line.
        #[clap(long)]
        json: bool,
    },

    /// Fetch schedule, yearly stats, weekly stats, and snap counts for
    /// a season.
    UpdateAll {
        /// Season year (e.g. 2021).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Update weeks 1 through this one; defaults to the whole
        /// season.
        #[clap(long)]
        through_week: Option<Week>,

        /// Fetch everything again even when raw data is cached.
        #[clap(long)]
        refetch: bool,

        /// Show per-week progress.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "ffdp", about = "FantasyPros NFL stats pipeline")]
pub struct Ffdp {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and normalize data from FantasyPros.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Re-run normalization over every cached raw table.
    Replay {
        /// Restrict the replay to one season.
        #[clap(long, short)]
        season: Option<Season>,
    },
}
