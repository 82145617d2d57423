//! Team and player identity reconciliation.
//!
//! The one part of the pipeline with real rules: historical
//! abbreviation changes, free-agent placeholders, and the three ways
//! sources encode a player's team next to their name.
//!
//! - `registry`: static franchise and abbreviation-change tables
//! - `resolver`: year-relative token canonicalization
//! - `player`: name/team splitting and name cleaning
//! - `normalize`: schema-driven row normalization

pub mod normalize;
pub mod player;
pub mod registry;
pub mod resolver;

pub use normalize::{
    normalize_table, ColumnType, NormalizedBatch, NormalizedRecord, RawTable, RowContext,
    StatValue, TableSchema,
};
pub use player::{clean_name, parse_player, NameFormat, ParsedPlayer};
pub use registry::{AbbreviationChange, FranchiseRecord, TeamRegistry, FREE_AGENT};
pub use resolver::{ResolutionSource, TeamResolution, TeamResolver, UnresolvedTeamToken};
