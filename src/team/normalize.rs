//! Turning scraped stat tables into typed, reconciled records.
//!
//! A [`RawTable`] is all strings, straight from the table collaborator.
//! Normalization renames columns positionally against a [`TableSchema`],
//! splits the player cell, canonicalizes the team for the season, casts
//! every stat to its declared type, and merges in the fields only the
//! caller knows (season, week, position). Row-level failures are
//! collected per batch and never abort sibling rows.

use crate::cli::types::{Position, Season, Week};
use crate::error::{FfdpError, Result};
use crate::team::player::{parse_player, NameFormat, ParsedPlayer};
use crate::team::resolver::{TeamResolver, UnresolvedTeamToken};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const PLAYER_COLUMN: &str = "player";
pub const TEAM_COLUMN: &str = "team";
pub const POSITION_COLUMN: &str = "position";

/// Target type of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Int,
    Float,
}

impl ColumnType {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
        }
    }
}

/// Ordered column layout for one stat table.
///
/// Scraped tables are positional: the schema's columns are applied to
/// the table left to right, so order matters. Every schema carries a
/// `player` column; `team` and `position` columns appear only where the
/// source publishes them.
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Human label used in error messages, e.g. `"weekly stats QB"`.
    pub category: &'static str,
    /// How the player cell encodes name and team.
    pub name_format: NameFormat,
    /// Target column names and types, in table order.
    pub columns: &'static [(&'static str, ColumnType)],
}

impl TableSchema {
    /// Columns that survive into the record's stat map, i.e. everything
    /// except the identity columns.
    pub fn stat_columns(&self) -> Vec<(&'static str, ColumnType)> {
        self.columns
            .iter()
            .copied()
            .filter(|(name, _)| {
                *name != PLAYER_COLUMN && *name != TEAM_COLUMN && *name != POSITION_COLUMN
            })
            .collect()
    }
}

/// One typed stat value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(v) => write!(f, "{}", v),
            StatValue::Float(v) => write!(f, "{}", v),
            StatValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Header and row strings extracted from one HTML table.
///
/// This is the boundary with the fetch collaborator: every value is
/// still a string, exactly as scraped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Caller-known fields merged into every record; none of them is
/// derivable from the row itself.
#[derive(Debug, Clone, Copy)]
pub struct RowContext {
    pub season: Season,
    pub week: Option<Week>,
    /// `None` for sources that publish the position as a column.
    pub position: Option<Position>,
}

/// One normalized row.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub player: String,
    pub team: String,
    pub position: String,
    pub week: Option<Week>,
    pub season: Season,
    /// Stat columns in schema order.
    pub stats: Vec<(String, StatValue)>,
}

impl NormalizedRecord {
    pub fn stat(&self, name: &str) -> Option<&StatValue> {
        self.stats
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5 + self.stats.len()))?;
        map.serialize_entry("player", &self.player)?;
        map.serialize_entry("team", &self.team)?;
        map.serialize_entry("position", &self.position)?;
        map.serialize_entry("week", &self.week)?;
        map.serialize_entry("year", &self.season)?;
        for (column, value) in &self.stats {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Result of normalizing one table: records plus everything that went
/// wrong, row by row. Whether row errors or unresolved teams are fatal
/// is the caller's policy.
#[derive(Debug)]
pub struct NormalizedBatch {
    pub records: Vec<NormalizedRecord>,
    pub row_errors: Vec<FfdpError>,
    pub unresolved: Vec<UnresolvedTeamToken>,
}

/// Strip thousands separators from a numeric string: `"1,234"` → `"1234"`.
pub fn strip_thousands(value: &str) -> String {
    value.replace(',', "")
}

fn clean_numeric(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    strip_thousands(trimmed)
}

pub(crate) fn cast_value(cell: &str, ty: ColumnType, column: &str, row: usize) -> Result<StatValue> {
    let cast_err = || FfdpError::Cast {
        row,
        column: column.to_string(),
        value: cell.to_string(),
        target: ty.name(),
    };
    match ty {
        ColumnType::Text => Ok(StatValue::Text(cell.trim().to_string())),
        ColumnType::Int => clean_numeric(cell)
            .parse::<i64>()
            .map(StatValue::Int)
            .map_err(|_| cast_err()),
        ColumnType::Float => clean_numeric(cell)
            .parse::<f64>()
            .map(StatValue::Float)
            .map_err(|_| cast_err()),
    }
}

/// Normalize a whole table against `schema`.
///
/// A header/schema width mismatch fails the table; everything after
/// that is collected per row. Given the same table, schema, and
/// context, the output is identical on every call.
pub fn normalize_table(
    table: &RawTable,
    schema: &TableSchema,
    resolver: &TeamResolver<'_>,
    ctx: RowContext,
) -> Result<NormalizedBatch> {
    // Sources sometimes emit stray index columns with a blank label;
    // drop those before the positional rename.
    let keep: Vec<usize> = table
        .header
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.trim().is_empty())
        .map(|(i, _)| i)
        .collect();

    if keep.len() != schema.columns.len() {
        return Err(FfdpError::SchemaMismatch {
            category: schema.category.to_string(),
            expected: schema.columns.len(),
            found: keep.len(),
        });
    }

    let mut batch = NormalizedBatch {
        records: Vec::with_capacity(table.rows.len()),
        row_errors: Vec::new(),
        unresolved: Vec::new(),
    };

    for (row_index, row) in table.rows.iter().enumerate() {
        match normalize_row(row, &keep, schema, resolver, ctx, row_index, &mut batch.unresolved) {
            Ok(record) => batch.records.push(record),
            Err(err) => batch.row_errors.push(err),
        }
    }

    Ok(batch)
}

#[allow(clippy::too_many_arguments)]
fn normalize_row(
    row: &[String],
    keep: &[usize],
    schema: &TableSchema,
    resolver: &TeamResolver<'_>,
    ctx: RowContext,
    row_index: usize,
    unresolved: &mut Vec<UnresolvedTeamToken>,
) -> Result<NormalizedRecord> {
    let mut cells = Vec::with_capacity(keep.len());
    for &i in keep {
        let cell = row.get(i).ok_or_else(|| FfdpError::SchemaMismatch {
            category: schema.category.to_string(),
            expected: schema.columns.len(),
            found: row.len(),
        })?;
        cells.push(cell.as_str());
    }

    let mut parsed: Option<ParsedPlayer> = None;
    let mut team_cell: Option<String> = None;
    let mut position_cell: Option<String> = None;
    let mut stats = Vec::new();

    for ((name, ty), cell) in schema.columns.iter().zip(cells) {
        if *name == PLAYER_COLUMN {
            parsed = Some(parse_player(cell, schema.name_format, resolver.registry())?);
        } else if *name == TEAM_COLUMN {
            team_cell = Some(cell.trim().to_string());
        } else if *name == POSITION_COLUMN {
            position_cell = Some(cell.trim().to_string());
        } else {
            stats.push((name.to_string(), cast_value(cell, *ty, name, row_index)?));
        }
    }

    let Some(parsed) = parsed else {
        return Err(FfdpError::InvalidSchema {
            category: schema.category.to_string(),
            message: "schema has no player column".to_string(),
        });
    };

    // A dedicated team column wins over a token embedded in the name.
    let token = team_cell.or(parsed.team_token).unwrap_or_default();
    let resolution = resolver.resolve(&token, ctx.season);
    if !resolution.is_resolved() {
        unresolved.push(UnresolvedTeamToken {
            token: resolution.team.clone(),
            season: ctx.season,
        });
    }

    let position = match ctx.position {
        Some(position) => position.to_string(),
        None => position_cell.unwrap_or_default(),
    };

    Ok(NormalizedRecord {
        player: parsed.name,
        team: resolution.team,
        position,
        week: ctx.week,
        season: ctx.season,
        stats,
    })
}
