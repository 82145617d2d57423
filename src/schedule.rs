//! Season schedule grid normalization.
//!
//! The schedule page is one wide grid: a team column followed by one
//! column per week, each cell `@KC` (away), `vsBUF` (home), or
//! `BYE`/`-`. It is the only dataset that is not player-shaped, so it
//! has its own record type instead of a [`TableSchema`].

use crate::cli::types::{Season, Week};
use crate::error::{FfdpError, Result};
use crate::team::normalize::RawTable;
use crate::team::resolver::{TeamResolver, UnresolvedTeamToken};
use serde::{Deserialize, Serialize};

/// Opponent value for a bye week.
pub const BYE: &str = "BYE";

/// One team-week from the schedule grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub team: String,
    pub opponent: String,
    pub week: Week,
    /// `None` for byes.
    pub home: Option<bool>,
    pub season: Season,
}

/// Normalized schedule plus team tokens that did not canonicalize.
#[derive(Debug)]
pub struct ScheduleBatch {
    pub matchups: Vec<Matchup>,
    pub unresolved: Vec<UnresolvedTeamToken>,
}

fn parse_cell(cell: &str) -> (String, Option<bool>) {
    let cell = cell.trim();
    if cell.is_empty() || cell == BYE || cell == "-" {
        return (BYE.to_string(), None);
    }
    if let Some(opponent) = cell.strip_prefix('@') {
        return (opponent.trim().to_string(), Some(false));
    }
    if let Some(opponent) = cell.strip_prefix("vs") {
        return (opponent.trim().to_string(), Some(true));
    }
    (cell.to_string(), None)
}

/// Flatten the grid into one [`Matchup`] per team-week, resolving both
/// sides of every game for the season.
pub fn normalize_schedule(
    table: &RawTable,
    season: Season,
    resolver: &TeamResolver<'_>,
) -> Result<ScheduleBatch> {
    if table.header.len() < 2 {
        return Err(FfdpError::SchemaMismatch {
            category: "schedule".to_string(),
            expected: 2,
            found: table.header.len(),
        });
    }

    let mut batch = ScheduleBatch {
        matchups: Vec::new(),
        unresolved: Vec::new(),
    };

    let resolve = |token: &str, batch_unresolved: &mut Vec<UnresolvedTeamToken>| {
        let resolution = resolver.resolve(token, season);
        if !resolution.is_resolved() {
            batch_unresolved.push(UnresolvedTeamToken {
                token: resolution.team.clone(),
                season,
            });
        }
        resolution.team
    };

    for row in &table.rows {
        let Some(team_cell) = row.first() else {
            continue;
        };
        let team = resolve(team_cell, &mut batch.unresolved);

        for (offset, cell) in row.iter().skip(1).enumerate() {
            let (opponent_token, home) = parse_cell(cell);
            let opponent = if opponent_token == BYE {
                BYE.to_string()
            } else {
                resolve(&opponent_token, &mut batch.unresolved)
            };
            batch.matchups.push(Matchup {
                team: team.clone(),
                opponent,
                week: Week::new(offset as u16 + 1),
                home,
                season,
            });
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::registry::TeamRegistry;

    fn grid() -> RawTable {
        RawTable {
            header: vec!["Team".into(), "1".into(), "2".into(), "3".into()],
            rows: vec![
                vec!["ARI".into(), "@KC".into(), "vsBUF".into(), "BYE".into()],
                vec!["OAK".into(), "vsARI".into(), "-".into(), "@DEN".into()],
            ],
        }
    }

    #[test]
    fn test_grid_flattens_to_matchups() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let batch = normalize_schedule(&grid(), Season::new(2019), &resolver).unwrap();

        assert_eq!(batch.matchups.len(), 6);
        let first = &batch.matchups[0];
        assert_eq!(first.team, "ARI");
        assert_eq!(first.opponent, "KC");
        assert_eq!(first.week, Week::new(1));
        assert_eq!(first.home, Some(false));

        let second = &batch.matchups[1];
        assert_eq!(second.opponent, "BUF");
        assert_eq!(second.home, Some(true));

        let bye = &batch.matchups[2];
        assert_eq!(bye.opponent, BYE);
        assert_eq!(bye.home, None);
    }

    #[test]
    fn test_grid_respects_relocation_year() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);

        let before = normalize_schedule(&grid(), Season::new(2019), &resolver).unwrap();
        assert_eq!(before.matchups[3].team, "OAK");
        assert!(before.unresolved.is_empty());

        let after = normalize_schedule(&grid(), Season::new(2021), &resolver).unwrap();
        assert_eq!(after.matchups[3].team, "LV");
    }

    #[test]
    fn test_dash_counts_as_bye() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let batch = normalize_schedule(&grid(), Season::new(2019), &resolver).unwrap();
        assert_eq!(batch.matchups[4].opponent, BYE);
    }

    #[test]
    fn test_header_too_narrow_is_an_error() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let table = RawTable {
            header: vec!["Team".into()],
            rows: vec![],
        };
        let result = normalize_schedule(&table, Season::new(2021), &resolver);
        assert!(matches!(result, Err(FfdpError::SchemaMismatch { .. })));
    }
}
