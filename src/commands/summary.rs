//! Season summary: accumulate cached weekly stats into one file.
//!
//! Works entirely offline against the normalized tree. Rows from weeks
//! a player did not actually play (the source repeats season totals
//! with `games == 0`) are dropped, and team abbreviations are checked
//! against the registry once more on the way through.

use crate::cli::types::{Position, Season, Week};
use crate::commands::common::{print_records, CommandContext};
use crate::error::Result;
use crate::sources::fantasypros;
use crate::storage::DatasetKey;
use crate::team::normalize::{NormalizedRecord, StatValue};

pub struct SummaryParams {
    pub position: Position,
    pub season: Season,
    pub as_json: bool,
}

pub async fn handle_summary(params: SummaryParams) -> Result<()> {
    let ctx = CommandContext::new()?;
    let schema = fantasypros::stats_schema(params.position);
    let resolver = ctx.resolver();
    let weeks = params.season.weeks()?;

    let mut accumulated: Vec<NormalizedRecord> = Vec::new();
    let mut missing: Vec<u16> = Vec::new();

    for week in 1..=weeks {
        let key = DatasetKey::weekly_stats(params.position, params.season, Week::new(week));
        let Some(records) = ctx.store.read_normalized(&key, schema)? else {
            missing.push(week);
            continue;
        };

        for record in records.iter() {
            if record.stat("games") != Some(&StatValue::Int(1)) {
                continue;
            }
            let mut record = record.clone();
            let resolution = resolver.resolve(&record.team, params.season);
            if !resolution.is_resolved() {
                eprintln!(
                    "team {:?} not recognized for {}; kept as-is",
                    record.team, params.season
                );
            }
            record.team = resolution.team;
            accumulated.push(record);
        }
    }

    if !missing.is_empty() {
        eprintln!(
            "no cached weekly stats for weeks {:?} of {}; run `get update-all` first",
            missing, params.season
        );
    }

    let key = DatasetKey::stats_summary(params.position, params.season);
    let path = ctx.store.write_normalized(&key, &accumulated, schema)?;
    if params.as_json {
        return print_records(&accumulated, true);
    }
    println!(
        "{} rows accumulated for {} {} -> {}",
        accumulated.len(),
        params.position,
        params.season,
        path.display()
    );
    Ok(())
}
