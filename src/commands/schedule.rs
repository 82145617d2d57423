//! Season schedule.

use crate::cli::types::Season;
use crate::commands::common::CommandContext;
use crate::error::Result;
use crate::schedule::{normalize_schedule, Matchup, BYE};
use crate::sources::fantasypros;
use crate::storage::DatasetKey;

pub struct ScheduleParams {
    pub season: Season,
    pub refresh: bool,
    pub refetch: bool,
    pub as_json: bool,
}

pub async fn handle_schedule(params: ScheduleParams) -> Result<()> {
    let ctx = CommandContext::new()?;
    let key = DatasetKey::schedule(params.season);

    let matchups = if params.refresh || params.refetch {
        None
    } else {
        ctx.store.read_schedule(&key)?
    };

    let matchups = match matchups {
        Some(matchups) => matchups,
        None => {
            let url = fantasypros::schedule_url(params.season);
            let table = ctx.raw_table_at(&url, &key, params.refetch).await?;
            let batch = normalize_schedule(&table, params.season, &ctx.resolver())?;
            for unresolved in &batch.unresolved {
                eprintln!(
                    "team {:?} not recognized for {}; kept as-is",
                    unresolved.token, unresolved.season
                );
            }
            ctx.store.write_schedule(&key, &batch.matchups)?;
            batch.matchups
        }
    };

    print_matchups(&matchups, params.as_json)
}

fn print_matchups(matchups: &[Matchup], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(matchups)?);
        return Ok(());
    }
    for matchup in matchups {
        if matchup.opponent == BYE {
            println!("{} week {}: bye", matchup.team, matchup.week);
        } else {
            let venue = match matchup.home {
                Some(true) => "vs",
                Some(false) => "@",
                None => "-",
            };
            println!(
                "{} week {}: {} {}",
                matchup.team, matchup.week, venue, matchup.opponent
            );
        }
    }
    Ok(())
}
