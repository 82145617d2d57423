//! Bulk fetch for a whole season.
//!
//! Populates the cache with the schedule, yearly stats, and every
//! week's stats and snap counts. Projections are excluded because the
//! source only serves them for the season in progress; fetch those
//! with `get projections` while the season runs.

use crate::cli::types::{Position, Season, Week};
use crate::commands::common::CommandContext;
use crate::commands::snapcounts::{load_snapcounts, SnapcountsParams};
use crate::commands::stats::{load_stats, StatsParams};
use crate::error::Result;
use crate::schedule::normalize_schedule;
use crate::sources::fantasypros;
use crate::storage::DatasetKey;

pub struct UpdateAllParams {
    pub season: Season,
    /// Update weeks 1 through this one; defaults to the whole season.
    pub through_week: Option<Week>,
    pub refetch: bool,
    pub verbose: bool,
}

/// One dataset failing should not strand the rest of a bulk run, so
/// errors are reported and counted instead of propagated.
pub async fn handle_update_all(params: UpdateAllParams) -> Result<()> {
    let ctx = CommandContext::new()?;
    let through_week = match params.through_week {
        Some(week) => params.season.check_week(week)?.as_u16(),
        None => params.season.weeks()?,
    };

    let mut fetched = 0usize;
    let mut failed = 0usize;
    let mut track = |label: String, result: Result<()>| match result {
        Ok(()) => fetched += 1,
        Err(err) => {
            failed += 1;
            eprintln!("{} failed: {}", label, err);
        }
    };

    if params.verbose {
        println!(
            "Updating {} through week {}...",
            params.season, through_week
        );
    }

    track(
        format!("schedule {}", params.season),
        update_schedule(&ctx, params.season, params.refetch).await,
    );

    for position in Position::all() {
        let label = format!("yearly stats {} {}", position, params.season);
        let stats_params = StatsParams {
            position,
            season: params.season,
            week: None,
            refresh: true,
            refetch: params.refetch,
            as_json: false,
        };
        track(label, load_stats(&ctx, &stats_params).await.map(|_| ()));
    }

    for week_num in 1..=through_week {
        let week = Week::new(week_num);
        if params.verbose {
            println!("Processing week {}...", week_num);
        }

        let snap_params = SnapcountsParams {
            season: params.season,
            week,
            refresh: true,
            refetch: params.refetch,
            as_json: false,
        };
        track(
            format!("snapcounts {} week {}", params.season, week_num),
            load_snapcounts(&ctx, &snap_params).await.map(|_| ()),
        );

        for position in Position::all() {
            let label = format!("weekly stats {} {} week {}", position, params.season, week_num);
            let stats_params = StatsParams {
                position,
                season: params.season,
                week: Some(week),
                refresh: true,
                refetch: params.refetch,
                as_json: false,
            };
            track(label, load_stats(&ctx, &stats_params).await.map(|_| ()));
        }
    }

    println!("{} datasets updated, {} failed", fetched, failed);
    Ok(())
}

async fn update_schedule(ctx: &CommandContext, season: Season, refetch: bool) -> Result<()> {
    let key = DatasetKey::schedule(season);
    let url = fantasypros::schedule_url(season);
    let table = ctx.raw_table_at(&url, &key, refetch).await?;
    let batch = normalize_schedule(&table, season, &ctx.resolver())?;
    ctx.store.write_schedule(&key, &batch.matchups)?;
    Ok(())
}
