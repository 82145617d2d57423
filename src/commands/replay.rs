//! Re-run normalization over every cached raw table.
//!
//! This is how a normalizer or registry fix reaches data that was
//! already fetched: the raw tree is replayed into the normalized tree
//! without touching the network. Each (category, season, week,
//! position) key is independent, so the work fans out across threads.

use crate::cli::types::Season;
use crate::commands::common::CommandContext;
use crate::error::{FfdpError, Result};
use crate::schedule::normalize_schedule;
use crate::sources::fantasypros::{self, Category};
use crate::storage::DatasetKey;
use crate::team::normalize::{normalize_table, RowContext, TableSchema};
use rayon::prelude::*;

pub struct ReplayParams {
    /// Restrict the replay to one season.
    pub season: Option<Season>,
}

#[derive(Debug)]
struct ReplayOutcome {
    records: usize,
    row_errors: usize,
    unresolved: usize,
}

pub fn handle_replay(params: ReplayParams) -> Result<()> {
    let ctx = CommandContext::new()?;

    let keys: Vec<DatasetKey> = ctx
        .store
        .scan_raw()?
        .into_iter()
        .filter(|key| params.season.map_or(true, |season| key.season == season))
        .collect();

    if keys.is_empty() {
        println!("raw cache is empty; nothing to replay");
        return Ok(());
    }

    let outcomes: Vec<(DatasetKey, Result<ReplayOutcome>)> = keys
        .par_iter()
        .map(|key| (*key, replay_one(&ctx, key)))
        .collect();

    let mut replayed = 0usize;
    let mut failed = 0usize;
    for (key, outcome) in outcomes {
        let path = key.relative_path()?;
        match outcome {
            Ok(outcome) => {
                replayed += 1;
                if outcome.row_errors > 0 || outcome.unresolved > 0 {
                    eprintln!(
                        "{}: {} rows, {} skipped, {} unresolved teams",
                        path.display(),
                        outcome.records,
                        outcome.row_errors,
                        outcome.unresolved
                    );
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("{} failed: {}", path.display(), err);
            }
        }
    }

    println!("{} datasets replayed, {} failed", replayed, failed);
    Ok(())
}

fn schema_for(key: &DatasetKey) -> Result<&'static TableSchema> {
    let position = || {
        key.position.ok_or_else(|| FfdpError::Cache {
            message: format!("{} key lacks a position", key.category),
        })
    };
    match key.category {
        Category::WeeklyStats | Category::YearlyStats | Category::StatsSummary => {
            Ok(fantasypros::stats_schema(position()?))
        }
        Category::Projections => Ok(fantasypros::projections_schema(position()?)),
        Category::Snapcounts => Ok(&fantasypros::SNAPCOUNTS_SCHEMA),
        Category::Schedule => Err(FfdpError::Cache {
            message: "schedule has no table schema".to_string(),
        }),
    }
}

fn replay_one(ctx: &CommandContext, key: &DatasetKey) -> Result<ReplayOutcome> {
    let table = ctx.store.read_raw(key)?.ok_or_else(|| FfdpError::Cache {
        message: format!("raw file for {} disappeared mid-replay", key.category),
    })?;

    if key.category == Category::Schedule {
        let batch = normalize_schedule(&table, key.season, &ctx.resolver())?;
        ctx.store.write_schedule(key, &batch.matchups)?;
        return Ok(ReplayOutcome {
            records: batch.matchups.len(),
            row_errors: 0,
            unresolved: batch.unresolved.len(),
        });
    }

    let schema = schema_for(key)?;
    let row_ctx = RowContext {
        season: key.season,
        week: key.week,
        position: key.position,
    };
    let batch = normalize_table(&table, schema, &ctx.resolver(), row_ctx)?;
    ctx.store.write_normalized(key, &batch.records, schema)?;

    Ok(ReplayOutcome {
        records: batch.records.len(),
        row_errors: batch.row_errors.len(),
        unresolved: batch.unresolved.len(),
    })
}
