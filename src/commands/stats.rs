//! Weekly and yearly player stats.

use crate::cli::types::{Position, Season, Week};
use crate::commands::common::{load_normalized, print_records, CommandContext};
use crate::error::Result;
use crate::sources::fantasypros;
use crate::storage::DatasetKey;
use crate::team::normalize::{NormalizedRecord, RowContext};
use std::sync::Arc;

pub struct StatsParams {
    pub position: Position,
    pub season: Season,
    /// `None` fetches full-season totals instead of one week.
    pub week: Option<Week>,
    pub refresh: bool,
    pub refetch: bool,
    pub as_json: bool,
}

pub async fn handle_stats(params: StatsParams) -> Result<()> {
    let ctx = CommandContext::new()?;
    let records = load_stats(&ctx, &params).await?;
    print_records(&records, params.as_json)
}

pub(crate) async fn load_stats(
    ctx: &CommandContext,
    params: &StatsParams,
) -> Result<Arc<Vec<NormalizedRecord>>> {
    let (dataset, key, week) = match params.week {
        Some(week) => {
            params.season.check_week(week)?;
            (
                fantasypros::weekly_stats(params.position, params.season, week),
                DatasetKey::weekly_stats(params.position, params.season, week),
                Some(week),
            )
        }
        None => (
            fantasypros::yearly_stats(params.position, params.season),
            DatasetKey::yearly_stats(params.position, params.season),
            None,
        ),
    };

    let row_ctx = RowContext {
        season: params.season,
        week,
        position: Some(params.position),
    };
    load_normalized(ctx, &dataset, &key, row_ctx, params.refresh, params.refetch).await
}
