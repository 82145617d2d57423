//! Weekly snap-count analysis.
//!
//! Snap counts cover every position in one table and publish both team
//! and position as their own columns, so no context position is set.

use crate::cli::types::{Season, Week};
use crate::commands::common::{load_normalized, print_records, CommandContext};
use crate::error::Result;
use crate::sources::fantasypros;
use crate::storage::DatasetKey;
use crate::team::normalize::{NormalizedRecord, RowContext};
use std::sync::Arc;

pub struct SnapcountsParams {
    pub season: Season,
    pub week: Week,
    pub refresh: bool,
    pub refetch: bool,
    pub as_json: bool,
}

pub async fn handle_snapcounts(params: SnapcountsParams) -> Result<()> {
    let ctx = CommandContext::new()?;
    let records = load_snapcounts(&ctx, &params).await?;
    print_records(&records, params.as_json)
}

pub(crate) async fn load_snapcounts(
    ctx: &CommandContext,
    params: &SnapcountsParams,
) -> Result<Arc<Vec<NormalizedRecord>>> {
    params.season.check_week(params.week)?;

    let dataset = fantasypros::snapcounts(params.season, params.week);
    let key = DatasetKey::snapcounts(params.season, params.week);
    let row_ctx = RowContext {
        season: params.season,
        week: Some(params.week),
        position: None,
    };
    load_normalized(ctx, &dataset, &key, row_ctx, params.refresh, params.refetch).await
}
