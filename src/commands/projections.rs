//! Weekly projections.
//!
//! The source only publishes projections for the season in progress;
//! the season parameter decides where the data is cached and which
//! year team tokens resolve against.

use crate::cli::types::{Position, Season, Week};
use crate::commands::common::{load_normalized, print_records, CommandContext};
use crate::error::Result;
use crate::sources::fantasypros;
use crate::storage::DatasetKey;
use crate::team::normalize::RowContext;

pub struct ProjectionsParams {
    pub position: Position,
    pub season: Season,
    pub week: Week,
    pub refresh: bool,
    pub refetch: bool,
    pub as_json: bool,
}

pub async fn handle_projections(params: ProjectionsParams) -> Result<()> {
    params.season.check_week(params.week)?;

    let ctx = CommandContext::new()?;
    let dataset = fantasypros::projections(params.position, params.week);
    let key = DatasetKey::projections(params.position, params.season, params.week);
    let row_ctx = RowContext {
        season: params.season,
        week: Some(params.week),
        position: Some(params.position),
    };

    let records =
        load_normalized(&ctx, &dataset, &key, row_ctx, params.refresh, params.refetch).await?;
    print_records(&records, params.as_json)
}
