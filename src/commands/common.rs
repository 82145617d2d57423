//! Shared context and helpers for command handlers.
//!
//! This module contains the fetch/normalize/persist path that every
//! stat-shaped `get` command walks, so the handlers stay thin.

use crate::error::Result;
use crate::sources::{first_table, http, Dataset};
use crate::storage::{CsvStore, DatasetKey};
use crate::team::normalize::{
    normalize_table, NormalizedBatch, NormalizedRecord, RawTable, RowContext,
};
use crate::team::registry::TeamRegistry;
use crate::team::resolver::TeamResolver;
use std::sync::Arc;

/// Resources most commands need: the immutable team registry, the HTTP
/// client, and the flat-file store.
pub struct CommandContext {
    pub registry: TeamRegistry,
    pub client: reqwest::Client,
    pub store: CsvStore,
}

impl CommandContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: TeamRegistry::nfl(),
            client: http::client()?,
            store: CsvStore::open_default(),
        })
    }

    pub fn resolver(&self) -> TeamResolver<'_> {
        TeamResolver::new(&self.registry)
    }

    /// Raw table for a URL: cache hit unless `refetch`, otherwise
    /// fetched and written through to the raw tree.
    pub async fn raw_table_at(
        &self,
        url: &str,
        key: &DatasetKey,
        refetch: bool,
    ) -> Result<RawTable> {
        if !refetch {
            if let Some(table) = self.store.read_raw(key)? {
                return Ok(table);
            }
        }
        let html = http::fetch_html(&self.client, url).await?;
        let table = first_table(&html, url)?;
        self.store.write_raw(key, &table)?;
        Ok(table)
    }
}

/// Load a normalized dataset, walking the tiers as needed:
/// normalized cache → raw cache → network. `refresh` skips the
/// normalized tier, `refetch` skips both.
pub async fn load_normalized(
    ctx: &CommandContext,
    dataset: &Dataset,
    key: &DatasetKey,
    row_ctx: RowContext,
    refresh: bool,
    refetch: bool,
) -> Result<Arc<Vec<NormalizedRecord>>> {
    if !refresh && !refetch {
        if let Some(records) = ctx.store.read_normalized(key, dataset.schema)? {
            return Ok(records);
        }
    }

    let table = ctx.raw_table_at(&dataset.url, key, refetch).await?;
    let batch = normalize_table(&table, dataset.schema, &ctx.resolver(), row_ctx)?;
    report_batch(&batch);
    ctx.store.write_normalized(key, &batch.records, dataset.schema)?;
    Ok(Arc::new(batch.records))
}

/// Report per-row failures and unresolved teams on stderr. Rows with
/// unresolved teams are kept as scraped; failed rows are skipped.
pub fn report_batch(batch: &NormalizedBatch) {
    for err in &batch.row_errors {
        eprintln!("row skipped: {}", err);
    }
    for unresolved in &batch.unresolved {
        eprintln!(
            "team {:?} not recognized for {}; kept as-is",
            unresolved.token, unresolved.season
        );
    }
}

/// Print records as text lines or pretty JSON.
pub fn print_records(records: &[NormalizedRecord], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    for record in records {
        let points = record
            .stat("fantasy_points")
            .map(|value| value.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} ({}, {}) fpts {}",
            record.player, record.team, record.position, points
        );
    }
    Ok(())
}
