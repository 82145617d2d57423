//! Two-tier flat-file store over the cache trees.
//!
//! Writes go straight to disk as CSV; reads of normalized batches are
//! memoized in a small in-memory LRU so repeated lookups (summaries,
//! bulk commands) do not re-parse files.

use crate::cli::types::{Season, Week};
use crate::error::{FfdpError, Result};
use crate::schedule::Matchup;
use crate::storage::paths::{default_cache_root, DatasetKey};
use crate::team::normalize::{cast_value, NormalizedRecord, RawTable, TableSchema};
use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const MEMO_CAPACITY: usize = 64;

const IDENTITY_COLUMNS: [&str; 5] = ["player", "team", "position", "week", "year"];
const SCHEDULE_COLUMNS: [&str; 5] = ["team", "opponent", "week", "home", "year"];

pub struct CsvStore {
    root: PathBuf,
    memo: Mutex<LruCache<DatasetKey, Arc<Vec<NormalizedRecord>>>>,
}

impl CsvStore {
    /// Store rooted at the default cache directory.
    pub fn open_default() -> Self {
        Self::with_root(default_cache_root())
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            memo: Mutex::new(LruCache::new(
                NonZeroUsize::new(MEMO_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn raw_path(&self, key: &DatasetKey) -> Result<PathBuf> {
        Ok(self.root.join("raw").join(key.relative_path()?))
    }

    fn normalized_path(&self, key: &DatasetKey) -> Result<PathBuf> {
        Ok(self.root.join("normalized").join(key.relative_path()?))
    }

    pub fn has_raw(&self, key: &DatasetKey) -> bool {
        self.raw_path(key).map(|path| path.exists()).unwrap_or(false)
    }

    /// Write a fetched table verbatim into the raw tree.
    pub fn write_raw(&self, key: &DatasetKey, table: &RawTable) -> Result<PathBuf> {
        let path = self.raw_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(path)
    }

    pub fn read_raw(&self, key: &DatasetKey) -> Result<Option<RawTable>> {
        let path = self.raw_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut header: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if i == 0 {
                header = cells;
            } else {
                rows.push(cells);
            }
        }
        Ok(Some(RawTable { header, rows }))
    }

    /// Write a normalized batch and memoize it.
    pub fn write_normalized(
        &self,
        key: &DatasetKey,
        records: &[NormalizedRecord],
        schema: &TableSchema,
    ) -> Result<PathBuf> {
        let path = self.normalized_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let stat_columns = schema.stat_columns();
        let mut writer = csv::Writer::from_path(&path)?;

        let mut header: Vec<&str> = IDENTITY_COLUMNS.to_vec();
        header.extend(stat_columns.iter().map(|(name, _)| *name));
        writer.write_record(&header)?;

        for record in records {
            let mut row: Vec<String> = vec![
                record.player.clone(),
                record.team.clone(),
                record.position.clone(),
                record.week.map(|w| w.to_string()).unwrap_or_default(),
                record.season.to_string(),
            ];
            for (name, _) in &stat_columns {
                row.push(
                    record
                        .stat(name)
                        .map(|value| value.to_string())
                        .unwrap_or_default(),
                );
            }
            writer.write_record(&row)?;
        }
        writer.flush()?;

        if let Ok(mut memo) = self.memo.lock() {
            memo.put(*key, Arc::new(records.to_vec()));
        }
        Ok(path)
    }

    /// Read a normalized batch, from memory if it was touched recently.
    ///
    /// The cached header must match the schema exactly; a mismatch means
    /// the file was written by an older layout and needs a replay.
    pub fn read_normalized(
        &self,
        key: &DatasetKey,
        schema: &TableSchema,
    ) -> Result<Option<Arc<Vec<NormalizedRecord>>>> {
        if let Ok(mut memo) = self.memo.lock() {
            if let Some(records) = memo.get(key) {
                return Ok(Some(Arc::clone(records)));
            }
        }

        let path = self.normalized_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let stat_columns = schema.stat_columns();
        let mut expected: Vec<&str> = IDENTITY_COLUMNS.to_vec();
        expected.extend(stat_columns.iter().map(|(name, _)| *name));

        let mut reader = csv::Reader::from_path(&path)?;
        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();
        if header != expected {
            return Err(FfdpError::Cache {
                message: format!(
                    "{} does not match the {} schema; run a replay",
                    path.display(),
                    schema.category
                ),
            });
        }

        let mut records = Vec::new();
        for (row_index, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |i: usize| record.get(i).unwrap_or_default().to_string();

            let week_cell = cell(3);
            let week = if week_cell.is_empty() {
                None
            } else {
                Some(Week::new(parse_cell(&week_cell, "week", row_index)?))
            };
            let season = Season::new(parse_cell(&cell(4), "year", row_index)?);

            let mut stats = Vec::with_capacity(stat_columns.len());
            for (offset, (name, ty)) in stat_columns.iter().enumerate() {
                let raw = cell(IDENTITY_COLUMNS.len() + offset);
                stats.push((name.to_string(), cast_value(&raw, *ty, name, row_index)?));
            }

            records.push(NormalizedRecord {
                player: cell(0),
                team: cell(1),
                position: cell(2),
                week,
                season,
                stats,
            });
        }

        let records = Arc::new(records);
        if let Ok(mut memo) = self.memo.lock() {
            memo.put(*key, Arc::clone(&records));
        }
        Ok(Some(records))
    }

    /// Write a normalized schedule.
    pub fn write_schedule(&self, key: &DatasetKey, matchups: &[Matchup]) -> Result<PathBuf> {
        let path = self.normalized_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(SCHEDULE_COLUMNS)?;
        for matchup in matchups {
            let home = match matchup.home {
                Some(true) => "home",
                Some(false) => "away",
                None => "",
            };
            let week = matchup.week.to_string();
            let season = matchup.season.to_string();
            writer.write_record([
                matchup.team.as_str(),
                matchup.opponent.as_str(),
                week.as_str(),
                home,
                season.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(path)
    }

    pub fn read_schedule(&self, key: &DatasetKey) -> Result<Option<Vec<Matchup>>> {
        let path = self.normalized_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut matchups = Vec::new();
        for (row_index, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |i: usize| record.get(i).unwrap_or_default().to_string();
            let home = match record.get(3).unwrap_or_default() {
                "home" => Some(true),
                "away" => Some(false),
                "" => None,
                other => {
                    return Err(FfdpError::Cache {
                        message: format!(
                            "{}: row {} has unrecognized home value {:?}",
                            path.display(),
                            row_index,
                            other
                        ),
                    })
                }
            };
            matchups.push(Matchup {
                team: cell(0),
                opponent: cell(1),
                week: Week::new(parse_cell(&cell(2), "week", row_index)?),
                home,
                season: Season::new(parse_cell(&cell(4), "year", row_index)?),
            });
        }
        Ok(Some(matchups))
    }

    /// Every dataset present in the raw tree, in path order.
    pub fn scan_raw(&self) -> Result<Vec<DatasetKey>> {
        let raw_root = self.root.join("raw");
        if !raw_root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        collect_csv_files(&raw_root, &mut files)?;
        files.sort();

        Ok(files
            .iter()
            .filter_map(|path| path.strip_prefix(&raw_root).ok())
            .filter_map(DatasetKey::from_relative_path)
            .collect())
    }
}

fn parse_cell(value: &str, column: &str, row: usize) -> Result<u16> {
    value.parse().map_err(|_| FfdpError::Cast {
        row,
        column: column.to_string(),
        value: value.to_string(),
        target: "int",
    })
}

fn collect_csv_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_csv_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    Ok(())
}
