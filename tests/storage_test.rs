//! Integration tests for the flat-file store.

use ffdp::schedule::Matchup;
use ffdp::sources::fantasypros;
use ffdp::storage::{CsvStore, DatasetKey};
use ffdp::team::{normalize_table, RawTable, RowContext, TeamRegistry, TeamResolver};
use ffdp::{FfdpError, Position, Season, Week};
use tempfile::tempdir;

fn sample_table() -> RawTable {
    RawTable {
        header: ["Player", "REC", "YDS", "TD", "FL", "FPTS"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: vec![
            ["Travis KelceKC", "7.5", "92.1", "0.7", "0.1", "18.9"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ["George KittleSF", "5.0", "61.0", "0.4", "0.0", "12.1"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ],
    }
}

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        let dir = tempdir().unwrap();
        let store = CsvStore::with_root(dir.path());
        let key = DatasetKey::projections(Position::TE, Season::new(2021), Week::new(1));

        assert!(!store.has_raw(&key));
        assert_eq!(store.read_raw(&key).unwrap(), None);

        let table = sample_table();
        store.write_raw(&key, &table).unwrap();
        assert!(store.has_raw(&key));
        assert_eq!(store.read_raw(&key).unwrap(), Some(table));
    }

    #[test]
    fn test_normalized_round_trip_through_the_file() {
        let dir = tempdir().unwrap();
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let schema = fantasypros::projections_schema(Position::TE);
        let key = DatasetKey::projections(Position::TE, Season::new(2021), Week::new(1));
        let ctx = RowContext {
            season: Season::new(2021),
            week: Some(Week::new(1)),
            position: Some(Position::TE),
        };

        let batch = normalize_table(&sample_table(), schema, &resolver, ctx).unwrap();
        assert_eq!(batch.records.len(), 2);

        let writer = CsvStore::with_root(dir.path());
        writer.write_normalized(&key, &batch.records, schema).unwrap();

        // Fresh store so the read exercises CSV parsing, not the memo.
        let reader = CsvStore::with_root(dir.path());
        let records = reader.read_normalized(&key, schema).unwrap().unwrap();
        assert_eq!(records.as_slice(), batch.records.as_slice());
    }

    #[test]
    fn test_memoized_read_matches_file_read() {
        let dir = tempdir().unwrap();
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let schema = fantasypros::projections_schema(Position::TE);
        let key = DatasetKey::projections(Position::TE, Season::new(2021), Week::new(1));
        let ctx = RowContext {
            season: Season::new(2021),
            week: Some(Week::new(1)),
            position: Some(Position::TE),
        };
        let batch = normalize_table(&sample_table(), schema, &resolver, ctx).unwrap();

        let store = CsvStore::with_root(dir.path());
        store.write_normalized(&key, &batch.records, schema).unwrap();

        let first = store.read_normalized(&key, schema).unwrap().unwrap();
        let second = store.read_normalized(&key, schema).unwrap().unwrap();
        assert_eq!(first.as_slice(), second.as_slice());
    }

    #[test]
    fn test_schema_mismatch_on_read_is_an_error() {
        let dir = tempdir().unwrap();
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let te_schema = fantasypros::projections_schema(Position::TE);
        let key = DatasetKey::projections(Position::TE, Season::new(2021), Week::new(1));
        let ctx = RowContext {
            season: Season::new(2021),
            week: Some(Week::new(1)),
            position: Some(Position::TE),
        };
        let batch = normalize_table(&sample_table(), te_schema, &resolver, ctx).unwrap();

        let store = CsvStore::with_root(dir.path());
        store.write_normalized(&key, &batch.records, te_schema).unwrap();

        let reader = CsvStore::with_root(dir.path());
        let result = reader.read_normalized(&key, fantasypros::projections_schema(Position::QB));
        assert!(matches!(result, Err(FfdpError::Cache { .. })));
    }

    #[test]
    fn test_schedule_round_trip() {
        let dir = tempdir().unwrap();
        let store = CsvStore::with_root(dir.path());
        let key = DatasetKey::schedule(Season::new(2021));

        let matchups = vec![
            Matchup {
                team: "ARI".to_string(),
                opponent: "KC".to_string(),
                week: Week::new(1),
                home: Some(false),
                season: Season::new(2021),
            },
            Matchup {
                team: "ARI".to_string(),
                opponent: "BYE".to_string(),
                week: Week::new(12),
                home: None,
                season: Season::new(2021),
            },
        ];

        store.write_schedule(&key, &matchups).unwrap();
        assert_eq!(store.read_schedule(&key).unwrap(), Some(matchups));
    }

    #[test]
    fn test_scan_raw_recovers_keys() {
        let dir = tempdir().unwrap();
        let store = CsvStore::with_root(dir.path());
        let keys = [
            DatasetKey::weekly_stats(Position::QB, Season::new(2021), Week::new(5)),
            DatasetKey::snapcounts(Season::new(2020), Week::new(2)),
            DatasetKey::schedule(Season::new(2019)),
        ];
        for key in &keys {
            store.write_raw(key, &sample_table()).unwrap();
        }

        let scanned = store.scan_raw().unwrap();
        assert_eq!(scanned.len(), keys.len());
        for key in &keys {
            assert!(scanned.contains(key), "missing {:?}", key);
        }
    }

    #[test]
    fn test_scan_raw_on_empty_root() {
        let dir = tempdir().unwrap();
        let store = CsvStore::with_root(dir.path());
        assert!(store.scan_raw().unwrap().is_empty());
    }
}
