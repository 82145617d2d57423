//! Integration tests for schema-driven normalization across the real
//! dataset schemas.

use ffdp::sources::fantasypros;
use ffdp::team::{
    normalize_table, parse_player, NameFormat, RawTable, RowContext, StatValue, TeamRegistry,
    TeamResolver,
};
use ffdp::{Position, Season, Week};

fn qb_header() -> Vec<String> {
    [
        "Rank", "Player", "CMP", "ATT", "PCT", "YDS", "Y/A", "TD", "INT", "SACKS", "ATT", "YDS",
        "TD", "FL", "G", "FPTS", "FPTS/G", "ROST",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn qb_row(player: &str, yds: &str) -> Vec<String> {
    [
        "1", player, "30", "44", "68.2", yds, "8.2", "3", "1", "2", "5", "21", "0", "0", "1",
        "28.7", "28.7", "99.9%",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn qb_ctx() -> RowContext {
    RowContext {
        season: Season::new(2021),
        week: Some(Week::new(5)),
        position: Some(Position::QB),
    }
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_weekly_qb_stats_end_to_end() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let table = RawTable {
            header: qb_header(),
            rows: vec![qb_row("Patrick Mahomes II(KC)", "1,234")],
        };

        let schema = fantasypros::stats_schema(Position::QB);
        let batch = normalize_table(&table, schema, &resolver, qb_ctx()).unwrap();

        assert!(batch.row_errors.is_empty());
        assert!(batch.unresolved.is_empty());
        let record = &batch.records[0];
        assert_eq!(record.player, "Patrick Mahomes II");
        assert_eq!(record.team, "KC");
        assert_eq!(record.position, "QB");
        assert_eq!(record.week, Some(Week::new(5)));
        assert_eq!(record.stat("passing_yds"), Some(&StatValue::Int(1234)));
        assert_eq!(record.stat("rost"), Some(&StatValue::Float(99.9)));
    }

    #[test]
    fn test_unmappable_team_keeps_row_with_raw_token() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let table = RawTable {
            header: qb_header(),
            rows: vec![qb_row("Some Player(XYZ)", "200")],
        };

        let schema = fantasypros::stats_schema(Position::QB);
        let batch = normalize_table(&table, schema, &resolver, qb_ctx()).unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].team, "XYZ");
        assert_eq!(batch.unresolved.len(), 1);
        assert_eq!(batch.unresolved[0].token, "XYZ");
    }

    #[test]
    fn test_legacy_token_resolves_per_row_year() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let table = RawTable {
            header: qb_header(),
            rows: vec![qb_row("Derek Carr(OAK)", "300")],
        };
        let schema = fantasypros::stats_schema(Position::QB);

        let ctx_2018 = RowContext {
            season: Season::new(2018),
            week: Some(Week::new(1)),
            position: Some(Position::QB),
        };
        let batch = normalize_table(&table, schema, &resolver, ctx_2018).unwrap();
        assert_eq!(batch.records[0].team, "OAK");

        let batch = normalize_table(&table, schema, &resolver, qb_ctx()).unwrap();
        assert_eq!(batch.records[0].team, "LV");
    }

    #[test]
    fn test_snapcounts_resolve_the_team_column() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let header: Vec<String> = [
            "Player", "Pos", "Team", "Games", "Snaps", "Snaps/Gm", "Snap %", "Rush %", "Tgt %",
            "Touch %", "Util %", "Fantasy Pts", "Pts/100 Snaps",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let row: Vec<String> = [
            "Trevor Lawrence",
            "QB",
            "JAX",
            "1",
            "1,024",
            "60",
            "98",
            "2",
            "0",
            "2",
            "4",
            "17.3",
            "1.7",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let ctx = RowContext {
            season: Season::new(2021),
            week: Some(Week::new(3)),
            position: None,
        };
        let batch = normalize_table(
            &RawTable {
                header,
                rows: vec![row],
            },
            &fantasypros::SNAPCOUNTS_SCHEMA,
            &resolver,
            ctx,
        )
        .unwrap();

        let record = &batch.records[0];
        assert_eq!(record.team, "JAC");
        assert_eq!(record.position, "QB");
        assert_eq!(record.stat("snaps"), Some(&StatValue::Int(1024)));
    }

    #[test]
    fn test_projections_split_concatenated_names() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let header: Vec<String> = ["Player", "REC", "YDS", "TD", "FL", "FPTS"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = vec![
            vec![
                "Travis KelceKC".to_string(),
                "7.5".to_string(),
                "92.1".to_string(),
                "0.7".to_string(),
                "0.1".to_string(),
                "18.9".to_string(),
            ],
            vec![
                "Patrick Mahomes IIKC".to_string(),
                "0.0".to_string(),
                "0.0".to_string(),
                "0.0".to_string(),
                "0.0".to_string(),
                "0.0".to_string(),
            ],
        ];

        let ctx = RowContext {
            season: Season::new(2021),
            week: Some(Week::new(1)),
            position: Some(Position::TE),
        };
        let batch = normalize_table(
            &RawTable { header, rows },
            fantasypros::projections_schema(Position::TE),
            &resolver,
            ctx,
        )
        .unwrap();

        assert_eq!(batch.records[0].player, "Travis Kelce");
        assert_eq!(batch.records[0].team, "KC");
        assert_eq!(batch.records[1].player, "Patrick Mahomes II");
        assert_eq!(batch.records[1].team, "KC");
    }

    #[test]
    fn test_parenthesized_round_trip_property() {
        let registry = TeamRegistry::nfl();
        let names = ["Patrick Mahomes II", "D'Andre Swift", "Odell Beckham Jr."];
        for name in names {
            for team in ["KC", "DET", "LAR", "FA"] {
                let raw = format!("{}({})", name, team);
                let parsed =
                    parse_player(&raw, NameFormat::ParenthesizedTeam, &registry).unwrap();
                assert_eq!(parsed.name, name);
                assert_eq!(parsed.team_token.as_deref(), Some(team));
            }
        }
    }

    #[test]
    fn test_bad_cell_reports_column_and_row_context() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let table = RawTable {
            header: qb_header(),
            rows: vec![
                qb_row("Josh Allen(BUF)", "bogus"),
                qb_row("Tom Brady(TB)", "402"),
            ],
        };

        let schema = fantasypros::stats_schema(Position::QB);
        let batch = normalize_table(&table, schema, &resolver, qb_ctx()).unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].player, "Tom Brady");
        assert_eq!(batch.row_errors.len(), 1);
        let msg = batch.row_errors[0].to_string();
        assert!(msg.contains("passing_yds"));
        assert!(msg.contains("bogus"));
        assert!(msg.contains("row 0"));
    }

    #[test]
    fn test_same_input_same_output() {
        let registry = TeamRegistry::nfl();
        let resolver = TeamResolver::new(&registry);
        let table = RawTable {
            header: qb_header(),
            rows: vec![
                qb_row("Josh Allen(BUF)", "4,407"),
                qb_row("Derek Carr(OAK)", "3,100"),
            ],
        };
        let schema = fantasypros::stats_schema(Position::QB);

        let first = normalize_table(&table, schema, &resolver, qb_ctx()).unwrap();
        let second = normalize_table(&table, schema, &resolver, qb_ctx()).unwrap();
        assert_eq!(first.records, second.records);
    }
}
