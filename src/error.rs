//! Error types for the fantasy football data pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FfdpError>;

#[derive(Error, Debug)]
pub enum FfdpError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no stats table found at {url}")]
    TableNotFound { url: String },

    #[error("table has {found} columns but the {category} schema expects {expected}")]
    SchemaMismatch {
        category: String,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: cannot cast column {column} value {value:?} to {target}")]
    Cast {
        row: usize,
        column: String,
        value: String,
        target: &'static str,
    },

    #[error("cannot separate player name from team suffix in {raw:?}")]
    AmbiguousPlayer { raw: String },

    #[error("invalid schema {category}: {message}")]
    InvalidSchema { category: String, message: String },

    #[error("invalid selector: {message}")]
    Selector { message: String },

    #[error("invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("week {week} is out of range for the {season} season (1..={max})")]
    WeekOutOfRange { week: u16, season: u16, max: u16 },

    #[error("no calendar entry for the {season} season")]
    UnknownSeason { season: u16 },

    #[error("cache error: {message}")]
    Cache { message: String },

    #[error("failed to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}
