//! Command implementations behind the CLI.

pub mod common;
pub mod projections;
pub mod replay;
pub mod schedule;
pub mod snapcounts;
pub mod stats;
pub mod summary;
pub mod update_all;
