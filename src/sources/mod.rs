//! Source-site plumbing: dataset catalogue, HTTP fetch, table extraction.

pub mod fantasypros;
pub mod http;
pub mod tables;

pub use fantasypros::{Category, Dataset};
pub use tables::{extract_tables, first_table};
