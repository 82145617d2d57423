//! Fantasy Football Data Pipeline
//!
//! A Rust library and CLI for scraping, normalizing, and caching NFL
//! fantasy statistics from FantasyPros.
//!
//! ## Features
//!
//! - **Team Reconciliation**: Year-relative resolution of team tokens
//!   across relocations, renamed codes, and free-agent placeholders
//! - **Player Identity Parsing**: Splits the source's three name+team
//!   encodings into clean components without guessing
//! - **Schema-driven Normalization**: One normalizer parameterized by a
//!   per-dataset column schema instead of a loader per stat category
//! - **Two-tier Flat-file Cache**: Raw scraped tables and normalized
//!   CSV output cached separately, so normalization fixes replay
//!   offline
//! - **Bulk Updates**: Populate a whole season's cache in one command
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffdp::team::{normalize_table, RowContext, TeamRegistry, TeamResolver};
//! use ffdp::sources::fantasypros;
//! use ffdp::{Position, Season, Week};
//!
//! # fn example(table: ffdp::team::RawTable) -> ffdp::Result<()> {
//! let registry = TeamRegistry::nfl();
//! let resolver = TeamResolver::new(&registry);
//! let schema = fantasypros::stats_schema(Position::QB);
//! let ctx = RowContext {
//!     season: Season::new(2021),
//!     week: Some(Week::new(5)),
//!     position: Some(Position::QB),
//! };
//!
//! let batch = normalize_table(&table, schema, &resolver, ctx)?;
//! for record in &batch.records {
//!     println!("{} ({})", record.player, record.team);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the cache somewhere other than the platform cache directory:
//! ```bash
//! export FFDP_CACHE_DIR=/data/ffdp-cache
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod schedule;
pub mod sources;
pub mod storage;
pub mod team;

// Re-export commonly used types
pub use cli::types::{Position, Season, Week};
pub use error::{FfdpError, Result};
pub use storage::CACHE_DIR_ENV_VAR;
pub use team::{TeamRegistry, TeamResolver, FREE_AGENT};
