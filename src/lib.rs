/*!
 * # Newsdesk - a small news feed recorder
 *
 * A Rust library and CLI for recording News, Private Ad and Motivational
 * Quote entries into a deduplicating SQLite store, with a human-readable
 * append log and derived word/letter frequency statistics.
 *
 * ## Features
 *
 * - Three record kinds with per-kind uniqueness keys
 * - Sentence-aware capitalization of all record text
 * - Append-only text log mirroring every accepted record
 * - Word and letter frequency CSVs recomputed from the full log
 * - Bulk import from delimited text, JSON and XML files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `normalizer`: Sentence-boundary-aware text normalization
 * - `records`: Record types and log block formatting
 * - `database`: SQLite-backed record store:
 *   - `database::connection`: Connection management
 *   - `database::schema`: Schema initialization and migration
 *   - `database::repository`: Deduplicating insert and query operations
 * - `feed_log`: Append-only text mirror of accepted records
 * - `stats`: Frequency table recomputation and CSV output
 * - `feed`: The shared publish pipeline
 * - `importer`: File import through pluggable record sources
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod feed;
pub mod feed_log;
pub mod importer;
pub mod normalizer;
pub mod records;
pub mod stats;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::models::InsertOutcome;
pub use database::{DatabaseConnection, Repository};
pub use errors::{FeedError, ImportError, SkipReason};
pub use feed::NewsFeed;
pub use feed_log::FeedLog;
pub use importer::{ImportResult, Importer, RecordSource};
pub use normalizer::normalize;
pub use records::{Record, RecordKind};
pub use stats::StatsAggregator;
