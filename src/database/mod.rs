/*!
 * Database module for persistent storage of feed records.
 *
 * This module provides SQLite-based persistence for the three record kinds:
 * - News, unique on (text, city)
 * - Private ads, unique on (text)
 * - Motivational quotes, unique on (quote, author)
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::DatabaseConnection;
pub use repository::Repository;
