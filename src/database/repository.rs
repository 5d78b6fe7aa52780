/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for all record store operations,
 * abstracting away the SQL details. Every insert performs an equality lookup
 * against the kind's uniqueness key first and reports a duplicate without
 * writing. Rows are never mutated or deleted once inserted.
 */

use anyhow::Result;
use log::debug;
use rusqlite::params;

use super::connection::DatabaseConnection;
use super::models::{AdRow, InsertOutcome, NewsRow, QuoteRow};

/// Repository for record store operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Access the underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    // =========================================================================
    // Insert operations
    // =========================================================================

    /// Insert a news record unless (text, city) already exists
    pub fn insert_news(&self, text: &str, city: &str, created_at: &str) -> Result<InsertOutcome> {
        self.db.execute(|conn| {
            let existing: i64 = conn.query_row(
                "SELECT COUNT(*) FROM news WHERE text = ?1 AND city = ?2",
                params![text, city],
                |row| row.get(0),
            )?;

            if existing > 0 {
                debug!("Duplicate news record (text={:?}, city={:?})", text, city);
                return Ok(InsertOutcome::Duplicate);
            }

            conn.execute(
                "INSERT INTO news (text, city, created_at) VALUES (?1, ?2, ?3)",
                params![text, city, created_at],
            )?;
            Ok(InsertOutcome::Inserted)
        })
    }

    /// Insert a private ad unless the same text already exists
    pub fn insert_ad(
        &self,
        text: &str,
        expiration_date: &str,
        days_left: i64,
    ) -> Result<InsertOutcome> {
        self.db.execute(|conn| {
            let existing: i64 = conn.query_row(
                "SELECT COUNT(*) FROM private_ads WHERE text = ?1",
                params![text],
                |row| row.get(0),
            )?;

            if existing > 0 {
                debug!("Duplicate ad record (text={:?})", text);
                return Ok(InsertOutcome::Duplicate);
            }

            conn.execute(
                "INSERT INTO private_ads (text, expiration_date, days_left) VALUES (?1, ?2, ?3)",
                params![text, expiration_date, days_left],
            )?;
            Ok(InsertOutcome::Inserted)
        })
    }

    /// Insert a quote unless (quote, author) already exists
    pub fn insert_quote(&self, quote: &str, author: &str) -> Result<InsertOutcome> {
        self.db.execute(|conn| {
            let existing: i64 = conn.query_row(
                "SELECT COUNT(*) FROM quotes WHERE quote = ?1 AND author = ?2",
                params![quote, author],
                |row| row.get(0),
            )?;

            if existing > 0 {
                debug!("Duplicate quote record (author={:?})", author);
                return Ok(InsertOutcome::Duplicate);
            }

            conn.execute(
                "INSERT INTO quotes (quote, author) VALUES (?1, ?2)",
                params![quote, author],
            )?;
            Ok(InsertOutcome::Inserted)
        })
    }

    // =========================================================================
    // Read operations
    // =========================================================================

    /// List all news records, newest first
    pub fn list_news(&self) -> Result<Vec<NewsRow>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, text, city, created_at FROM news ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(NewsRow {
                        id: row.get(0)?,
                        text: row.get(1)?,
                        city: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// List all private ads, soonest expiration first
    pub fn list_ads(&self) -> Result<Vec<AdRow>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, text, expiration_date, days_left FROM private_ads ORDER BY expiration_date, id",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(AdRow {
                        id: row.get(0)?,
                        text: row.get(1)?,
                        expiration_date: row.get(2)?,
                        days_left: row.get(3)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// List all quotes, ordered by author
    pub fn list_quotes(&self) -> Result<Vec<QuoteRow>> {
        self.db.execute(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, quote, author FROM quotes ORDER BY author, id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(QuoteRow {
                        id: row.get(0)?,
                        quote: row.get(1)?,
                        author: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Total number of rows across the three record tables
    pub fn total_count(&self) -> Result<i64> {
        Ok(self.db.stats()?.total())
    }
}
