/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

/// Result of attempting to insert a record into the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was committed
    Inserted,
    /// A row with the same uniqueness key already exists; nothing was written
    Duplicate,
}

impl InsertOutcome {
    /// Whether a new row was written
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// One row of the `news` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRow {
    /// Auto-assigned identifier
    pub id: i64,
    /// Normalized news text
    pub text: String,
    /// City the news relates to
    pub city: String,
    /// Publication timestamp (YYYY-MM-DD HH:MM:SS)
    pub created_at: String,
}

/// One row of the `private_ads` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRow {
    /// Auto-assigned identifier
    pub id: i64,
    /// Normalized ad text
    pub text: String,
    /// Expiration date (YYYY-MM-DD)
    pub expiration_date: String,
    /// Days between expiration and insertion time; negative when expired
    pub days_left: i64,
}

/// One row of the `quotes` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    /// Auto-assigned identifier
    pub id: i64,
    /// Normalized quote text
    pub quote: String,
    /// Quote author
    pub author: String,
}
