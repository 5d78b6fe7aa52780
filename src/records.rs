/*!
 * Record types shared by the feed pipeline, the store and the importer.
 *
 * A [`Record`] is created transiently while publishing, persisted into the
 * database, folded into the append log as a formatted block, and then dropped.
 */

use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The three record kinds handled by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// News entry with a city
    News,
    /// Private ad with an expiration date
    Ad,
    /// Motivational quote with an author
    Quote,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::News => write!(f, "news"),
            RecordKind::Ad => write!(f, "ad"),
            RecordKind::Quote => write!(f, "quote"),
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(RecordKind::News),
            "ad" | "ads" => Ok(RecordKind::Ad),
            "quote" => Ok(RecordKind::Quote),
            _ => Err(anyhow::anyhow!("Invalid record kind: {}", s)),
        }
    }
}

/// One feed record, ready to be persisted and logged.
///
/// Text fields are expected to be normalized already; constructors on
/// [`crate::feed::NewsFeed`] take care of that.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// News entry
    News {
        /// Normalized news text
        text: String,
        /// City the news relates to
        city: String,
        /// Publication timestamp, captured at insertion time
        created_at: DateTime<Local>,
    },
    /// Private ad entry
    Ad {
        /// Normalized ad text
        text: String,
        /// Expiration date parsed from YYYY-MM-DD
        expiration_date: NaiveDate,
        /// Day difference between expiration and insertion time; negative
        /// when the ad is already expired. Snapshot, never re-derived.
        days_left: i64,
    },
    /// Motivational quote entry
    Quote {
        /// Normalized quote text
        text: String,
        /// Quote author
        author: String,
    },
}

impl Record {
    /// Kind of this record
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::News { .. } => RecordKind::News,
            Record::Ad { .. } => RecordKind::Ad,
            Record::Quote { .. } => RecordKind::Quote,
        }
    }

    /// Record text field
    pub fn text(&self) -> &str {
        match self {
            Record::News { text, .. } => text,
            Record::Ad { text, .. } => text,
            Record::Quote { text, .. } => text,
        }
    }

    /// Render the record as an append-log block, without the trailing
    /// blank-line separator.
    pub fn to_block(&self) -> String {
        match self {
            Record::News {
                text,
                city,
                created_at,
            } => format!(
                "News -------------------------\n{}\nCity: {}, Date: {}",
                text,
                city,
                created_at.format("%Y-%m-%d %H:%M:%S")
            ),
            Record::Ad {
                text,
                expiration_date,
                days_left,
            } => format!(
                "Private Ad ------------------\n{}\nExpires on: {}, Days left: {}",
                text,
                expiration_date.format("%Y-%m-%d"),
                days_left
            ),
            Record::Quote { text, author } => {
                format!("Motivational Quote ----------\n\"{}\"\n- {}", text, author)
            }
        }
    }
}
