/*!
 * The shared publishing pipeline.
 *
 * [`NewsFeed`] ties the components together for both manual entry and file
 * import: normalize the text, attempt the store insert, and on acceptance
 * mirror the record into the append log and recompute the statistics tables
 * from the log's full content. Duplicates perform no write at all.
 */

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::app_config::Config;
use crate::database::models::InsertOutcome;
use crate::database::{DatabaseConnection, Repository};
use crate::errors::FeedError;
use crate::feed_log::FeedLog;
use crate::normalizer::normalize;
use crate::records::Record;
use crate::stats::StatsAggregator;

/// Outcome of publishing one record
pub type PublishOutcome = InsertOutcome;

/// The feed pipeline: record store, append log and statistics aggregator
pub struct NewsFeed {
    /// Deduplicating record store
    repository: Repository,
    /// Append-only text mirror
    log: FeedLog,
    /// Word/letter frequency recomputation
    stats: StatsAggregator,
}

impl NewsFeed {
    /// Create a feed from explicit components (used by tests)
    pub fn new(repository: Repository, log: FeedLog, stats: StatsAggregator) -> Self {
        Self {
            repository,
            log,
            stats,
        }
    }

    /// Create a feed wired to the destinations named in the configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        let db = DatabaseConnection::new(&config.database_file)?;
        Ok(Self::new(
            Repository::new(db),
            FeedLog::new(&config.feed_file),
            StatsAggregator::new(&config.word_count_file, &config.letter_count_file),
        ))
    }

    /// Record store backing this feed
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Append log backing this feed
    pub fn log(&self) -> &FeedLog {
        &self.log
    }

    /// Publish a news record
    pub fn publish_news(&self, text: &str, city: &str) -> Result<PublishOutcome, FeedError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(FeedError::EmptyText);
        }

        let created_at = Local::now();
        self.publish(Record::News {
            text,
            city: city.trim().to_string(),
            created_at,
        })
    }

    /// Publish a private ad.
    ///
    /// The expiration date must be in `YYYY-MM-DD` form; `days_left` is
    /// snapshotted against the current date and may be negative for an ad
    /// that is already expired.
    pub fn publish_ad(&self, text: &str, expiration_date: &str) -> Result<PublishOutcome, FeedError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(FeedError::EmptyText);
        }

        let expiration_date = expiration_date.trim();
        let parsed = NaiveDate::parse_from_str(expiration_date, "%Y-%m-%d")
            .map_err(|_| FeedError::InvalidDate(expiration_date.to_string()))?;
        let days_left = (parsed - Local::now().date_naive()).num_days();

        self.publish(Record::Ad {
            text,
            expiration_date: parsed,
            days_left,
        })
    }

    /// Publish a motivational quote
    pub fn publish_quote(&self, text: &str, author: &str) -> Result<PublishOutcome, FeedError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(FeedError::EmptyText);
        }

        self.publish(Record::Quote {
            text,
            author: author.trim().to_string(),
        })
    }

    /// Run a record through the store, and on acceptance through the log and
    /// the statistics recompute.
    fn publish(&self, record: Record) -> Result<PublishOutcome, FeedError> {
        let outcome = match &record {
            Record::News {
                text,
                city,
                created_at,
            } => self.repository.insert_news(
                text,
                city,
                &created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            )?,
            Record::Ad {
                text,
                expiration_date,
                days_left,
            } => self.repository.insert_ad(
                text,
                &expiration_date.format("%Y-%m-%d").to_string(),
                *days_left,
            )?,
            Record::Quote { text, author } => self.repository.insert_quote(text, author)?,
        };

        match outcome {
            InsertOutcome::Duplicate => {
                info!("Duplicate {} record, not added", record.kind());
                Ok(InsertOutcome::Duplicate)
            }
            InsertOutcome::Inserted => {
                self.log
                    .append(&record.to_block())
                    .map_err(|e| FeedError::Log(e.to_string()))?;

                let full_text = self
                    .log
                    .read_all()
                    .map_err(|e| FeedError::Log(e.to_string()))?;
                self.stats
                    .recompute(&full_text)
                    .map_err(|e| FeedError::Log(e.to_string()))?;

                debug!("{} record added", record.kind());
                Ok(InsertOutcome::Inserted)
            }
        }
    }
}
