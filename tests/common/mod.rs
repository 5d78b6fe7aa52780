/*!
 * Common test utilities shared across the test suite.
 */

use std::path::PathBuf;

use newsdesk::database::Repository;
use newsdesk::feed::NewsFeed;
use newsdesk::feed_log::FeedLog;
use newsdesk::stats::StatsAggregator;
use tempfile::TempDir;

/// A feed wired to an in-memory store and scratch files in a temp directory.
///
/// The directory handle must be kept alive for the duration of the test.
pub struct TestFeed {
    pub feed: NewsFeed,
    pub dir: TempDir,
}

impl TestFeed {
    /// Build a fully isolated feed
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repository = Repository::new_in_memory().expect("Failed to create repository");
        let log = FeedLog::new(dir.path().join("news_feed.txt"));
        let stats = StatsAggregator::new(
            dir.path().join("word_count.csv"),
            dir.path().join("letter_count.csv"),
        );

        Self {
            feed: NewsFeed::new(repository, log, stats),
            dir,
        }
    }

    /// Path of the word count CSV inside the scratch directory
    pub fn word_csv(&self) -> PathBuf {
        self.dir.path().join("word_count.csv")
    }

    /// Path of the letter count CSV inside the scratch directory
    pub fn letter_csv(&self) -> PathBuf {
        self.dir.path().join("letter_count.csv")
    }

    /// Write a source file into the scratch directory and return its path
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write source file");
        path
    }
}
