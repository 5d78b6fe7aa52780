/*!
 * Application configuration module.
 *
 * This module handles the application configuration including loading,
 * validating and saving configuration settings. All destination paths
 * (feed log, database, frequency CSVs) live here and are injected into
 * the components that use them; no component hardcodes a path.
 */

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path of the append-only feed log
    #[serde(default = "default_feed_file")]
    pub feed_file: PathBuf,

    /// Path of the SQLite record store
    #[serde(default = "default_database_file")]
    pub database_file: PathBuf,

    /// Path of the word frequency CSV output
    #[serde(default = "default_word_count_file")]
    pub word_count_file: PathBuf,

    /// Path of the letter frequency CSV output
    #[serde(default = "default_letter_count_file")]
    pub letter_count_file: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_file: default_feed_file(),
            database_file: default_database_file(),
            word_count_file: default_word_count_file(),
            letter_count_file: default_letter_count_file(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("feed_file", &self.feed_file),
            ("database_file", &self.database_file),
            ("word_count_file", &self.word_count_file),
            ("letter_count_file", &self.letter_count_file),
        ];

        for (name, path) in &paths {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("Configuration field '{}' must not be empty", name));
            }
        }

        // The outputs must not clobber each other
        for (i, (name_a, path_a)) in paths.iter().enumerate() {
            for (name_b, path_b) in paths.iter().skip(i + 1) {
                if path_a == path_b {
                    return Err(anyhow!(
                        "Configuration fields '{}' and '{}' point to the same file: {:?}",
                        name_a,
                        name_b,
                        path_a
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_feed_file() -> PathBuf {
    PathBuf::from("news_feed.txt")
}

fn default_database_file() -> PathBuf {
    PathBuf::from("news_feed.db")
}

fn default_word_count_file() -> PathBuf {
    PathBuf::from("word_count.csv")
}

fn default_letter_count_file() -> PathBuf {
    PathBuf::from("letter_count.csv")
}
