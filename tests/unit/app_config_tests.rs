/*!
 * Tests for application configuration functionality
 */

use std::path::PathBuf;

use newsdesk::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_defaultConfig_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.feed_file, PathBuf::from("news_feed.txt"));
    assert_eq!(config.database_file, PathBuf::from("news_feed.db"));
    assert_eq!(config.word_count_file, PathBuf::from("word_count.csv"));
    assert_eq!(config.letter_count_file, PathBuf::from("letter_count.csv"));
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Empty path
    config.database_file = PathBuf::new();
    assert!(config.validate().is_err());
    config.database_file = PathBuf::from("news_feed.db");

    // Two outputs pointing at the same file
    config.word_count_file = config.feed_file.clone();
    assert!(config.validate().is_err());
    config.word_count_file = PathBuf::from("word_count.csv");

    assert!(config.validate().is_ok());
}

/// Partial config files fall back to defaults per field
#[test]
fn test_config_fromPartialJson_shouldFillDefaults() {
    let config: Config =
        serde_json::from_str(r#"{"feed_file": "other_feed.txt", "log_level": "debug"}"#).unwrap();

    assert_eq!(config.feed_file, PathBuf::from("other_feed.txt"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.database_file, PathBuf::from("news_feed.db"));
}
