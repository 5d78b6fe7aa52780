/*!
 * End-to-end tests for file import through the shared feed pipeline
 */

use chrono::{Local, NaiveDate};
use newsdesk::app_config::Config;
use newsdesk::errors::{ImportError, SkipReason};
use newsdesk::feed::NewsFeed;
use newsdesk::importer::Importer;

use crate::common::TestFeed;

/// N valid, non-duplicate records grow the store by N rows and the log by N
/// blocks, and the source file is consumed
#[test]
fn test_importDelimitedFile_withValidRecords_shouldRoundTrip() {
    let ctx = TestFeed::new();
    let path = ctx.write_source(
        "records.txt",
        "News: storm coming\nBrest\n---\nPrivate Ad: bike for sale\n2099-05-05\n---\nMotivational Quote: keep going\nAnonymous",
    );

    let result = Importer::new(&ctx.feed).import_file(&path).unwrap();

    assert_eq!(result.inserted, 3);
    assert_eq!(result.duplicates, 0);
    assert!(result.skipped.is_empty());
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 3);
    assert_eq!(ctx.feed.log().block_count().unwrap(), 3);
    assert!(!path.exists(), "source file should be deleted");
}

/// The canonical two-record scenario: one News and one Ad, with days_left
/// snapshotted against today
#[test]
fn test_importDelimitedFile_newsAndAdScenario() {
    let ctx = TestFeed::new();
    let path = ctx.write_source(
        "records.txt",
        "News: Hello world\nParis\n---\nPrivate Ad: Buy now\n2099-01-01",
    );

    Importer::new(&ctx.feed).import_file(&path).unwrap();

    let news = ctx.feed.repository().list_news().unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].text, "Hello world");
    assert_eq!(news[0].city, "Paris");

    let ads = ctx.feed.repository().list_ads().unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0].text, "Buy now");
    assert_eq!(ads[0].expiration_date, "2099-01-01");

    let expected_days = (NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
        - Local::now().date_naive())
    .num_days();
    assert_eq!(ads[0].days_left, expected_days);

    assert_eq!(ctx.feed.log().block_count().unwrap(), 2);
}

/// The same record twice in one file is one insertion plus one duplicate
#[test]
fn test_importDelimitedFile_withRepeatedRecord_shouldCountDuplicate() {
    let ctx = TestFeed::new();
    let path = ctx.write_source(
        "records.txt",
        "News: same story\nParis\n---\nNews: same story\nParis",
    );

    let result = Importer::new(&ctx.feed).import_file(&path).unwrap();

    assert_eq!(result.inserted, 1);
    assert_eq!(result.duplicates, 1);
    assert_eq!(result.records_processed(), 2);
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 1);
    assert_eq!(ctx.feed.log().block_count().unwrap(), 1);
}

/// An unknown publication_type is skipped; the rest of the file is processed
#[test]
fn test_importJsonFile_withUnknownType_shouldSkipAndContinue() {
    let ctx = TestFeed::new();
    let path = ctx.write_source(
        "records.json",
        r#"{
            "1": {"publication_type": "unknown", "text": "nope"},
            "2": {"publication_type": "news", "text": "valid one", "city": "Nice"},
            "3": {"publication_type": "quote", "text": "onwards", "author": "C"}
        }"#,
    );

    let result = Importer::new(&ctx.feed).import_file(&path).unwrap();

    assert_eq!(result.inserted, 2);
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].reason, SkipReason::UnknownPublicationType);

    // The skipped record reached neither store nor log
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 2);
    let log = ctx.feed.log().read_all().unwrap();
    assert!(!log.contains("nope"));
    assert!(!path.exists());
}

/// XML records flow through the same pipeline
#[test]
fn test_importXmlFile_shouldProcessAllKinds() {
    let ctx = TestFeed::new();
    let path = ctx.write_source(
        "records.xml",
        r#"<records>
            <record type="news">
                <text>xml news</text>
                <city>Lille</city>
            </record>
            <record type="ad">
                <text>xml ad</text>
                <expiration_date>2099-12-31</expiration_date>
            </record>
            <record type="quote">
                <text>xml quote</text>
                <author>D</author>
            </record>
        </records>"#,
    );

    let result = Importer::new(&ctx.feed).import_file(&path).unwrap();

    assert_eq!(result.inserted, 3);
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 3);
    assert!(!path.exists());
}

/// A file that cannot be parsed at all aborts the import and is preserved
#[test]
fn test_importMalformedFile_shouldAbortAndPreserveSource() {
    let ctx = TestFeed::new();
    let path = ctx.write_source("records.xml", "<records><record type=");

    let result = Importer::new(&ctx.feed).import_file(&path);

    assert!(matches!(result, Err(ImportError::MalformedSource { .. })));
    assert!(path.exists(), "malformed source must be preserved");
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 0);
}

/// Records accepted before a later hard failure stay committed: an import is
/// not transactional across the whole file
#[test]
fn test_import_partialResults_persistAcrossSeparateImports() {
    let ctx = TestFeed::new();

    let first = ctx.write_source("first.txt", "News: part one\nParis");
    Importer::new(&ctx.feed).import_file(&first).unwrap();

    let malformed = ctx.write_source("second.json", "{broken");
    let result = Importer::new(&ctx.feed).import_file(&malformed);

    assert!(result.is_err());
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 1);
}

/// A configuration-driven feed persists rows across process restarts
#[test]
fn test_feedWithConfig_shouldPersistAcrossReopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        feed_file: dir.path().join("news_feed.txt"),
        database_file: dir.path().join("news_feed.db"),
        word_count_file: dir.path().join("word_count.csv"),
        letter_count_file: dir.path().join("letter_count.csv"),
        ..Config::default()
    };

    {
        let feed = NewsFeed::with_config(&config).unwrap();
        feed.publish_news("durable story", "Metz").unwrap();
    }

    let reopened = NewsFeed::with_config(&config).unwrap();
    let rows = reopened.repository().list_news().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "Durable story");
}
