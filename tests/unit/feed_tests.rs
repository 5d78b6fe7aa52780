/*!
 * Tests for the shared publish pipeline
 */

use newsdesk::errors::FeedError;
use newsdesk::InsertOutcome;

use crate::common::TestFeed;

/// Inserting the identical uniqueness key twice yields Inserted then
/// Duplicate, and the store grows by exactly one row
#[test]
fn test_publish_withIdenticalKeyTwice_shouldInsertExactlyOnce() {
    let ctx = TestFeed::new();

    let first = ctx.feed.publish_quote("stay curious", "R. Feynman").unwrap();
    let second = ctx.feed.publish_quote("stay curious", "R. Feynman").unwrap();

    assert_eq!(first, InsertOutcome::Inserted);
    assert_eq!(second, InsertOutcome::Duplicate);
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 1);
}

/// A duplicate must not append to the log
#[test]
fn test_publish_duplicate_shouldNotGrowLog() {
    let ctx = TestFeed::new();

    ctx.feed.publish_news("big news", "Paris").unwrap();
    let before = ctx.feed.log().read_all().unwrap();

    ctx.feed.publish_news("big news", "Paris").unwrap();
    let after = ctx.feed.log().read_all().unwrap();

    assert_eq!(before, after);
}

/// The same text in a different city is a different news record
#[test]
fn test_publishNews_keyIsTextAndCity() {
    let ctx = TestFeed::new();

    assert_eq!(
        ctx.feed.publish_news("flood warning", "Paris").unwrap(),
        InsertOutcome::Inserted
    );
    assert_eq!(
        ctx.feed.publish_news("flood warning", "Lyon").unwrap(),
        InsertOutcome::Inserted
    );
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 2);
}

/// Ads deduplicate on text alone, regardless of the date
#[test]
fn test_publishAd_keyIsTextOnly() {
    let ctx = TestFeed::new();

    assert_eq!(
        ctx.feed.publish_ad("garage sale", "2099-01-01").unwrap(),
        InsertOutcome::Inserted
    );
    assert_eq!(
        ctx.feed.publish_ad("garage sale", "2099-06-01").unwrap(),
        InsertOutcome::Duplicate
    );
}

/// An unparseable expiration date fails the call and writes nothing
#[test]
fn test_publishAd_withBadDate_shouldWriteNothing() {
    let ctx = TestFeed::new();

    let result = ctx.feed.publish_ad("ad text", "01/01/2099");

    assert!(matches!(result, Err(FeedError::InvalidDate(_))));
    assert_eq!(ctx.feed.repository().total_count().unwrap(), 0);
    assert_eq!(ctx.feed.log().read_all().unwrap(), "");
}

/// Published text is normalized before it reaches store and log
#[test]
fn test_publish_shouldNormalizeText() {
    let ctx = TestFeed::new();

    ctx.feed.publish_news("heavy rain. floods expected!", "Nantes").unwrap();

    let rows = ctx.feed.repository().list_news().unwrap();
    assert_eq!(rows[0].text, "Heavy rain. Floods expected!");
}

/// Statistics files are recomputed from the whole log after each accepted
/// record; duplicates leave them unchanged
#[test]
fn test_publish_shouldRefreshStatsOnlyOnInsert() {
    let ctx = TestFeed::new();

    ctx.feed.publish_quote("alpha", "A").unwrap();
    let after_first = std::fs::read(ctx.word_csv()).unwrap();

    // A duplicate does not rewrite the outputs
    ctx.feed.publish_quote("alpha", "A").unwrap();
    assert_eq!(std::fs::read(ctx.word_csv()).unwrap(), after_first);

    // A new record does
    ctx.feed.publish_quote("beta", "B").unwrap();
    let after_second = std::fs::read_to_string(ctx.word_csv()).unwrap();
    assert!(after_second.contains("alpha,1"));
    assert!(after_second.contains("beta,1"));
}
