/*!
 * Tests for frequency table recomputation
 */

use newsdesk::stats::{StatsAggregator, letter_frequencies, word_frequencies};

use crate::common::TestFeed;

/// Recompute is a pure function of the input text
#[test]
fn test_recompute_twiceWithSameText_shouldProduceIdenticalTables() {
    let ctx = TestFeed::new();
    let aggregator = StatsAggregator::new(ctx.word_csv(), ctx.letter_csv());

    let text = "News travels Fast. news travels far!";
    aggregator.recompute(text).unwrap();
    let words = std::fs::read(ctx.word_csv()).unwrap();
    let letters = std::fs::read(ctx.letter_csv()).unwrap();

    aggregator.recompute(text).unwrap();
    assert_eq!(std::fs::read(ctx.word_csv()).unwrap(), words);
    assert_eq!(std::fs::read(ctx.letter_csv()).unwrap(), letters);
}

/// Words are counted case-insensitively
#[test]
fn test_wordFrequencies_shouldFoldCase() {
    let counts = word_frequencies("News news NEWS");
    assert_eq!(counts.get("news"), Some(&3));
    assert_eq!(counts.len(), 1);
}

/// Letter buckets report totals, uppercase counts and percentage
#[test]
fn test_letterFrequencies_shouldTrackUppercaseShare() {
    let stats = letter_frequencies("Nn nn");

    let n = stats.get(&'n').expect("missing 'n' bucket");
    assert_eq!(n.total, 4);
    assert_eq!(n.uppercase, 1);
    assert_eq!(n.uppercase_percentage(), 25.0);
}

/// Letters that never occur are absent rather than zero
#[test]
fn test_letterFrequencies_shouldNotPreEnumerate() {
    let stats = letter_frequencies("abc");
    assert!(!stats.contains_key(&'z'));
    assert_eq!(stats.len(), 3);
}

/// A shrunken input fully replaces the previous tables: stale entries vanish
#[test]
fn test_recompute_withTruncatedText_shouldDropStaleEntries() {
    let ctx = TestFeed::new();
    let aggregator = StatsAggregator::new(ctx.word_csv(), ctx.letter_csv());

    aggregator.recompute("longer earlier content").unwrap();
    aggregator.recompute("short").unwrap();

    let words = std::fs::read_to_string(ctx.word_csv()).unwrap();
    assert!(words.contains("short,1"));
    assert!(!words.contains("earlier"));
}

/// The letter CSV carries the documented header and two-decimal percentages
#[test]
fn test_letterCsv_shouldUseDocumentedSchema() {
    let ctx = TestFeed::new();
    let aggregator = StatsAggregator::new(ctx.word_csv(), ctx.letter_csv());

    aggregator.recompute("Aab").unwrap();

    let content = std::fs::read_to_string(ctx.letter_csv()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "letter,count_all,count_uppercase,percentage");
    assert_eq!(lines[1], "a,2,1,50.00");
    assert_eq!(lines[2], "b,1,0,0.00");
}
