/*!
 * Word and letter frequency statistics derived from the feed log.
 *
 * Both tables are recomputed from the log's entire current content on every
 * accepted record and written out as CSV, fully replacing the previous files.
 * This is a deliberate simplicity-over-efficiency tradeoff: data volumes are
 * small and the full recompute keeps the outputs a pure function of the log.
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Word-boundary tokenizer used for the word frequency table
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("invalid word regex"));

/// Frequency data for one letter bucket (keyed by the lowercase form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterStat {
    /// Total occurrences across both cases
    pub total: u64,
    /// Occurrences that were uppercase
    pub uppercase: u64,
}

impl LetterStat {
    /// Percentage of occurrences that were uppercase, rounded to two decimals
    pub fn uppercase_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = 100.0 * self.uppercase as f64 / self.total as f64;
        (raw * 100.0).round() / 100.0
    }
}

/// Count case-folded word occurrences in the given text.
///
/// Keys are sorted so repeated runs over the same text produce identical
/// tables.
pub fn word_frequencies(text: &str) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for word in WORD.find_iter(&text.to_lowercase()) {
        *counts.entry(word.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Count per-letter occurrences in the given text.
///
/// Only alphabetic characters are counted; each bucket is keyed by the
/// lowercase form of the letter. Letters that never occur are absent.
pub fn letter_frequencies(text: &str) -> BTreeMap<char, LetterStat> {
    let mut stats: BTreeMap<char, LetterStat> = BTreeMap::new();
    for ch in text.chars().filter(|c| c.is_alphabetic()) {
        let key = ch.to_lowercase().next().unwrap_or(ch);
        let entry = stats.entry(key).or_default();
        entry.total += 1;
        if ch.is_uppercase() {
            entry.uppercase += 1;
        }
    }
    stats
}

/// Recomputes the word and letter CSV files from the feed log's full text
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    /// Destination of the `word,count` table
    word_csv: PathBuf,
    /// Destination of the `letter,count_all,count_uppercase,percentage` table
    letter_csv: PathBuf,
}

impl StatsAggregator {
    /// Create an aggregator writing to the given CSV destinations
    pub fn new<P1: AsRef<Path>, P2: AsRef<Path>>(word_csv: P1, letter_csv: P2) -> Self {
        Self {
            word_csv: word_csv.as_ref().to_path_buf(),
            letter_csv: letter_csv.as_ref().to_path_buf(),
        }
    }

    /// Recompute both tables from the given full text and overwrite the
    /// output files.
    pub fn recompute(&self, full_text: &str) -> Result<()> {
        let words = word_frequencies(full_text);
        let letters = letter_frequencies(full_text);

        debug!(
            "Recomputed statistics: {} distinct words, {} distinct letters",
            words.len(),
            letters.len()
        );

        self.write_word_csv(&words)?;
        self.write_letter_csv(&letters)?;
        Ok(())
    }

    fn write_word_csv(&self, words: &BTreeMap<String, u64>) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.word_csv)
            .with_context(|| format!("Failed to open word count file: {:?}", self.word_csv))?;

        writer.write_record(["word", "count"])?;
        for (word, count) in words {
            writer.write_record([word.as_str(), &count.to_string()])?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush word count file: {:?}", self.word_csv))?;
        Ok(())
    }

    fn write_letter_csv(&self, letters: &BTreeMap<char, LetterStat>) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.letter_csv)
            .with_context(|| format!("Failed to open letter count file: {:?}", self.letter_csv))?;

        writer.write_record(["letter", "count_all", "count_uppercase", "percentage"])?;
        for (letter, stat) in letters {
            writer.write_record([
                letter.to_string(),
                stat.total.to_string(),
                stat.uppercase.to_string(),
                format!("{:.2}", stat.uppercase_percentage()),
            ])?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush letter count file: {:?}", self.letter_csv))?;
        Ok(())
    }
}
