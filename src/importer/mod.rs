/*!
 * Bulk import of records from external files.
 *
 * Each source format implements [`RecordSource`], which turns raw file
 * content into a sequence of classified records (or per-record skips). The
 * downstream pipeline is shared: every extracted record flows through the
 * same [`NewsFeed`] publish path as manual entry. A source file that parses
 * is deleted after all of its records have been processed, even if some were
 * skipped; a file that cannot be parsed at all is preserved.
 */

pub mod json;
pub mod text;
pub mod xml;

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::errors::{FeedError, ImportError, SkipReason};
use crate::feed::NewsFeed;

pub use json::JsonSource;
pub use text::DelimitedTextSource;
pub use xml::XmlSource;

/// A record extracted from a source file, before normalization.
///
/// Field values are carried as raw strings; date parsing happens in the
/// shared pipeline so every format gets the same `InvalidDate` handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    /// News candidate
    News { text: String, city: String },
    /// Private ad candidate with an unparsed expiration date
    Ad { text: String, expiration_date: String },
    /// Quote candidate
    Quote { text: String, author: String },
}

/// One unit produced by a [`RecordSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedRecord {
    /// A classified, field-complete record
    Parsed(RawRecord),
    /// A record unit that could not be used; the batch continues
    Skipped {
        /// Raw representation for diagnostics
        raw: String,
        /// Why it was skipped
        reason: SkipReason,
    },
}

/// Capability interface: turn file content into discrete record units
pub trait RecordSource {
    /// Short format name used in log and error messages
    fn format_name(&self) -> &'static str;

    /// Split the content into records, classifying each unit.
    ///
    /// Per-record problems are reported as [`ExtractedRecord::Skipped`];
    /// only a source that cannot be parsed at all returns
    /// [`ImportError::MalformedSource`].
    fn extract(&self, content: &str) -> Result<Vec<ExtractedRecord>, ImportError>;
}

/// A record that was skipped during import, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Raw representation of the skipped unit
    pub raw: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Summary of one completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Records committed to the store and mirrored to the log
    pub inserted: usize,
    /// Records rejected by the store's uniqueness check (not an error)
    pub duplicates: usize,
    /// Records skipped with their reasons
    pub skipped: Vec<SkippedRecord>,
}

impl ImportResult {
    /// Records that made it through the store (inserted or duplicate)
    pub fn records_processed(&self) -> usize {
        self.inserted + self.duplicates
    }
}

/// Runs files through a [`RecordSource`] and the shared feed pipeline
pub struct Importer<'a> {
    /// Destination pipeline
    feed: &'a NewsFeed,
}

impl<'a> Importer<'a> {
    /// Create an importer feeding the given pipeline
    pub fn new(feed: &'a NewsFeed) -> Self {
        Self { feed }
    }

    /// Import a file, selecting the source format from its extension:
    /// `.json` and `.xml` are structured formats, anything else is treated
    /// as `---` delimited text.
    pub fn import_file(&self, path: &Path) -> Result<ImportResult, ImportError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => {
                self.import_with(&JsonSource, path)
            }
            Some(ext) if ext.eq_ignore_ascii_case("xml") => self.import_with(&XmlSource, path),
            _ => self.import_with(&DelimitedTextSource, path),
        }
    }

    /// Import a file through an explicit source format.
    ///
    /// The source file is deleted once every record unit has been processed;
    /// a parse failure of the whole file leaves it in place.
    pub fn import_with<S: RecordSource>(
        &self,
        source: &S,
        path: &Path,
    ) -> Result<ImportResult, ImportError> {
        info!("Importing {} records from {:?}", source.format_name(), path);

        let content = fs::read_to_string(path)?;
        let extracted = source.extract(&content)?;

        let mut result = ImportResult::default();
        for unit in extracted {
            match unit {
                ExtractedRecord::Skipped { raw, reason } => {
                    warn!("Skipping record ({}): {}", reason, summarize(&raw));
                    result.skipped.push(SkippedRecord { raw, reason });
                }
                ExtractedRecord::Parsed(raw) => self.process(raw, &mut result)?,
            }
        }

        fs::remove_file(path)?;
        info!(
            "Import of {:?} finished: {} inserted, {} duplicates, {} skipped; source removed",
            path,
            result.inserted,
            result.duplicates,
            result.skipped.len()
        );

        Ok(result)
    }

    /// Feed one raw record through the pipeline, folding record-level
    /// failures into skips.
    fn process(&self, raw: RawRecord, result: &mut ImportResult) -> Result<(), ImportError> {
        let outcome = match &raw {
            RawRecord::News { text, city } => self.feed.publish_news(text, city),
            RawRecord::Ad {
                text,
                expiration_date,
            } => self.feed.publish_ad(text, expiration_date),
            RawRecord::Quote { text, author } => self.feed.publish_quote(text, author),
        };

        match outcome {
            Ok(o) if o.is_inserted() => result.inserted += 1,
            Ok(_) => result.duplicates += 1,
            Err(FeedError::InvalidDate(date)) => {
                warn!("Skipping record (invalid date): {}", date);
                result.skipped.push(SkippedRecord {
                    raw: format!("{:?}", raw),
                    reason: SkipReason::InvalidDate,
                });
            }
            Err(FeedError::EmptyText) => {
                warn!("Skipping record (empty text)");
                result.skipped.push(SkippedRecord {
                    raw: format!("{:?}", raw),
                    reason: SkipReason::MissingField,
                });
            }
            // Store or log failures are infrastructure errors; abort the
            // import without deleting the source.
            Err(e) => return Err(ImportError::Feed(e)),
        }

        Ok(())
    }
}

/// First line of a raw record, for log messages
fn summarize(raw: &str) -> &str {
    raw.lines().next().unwrap_or(raw)
}
