/*!
 * Delimited-text record source.
 *
 * Records are separated by `---` lines. The first line of each block names
 * the kind (`News:`, `Private Ad:`, `Motivational Quote:`, case-insensitive);
 * the remainder is split on the first newline into the two kind-specific
 * fields.
 */

use crate::errors::{ImportError, SkipReason};

use super::{ExtractedRecord, RawRecord, RecordSource};

/// Parser for `---` delimited text files
pub struct DelimitedTextSource;

impl RecordSource for DelimitedTextSource {
    fn format_name(&self) -> &'static str {
        "text"
    }

    fn extract(&self, content: &str) -> Result<Vec<ExtractedRecord>, ImportError> {
        let mut records = Vec::new();

        for block in content.split("---") {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }
            records.push(parse_block(block));
        }

        Ok(records)
    }
}

/// Classify one block by its prefix and split out the two fields
fn parse_block(block: &str) -> ExtractedRecord {
    let lowered = block.to_lowercase();

    let kind = if lowered.starts_with("news:") {
        BlockKind::News
    } else if lowered.starts_with("private ad:") {
        BlockKind::Ad
    } else if lowered.starts_with("motivational quote:") {
        BlockKind::Quote
    } else {
        return ExtractedRecord::Skipped {
            raw: block.to_string(),
            reason: SkipReason::UnknownRecordType,
        };
    };

    // The prefix was matched, so the colon is present
    let Some((_, body)) = block.split_once(':') else {
        return ExtractedRecord::Skipped {
            raw: block.to_string(),
            reason: SkipReason::MissingField,
        };
    };

    let Some((first, second)) = body.trim().split_once('\n') else {
        return ExtractedRecord::Skipped {
            raw: block.to_string(),
            reason: SkipReason::MissingField,
        };
    };

    let first = first.trim().to_string();
    let second = second.trim().to_string();
    if first.is_empty() || second.is_empty() {
        return ExtractedRecord::Skipped {
            raw: block.to_string(),
            reason: SkipReason::MissingField,
        };
    }

    ExtractedRecord::Parsed(match kind {
        BlockKind::News => RawRecord::News {
            text: first,
            city: second,
        },
        BlockKind::Ad => RawRecord::Ad {
            text: first,
            expiration_date: second,
        },
        BlockKind::Quote => RawRecord::Quote {
            text: first,
            author: second,
        },
    })
}

enum BlockKind {
    News,
    Ad,
    Quote,
}
