/*!
 * JSON record source.
 *
 * The document is an object mapping record ids to entries carrying a
 * `publication_type` (`news`, `ad`/`ads`, `quote`, case-insensitive) plus the
 * kind-specific fields. Field policy is strict: a missing or blank required
 * field skips the record; there is no `"Unknown"` defaulting.
 */

use serde_json::Value;

use crate::errors::{ImportError, SkipReason};

use super::{ExtractedRecord, RawRecord, RecordSource};

/// Parser for JSON record files
pub struct JsonSource;

impl RecordSource for JsonSource {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn extract(&self, content: &str) -> Result<Vec<ExtractedRecord>, ImportError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ImportError::MalformedSource {
                format: self.format_name(),
                message: e.to_string(),
            })?;

        let Some(entries) = value.as_object() else {
            return Err(ImportError::MalformedSource {
                format: self.format_name(),
                message: "top level must be an object of records".to_string(),
            });
        };

        let mut records = Vec::new();
        for (id, entry) in entries {
            records.push(parse_entry(id, entry));
        }

        Ok(records)
    }
}

/// Classify one record entry by its publication_type
fn parse_entry(id: &str, entry: &Value) -> ExtractedRecord {
    let raw = || format!("{}: {}", id, entry);

    let publication_type = entry
        .get("publication_type")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_lowercase();

    match publication_type.as_str() {
        "news" => match (field(entry, "text"), field(entry, "city")) {
            (Some(text), Some(city)) => ExtractedRecord::Parsed(RawRecord::News { text, city }),
            _ => ExtractedRecord::Skipped {
                raw: raw(),
                reason: SkipReason::MissingField,
            },
        },
        "ad" | "ads" => match (field(entry, "text"), field(entry, "date")) {
            (Some(text), Some(expiration_date)) => ExtractedRecord::Parsed(RawRecord::Ad {
                text,
                expiration_date,
            }),
            _ => ExtractedRecord::Skipped {
                raw: raw(),
                reason: SkipReason::MissingField,
            },
        },
        "quote" => match (field(entry, "text"), field(entry, "author")) {
            (Some(text), Some(author)) => {
                ExtractedRecord::Parsed(RawRecord::Quote { text, author })
            }
            _ => ExtractedRecord::Skipped {
                raw: raw(),
                reason: SkipReason::MissingField,
            },
        },
        _ => ExtractedRecord::Skipped {
            raw: raw(),
            reason: SkipReason::UnknownPublicationType,
        },
    }
}

/// A required string field; blank values count as missing
fn field(entry: &Value, name: &str) -> Option<String> {
    entry
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
