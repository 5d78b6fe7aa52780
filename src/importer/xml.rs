/*!
 * XML record source.
 *
 * The document root contains repeated `<record type="...">` elements whose
 * child elements carry the kind-specific fields (`text` plus `city`,
 * `expiration_date` or `author`). Parsing is event-based via quick-xml.
 */

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::errors::{ImportError, SkipReason};

use super::{ExtractedRecord, RawRecord, RecordSource};

/// Parser for XML record files
pub struct XmlSource;

impl RecordSource for XmlSource {
    fn format_name(&self) -> &'static str {
        "xml"
    }

    fn extract(&self, content: &str) -> Result<Vec<ExtractedRecord>, ImportError> {
        let malformed = |message: String| ImportError::MalformedSource {
            format: "xml",
            message,
        };

        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut records = Vec::new();

        // State of the <record> element currently being read
        let mut record_type: Option<String> = None;
        let mut fields: HashMap<String, String> = HashMap::new();
        let mut current_field: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    if name == "record" {
                        let type_attr = e
                            .try_get_attribute("type")
                            .map_err(|e| malformed(e.to_string()))?
                            .map(|a| a.unescape_value().map(|v| v.to_string()))
                            .transpose()
                            .map_err(|e| malformed(e.to_string()))?;

                        record_type = Some(type_attr.unwrap_or_default());
                        fields.clear();
                    } else if record_type.is_some() {
                        current_field = Some(name);
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(field) = &current_field {
                        let value = e.unescape().map_err(|e| malformed(e.to_string()))?;
                        fields
                            .entry(field.clone())
                            .or_default()
                            .push_str(value.trim());
                    }
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    if name == "record" {
                        if let Some(kind) = record_type.take() {
                            records.push(classify(&kind, &fields));
                        }
                        fields.clear();
                    } else if current_field.as_deref() == Some(name.as_str()) {
                        current_field = None;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(malformed(e.to_string())),
                _ => {}
            }
        }

        Ok(records)
    }
}

/// Turn a finished `<record>` element into a record or a skip
fn classify(kind: &str, fields: &HashMap<String, String>) -> ExtractedRecord {
    let raw = || format!("<record type=\"{}\"> {:?}", kind, fields);

    let field = |name: &str| {
        fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    match kind.to_lowercase().as_str() {
        "news" => match (field("text"), field("city")) {
            (Some(text), Some(city)) => ExtractedRecord::Parsed(RawRecord::News { text, city }),
            _ => ExtractedRecord::Skipped {
                raw: raw(),
                reason: SkipReason::MissingField,
            },
        },
        "ad" | "ads" => match (field("text"), field("expiration_date")) {
            (Some(text), Some(expiration_date)) => ExtractedRecord::Parsed(RawRecord::Ad {
                text,
                expiration_date,
            }),
            _ => ExtractedRecord::Skipped {
                raw: raw(),
                reason: SkipReason::MissingField,
            },
        },
        "quote" => match (field("text"), field("author")) {
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
            reason: SkipReason::UnknownRecordType,
        },
    }
}
