/*!
 * Sentence-boundary-aware text normalization.
 *
 * Every piece of record text goes through [`normalize`] before it reaches the
 * store or the append log: the first letter of each sentence is uppercased,
 * everything else is left exactly as the author wrote it.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a sentence-terminal punctuation mark followed by whitespace
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("invalid sentence boundary regex"));

/// Normalize free text by capitalizing the first character of each sentence.
///
/// The input is split on `.`, `!` or `?` followed by whitespace. Each fragment
/// keeps its terminal punctuation, has its first character uppercased, and the
/// fragments are rejoined with a single space. Text without any sentence
/// boundary is treated as a single sentence: the first character is uppercased
/// and the remaining characters are left as-is.
///
/// Empty or whitespace-only input returns an empty string.
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut fragments: Vec<&str> = Vec::new();
    let mut tail_start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation mark is a single ASCII byte at the match start;
        // keep it attached to its fragment.
        fragments.push(&text[tail_start..boundary.start() + 1]);
        tail_start = boundary.end();
    }
    if tail_start < text.len() {
        fragments.push(&text[tail_start..]);
    }

    fragments
        .iter()
        .map(|fragment| capitalize_first(fragment))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a string, leaving the rest untouched
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
