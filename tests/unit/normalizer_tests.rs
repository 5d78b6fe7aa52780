/*!
 * Tests for sentence-boundary-aware text normalization
 */

use newsdesk::normalize;

/// Every sentence of the input appears in the output, none merged or dropped
#[test]
fn test_normalize_withManySentences_shouldKeepSentenceCount() {
    let input = "it was cold. the wind howled! did anyone notice? nobody did.";
    let output = normalize(input);

    let terminals = |s: &str| s.matches(['.', '!', '?']).count();
    assert_eq!(terminals(&output), terminals(input));
    assert_eq!(
        output,
        "It was cold. The wind howled! Did anyone notice? Nobody did."
    );
}

/// Terminal punctuation survives verbatim, in order
#[test]
fn test_normalize_shouldPreservePunctuationOrder() {
    let output = normalize("one! two? three.");
    let marks: String = output.chars().filter(|c| ".!?".contains(*c)).collect();
    assert_eq!(marks, "!?.");
}

/// Normalizing already-normalized text changes nothing
#[test]
fn test_normalize_onNormalizedText_shouldBeIdentity() {
    let normalized = normalize("some breaking news. details to follow!");
    assert_eq!(normalize(&normalized), normalized);
}

/// Without sentence punctuation the first character is uppercased and the
/// rest is left untouched
#[test]
fn test_normalize_withoutBoundary_shouldOnlyTouchFirstChar() {
    assert_eq!(normalize("mcDonald opened in Lyon"), "McDonald opened in Lyon");
}

/// Whitespace-only input normalizes to empty without an error
#[test]
fn test_normalize_withBlankInput_shouldReturnEmpty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(" \t\n"), "");
}
