//! Behavior-driven tests for reply-text extraction.
//!
//! These tests verify HOW the system recovers a structured record from the
//! formats the upstream actually produces: bare JSON, fenced JSON, and JSON
//! buried in explanatory prose.

use gordon_core::{extract_record, FinancialRecord, ParseFailure};

const REPLY_BODY: &str =
    r#"{"ticker":"AAPL","price":150,"fcfPerShare":6,"wacc":0.09,"currency":"$"}"#;

fn assert_apple(record: &FinancialRecord) {
    assert_eq!(record.ticker.as_deref(), Some("AAPL"));
    assert_eq!(record.price, Some(150.0));
    assert_eq!(record.fcf_per_share, Some(6.0));
    assert_eq!(record.wacc, Some(0.09));
    assert_eq!(record.currency.as_deref(), Some("$"));
}

// =============================================================================
// Extraction: fence handling
// =============================================================================

#[test]
fn when_reply_is_bare_json_extraction_succeeds() {
    let record = extract_record(REPLY_BODY).expect("bare JSON should extract");
    assert_apple(&record);
}

#[test]
fn when_reply_is_wrapped_in_tagged_fence_extraction_succeeds() {
    let reply = format!("```json\n{REPLY_BODY}\n```");
    let record = extract_record(&reply).expect("tagged fence should extract");
    assert_apple(&record);
}

#[test]
fn when_reply_is_wrapped_in_bare_fence_extraction_succeeds() {
    let reply = format!("```\n{REPLY_BODY}\n```");
    let record = extract_record(&reply).expect("bare fence should extract");
    assert_apple(&record);
}

#[test]
fn fence_variants_recover_the_same_record() {
    // Given: the same object in all three delivery formats
    let bare = extract_record(REPLY_BODY).expect("bare");
    let tagged = extract_record(&format!("```json\n{REPLY_BODY}\n```")).expect("tagged");
    let fenced = extract_record(&format!("```\n{REPLY_BODY}\n```")).expect("fenced");

    // Then: extraction is format-insensitive
    assert_eq!(bare, tagged);
    assert_eq!(bare, fenced);
}

#[test]
fn when_reply_has_surrounding_whitespace_extraction_succeeds() {
    let reply = format!("\n\n   {REPLY_BODY}   \n");
    let record = extract_record(&reply).expect("whitespace should be trimmed");
    assert_apple(&record);
}

// =============================================================================
// Extraction: bracket-scanning fallback
// =============================================================================

#[test]
fn when_json_is_surrounded_by_prose_bracket_scan_recovers_it() {
    // Given: a reply that ignored the no-prose instruction
    let reply = format!(
        "Sure! Here is the financial data you asked for:\n{REPLY_BODY}\nLet me know if you \
         need anything else."
    );

    // When/Then: the first-brace-to-last-brace fallback recovers the object
    let record = extract_record(&reply).expect("prose-wrapped JSON should extract");
    assert_apple(&record);
}

#[test]
fn when_fenced_json_is_also_surrounded_by_prose_extraction_succeeds() {
    let reply = format!("Here you go:\n```json\n{REPLY_BODY}\n```");
    let record = extract_record(&reply).expect("prose plus fence should extract");
    assert_apple(&record);
}

// =============================================================================
// Extraction: failure modes
// =============================================================================

#[test]
fn when_reply_has_no_braces_extraction_fails_with_no_json_found() {
    let outcome = extract_record("I could not find any data for that company.");
    assert_eq!(outcome, Err(ParseFailure::NoJsonFound));
}

#[test]
fn when_braces_enclose_invalid_json_extraction_fails() {
    let outcome = extract_record("the set {1, 2, 3} is not JSON");
    assert_eq!(outcome, Err(ParseFailure::NoJsonFound));
}

#[test]
fn when_reply_is_empty_extraction_fails() {
    assert_eq!(extract_record(""), Err(ParseFailure::NoJsonFound));
    assert_eq!(extract_record("   \n  "), Err(ParseFailure::NoJsonFound));
}

// =============================================================================
// Extraction: field leniency
// =============================================================================

#[test]
fn when_fields_are_null_they_stay_absent() {
    // Given: the upstream could not determine wacc or currency
    let reply = r#"{"ticker":"AAPL","price":150,"fcfPerShare":6,"wacc":null,"currency":null}"#;

    // When: extraction runs
    let record = extract_record(reply).expect("null fields are not a parse failure");

    // Then: the nulls become absent fields, never fabricated numbers
    assert_eq!(record.wacc, None);
    assert_eq!(record.currency, None);
    assert_eq!(record.price, Some(150.0));
}

#[test]
fn when_unexpected_keys_are_present_they_are_ignored() {
    let reply = r#"{"ticker":"AAPL","price":150,"fcfPerShare":6,"wacc":0.09,"currency":"$","peRatio":28.4,"note":"estimate"}"#;
    let record = extract_record(reply).expect("extra keys are ignored");
    assert_apple(&record);
}

#[test]
fn when_all_keys_are_missing_extraction_still_succeeds() {
    // Key-presence validation belongs to the orchestrator, not the extractor.
    let record = extract_record("{}").expect("empty object is a valid candidate");
    assert_eq!(record, FinancialRecord::default());
    assert_eq!(record.missing_required(), vec!["price", "fcfPerShare", "wacc"]);
}
