//! Reply-text extraction.
//!
//! The upstream service is asked for a bare JSON object but routinely wraps
//! it in markdown fences or explanatory prose anyway. Extraction therefore
//! runs a layered fallback: strip fences, attempt a direct parse, then
//! recover the first-`{`-to-last-`}` substring before giving up.

use serde_json::Value;
use thiserror::Error;

use crate::record::FinancialRecord;

/// Extraction failures surfaced to the orchestrator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("no valid JSON object found in the reply text")]
    NoJsonFound,
}

/// Extracts a candidate record from an untrusted reply body.
///
/// Fields the reply omits (or types incorrectly) stay absent on the record;
/// key-presence validation belongs to the orchestrator, not this layer.
pub fn extract_record(raw: &str) -> Result<FinancialRecord, ParseFailure> {
    let text = strip_fences(raw.trim());

    if let Some(record) = parse_object(text) {
        return Ok(record);
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            parse_object(&text[start..=end]).ok_or(ParseFailure::NoJsonFound)
        }
        _ => Err(ParseFailure::NoJsonFound),
    }
}

/// Removes a surrounding markdown code fence, tagged or bare.
///
/// A missing closing fence is tolerated; the opener alone is stripped.
fn strip_fences(text: &str) -> &str {
    for opener in ["```json", "```"] {
        if let Some(rest) = text.strip_prefix(opener) {
            let rest = rest.trim_end();
            return rest.strip_suffix("```").unwrap_or(rest).trim();
        }
    }
    text
}

fn parse_object(text: &str) -> Option<FinancialRecord> {
    let value: Value = serde_json::from_str(text).ok()?;
    if !value.is_object() {
        return None;
    }
    Some(FinancialRecord::from_json(&value))
}
