//! Adapter for the Gemini `generateContent` endpoint.
//!
//! Owns the retrieval prompt, the request wire format, and the reply
//! envelope. The reply *text* is untrusted and handled by [`crate::extract`];
//! this module only peels the API envelope off it.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::GeminiConfig;
use crate::http_client::{HttpAuth, HttpRequest};
use crate::record::RawCitation;

const GENERATE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Builds the retrieval instruction for one company.
///
/// The output contract is the part that matters: a single raw JSON object
/// with exactly the keys `ticker`, `price`, `fcfPerShare`, `wacc`,
/// `currency`, `null` for anything undetermined, and WACC as a decimal
/// fraction.
pub fn build_prompt(company: &str) -> String {
    format!(
        "You are an expert financial analyst AI.\n\
         Retrieve the latest, most accurate financial data for the company: \"{company}\".\n\
         \n\
         Prioritize data from these sources in order: Finchat, alphaspread, Tikr.\n\
         If data is not available there, use other reputable public financial data providers.\n\
         \n\
         You need to find:\n\
         - The official stock ticker symbol.\n\
         - The current (or most recent closing) stock price.\n\
         - The Free Cash Flow (FCF) per share for the Trailing Twelve Months (TTM).\n\
         - The Weighted Average Cost of Capital (WACC).\n\
         - The currency of the stock price.\n\
         \n\
         Ensure the WACC is a decimal value (e.g., 8.5% should be 0.085).\n\
         \n\
         IMPORTANT: The final output MUST be ONLY a single, raw JSON object. Do not \
         include any text, explanations, or markdown formatting (like ```json) before \
         or after the JSON object. The JSON object must have these exact keys: \
         \"ticker\", \"price\", \"fcfPerShare\", \"wacc\", \"currency\". If you cannot \
         find a specific value for any field, its value in the JSON MUST be null."
    )
}

/// Builds the upstream call for one company.
///
/// Carries the prompt plus the `google_search` tool entry that asks the
/// service to ground its answer in live web search.
pub fn generate_request(config: &GeminiConfig, company: &str) -> HttpRequest {
    let body = json!({
        "contents": [{ "parts": [{ "text": build_prompt(company) }] }],
        "tools": [{ "google_search": {} }],
    });

    HttpRequest::post(format!(
        "{GENERATE_ENDPOINT}/{}:generateContent",
        config.model()
    ))
    .with_header("content-type", "application/json")
    .with_auth(&HttpAuth::Header {
        name: String::from("x-goog-api-key"),
        value: config.api_key().to_owned(),
    })
    .with_body(body.to_string())
}

/// Decoded reply: the concatenated candidate text plus raw grounding
/// citations, ready for extraction and reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReply {
    pub text: String,
    pub citations: Vec<RawCitation>,
}

/// Failures decoding the reply envelope.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("unrecognized reply envelope: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("reply contained no text candidates")]
    NoText,
}

/// Peels the generateContent envelope off a transport body.
///
/// Grounding metadata is optional; its absence yields an empty citation
/// list, not an error.
pub fn decode_reply(body: &str) -> Result<GenerateReply, ReplyError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)?;
    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or(ReplyError::NoText)?;

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(ReplyError::NoText);
    }

    let citations = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .map(|chunk| {
                    let web = chunk.web.unwrap_or_default();
                    RawCitation {
                        uri: web.uri,
                        title: web.title,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(GenerateReply { text, citations })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ReplyCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyCandidate {
    #[serde(default)]
    content: Option<ReplyContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Debug, Default, Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}
