//! Core contracts for gordon.
//!
//! This crate contains:
//! - The financial record domain model and grounding citations
//! - Reply-text extraction with layered fallbacks
//! - Citation reconciliation
//! - The implied-growth valuation math
//! - The Gemini adapter and fetch orchestration

pub mod config;
pub mod extract;
pub mod fetch;
pub mod gemini;
pub mod growth;
pub mod http_client;
pub mod record;
pub mod sources;

pub use config::{GeminiConfig, DEFAULT_MODEL, PLACEHOLDER_API_KEY};
pub use extract::{extract_record, ParseFailure};
pub use fetch::{FetchError, FetchErrorKind, FetchOrchestrator};
pub use gemini::{GenerateReply, ReplyError};
pub use growth::{implied_growth, WorkingInputs};
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    ScriptedHttpClient,
};
pub use record::{Citation, FinancialRecord, GroundedFundamentals, RawCitation};
pub use sources::reconcile;
