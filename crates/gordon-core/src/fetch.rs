//! Fetch orchestration and failure classification.
//!
//! Every failure path is re-expressed as a [`FetchError`] kind before it
//! leaves this module; callers never see a raw transport or parse fault.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::config::GeminiConfig;
use crate::extract::{self, ParseFailure};
use crate::gemini::{self, ReplyError};
use crate::http_client::HttpClient;
use crate::record::GroundedFundamentals;
use crate::sources;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Failure classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Credential missing or left at the placeholder; never reaches the
    /// network.
    Configuration,
    /// Upstream rejected the call shape (HTTP 400).
    MalformedRequest,
    /// Any other transport or service-level failure.
    Upstream,
    /// No extractable JSON object in the reply text.
    MalformedResponse,
    /// Extracted record is missing price, fcfPerShare, or wacc.
    IncompleteData,
    /// Catch-all for failures not matching the above.
    Unknown,
}

/// Classified fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Configuration,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn malformed_request() -> Self {
        Self {
            kind: FetchErrorKind::MalformedRequest,
            message: String::from(
                "the upstream service rejected the request; this is usually transient, \
                 please try again later",
            ),
            retryable: true,
        }
    }

    pub fn upstream(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Upstream,
            message: format!("failed to fetch data from the upstream service: {}", detail.into()),
            retryable: true,
        }
    }

    pub fn malformed_response() -> Self {
        Self {
            kind: FetchErrorKind::MalformedResponse,
            message: String::from(
                "the upstream service replied in an incorrect format, please retry",
            ),
            retryable: true,
        }
    }

    pub fn incomplete_data(entity: &str, missing: &[&str]) -> Self {
        Self {
            kind: FetchErrorKind::IncompleteData,
            message: format!(
                "could not retrieve all required data for {entity}; missing: {}",
                missing.join(", ")
            ),
            retryable: true,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Unknown,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Configuration => "fetch.configuration",
            FetchErrorKind::MalformedRequest => "fetch.malformed_request",
            FetchErrorKind::Upstream => "fetch.upstream",
            FetchErrorKind::MalformedResponse => "fetch.malformed_response",
            FetchErrorKind::IncompleteData => "fetch.incomplete_data",
            FetchErrorKind::Unknown => "fetch.unknown",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Issues one upstream call per fetch and normalizes every outcome.
///
/// Stateless across calls: overlapping fetches proceed independently and
/// each returns its own result. No retries, no caching, no cancellation
/// primitive.
pub struct FetchOrchestrator {
    config: GeminiConfig,
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl FetchOrchestrator {
    pub fn new(config: GeminiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Retrieves and validates fundamentals for one company identifier.
    pub async fn fetch(&self, company: &str) -> Result<GroundedFundamentals, FetchError> {
        self.config.ensure_configured()?;

        let request =
            gemini::generate_request(&self.config, company).with_timeout_ms(self.timeout_ms);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| FetchError::upstream(error.message()))?;

        if response.is_bad_request() {
            return Err(FetchError::malformed_request());
        }
        if !response.is_success() {
            return Err(FetchError::upstream(format!(
                "upstream returned status {}",
                response.status
            )));
        }

        let reply = gemini::decode_reply(&response.body).map_err(|error| match error {
            ReplyError::Envelope(inner) => FetchError::unknown(inner.to_string()),
            ReplyError::NoText => FetchError::upstream("reply contained no text candidates"),
        })?;

        let record = extract::extract_record(&reply.text)
            .map_err(|ParseFailure::NoJsonFound| FetchError::malformed_response())?;
        let citations = sources::reconcile(&reply.citations);

        let missing = record.missing_required();
        if !missing.is_empty() {
            let entity = record.ticker.as_deref().unwrap_or(company);
            return Err(FetchError::incomplete_data(entity, &missing));
        }

        Ok(GroundedFundamentals { record, citations })
    }
}
