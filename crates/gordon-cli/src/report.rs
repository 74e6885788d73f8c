use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use gordon_core::{Citation, FinancialRecord, GroundedFundamentals, WorkingInputs};

use crate::error::CliError;

/// Machine-readable outcome of one CLI invocation.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub request_id: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<FinancialRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    pub inputs: WorkingInputs,
    /// Implied perpetual growth in percent; absent when not computable or
    /// when the computed value is non-finite.
    pub implied_growth_pct: Option<f64>,
}

impl AnalysisReport {
    /// Report for an online `analyze` run.
    pub fn analysis(
        company: &str,
        model: &str,
        latency_ms: u64,
        grounded: GroundedFundamentals,
        inputs: WorkingInputs,
        implied_growth_pct: Option<f64>,
    ) -> Result<Self, CliError> {
        Ok(Self {
            request_id: Uuid::new_v4().to_string(),
            generated_at: rfc3339_now()?,
            company: Some(company.to_owned()),
            model: Some(model.to_owned()),
            latency_ms,
            record: Some(grounded.record),
            citations: grounded.citations,
            inputs,
            implied_growth_pct,
        })
    }

    /// Report for an offline `growth` run; no record and no citations.
    pub fn offline(
        inputs: WorkingInputs,
        implied_growth_pct: Option<f64>,
    ) -> Result<Self, CliError> {
        Ok(Self {
            request_id: Uuid::new_v4().to_string(),
            generated_at: rfc3339_now()?,
            company: None,
            model: None,
            latency_ms: 0,
            record: None,
            citations: Vec::new(),
            inputs,
            implied_growth_pct,
        })
    }
}

fn rfc3339_now() -> Result<String, CliError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|error| CliError::Command(error.to_string()))
}
