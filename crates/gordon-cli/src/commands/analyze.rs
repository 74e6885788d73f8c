use std::sync::Arc;
use std::time::Instant;

use gordon_core::{FetchOrchestrator, GeminiConfig, ReqwestHttpClient, WorkingInputs};

use crate::cli::{AnalyzeArgs, Cli};
use crate::error::CliError;
use crate::report::AnalysisReport;

pub async fn run(args: &AnalyzeArgs, cli: &Cli) -> Result<AnalysisReport, CliError> {
    let company = args.company.trim();
    if company.is_empty() {
        return Err(CliError::Invalid(String::from(
            "company name or ticker must not be empty",
        )));
    }

    let mut config = GeminiConfig::from_env();
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    let model = config.model().to_owned();

    let orchestrator = FetchOrchestrator::new(config, Arc::new(ReqwestHttpClient::new()))
        .with_timeout_ms(cli.timeout_ms);

    let started = Instant::now();
    let grounded = orchestrator.fetch(company).await?;
    let latency_ms = started.elapsed().as_millis() as u64;

    let mut inputs = WorkingInputs::from_record(&grounded.record);
    if let Some(price) = &args.price {
        inputs.price = price.clone();
    }
    if let Some(fcf) = &args.fcf {
        inputs.fcf_per_share = fcf.clone();
    }
    if let Some(wacc) = &args.wacc {
        inputs.wacc_percent = wacc.clone();
    }

    // Non-finite results are suppressed here, at the display boundary.
    let implied = inputs.implied_growth().filter(|value| value.is_finite());

    AnalysisReport::analysis(company, &model, latency_ms, grounded, inputs, implied)
}
