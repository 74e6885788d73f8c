use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::report::AnalysisReport;

pub fn render(report: &AnalysisReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report),
    }

    Ok(())
}

fn render_table(report: &AnalysisReport) {
    println!("request_id    : {}", report.request_id);
    println!("generated_at  : {}", report.generated_at);
    if let Some(company) = &report.company {
        println!("company       : {company}");
    }
    if let Some(model) = &report.model {
        println!("model         : {model}");
    }
    println!("latency_ms    : {}", report.latency_ms);

    if let Some(record) = &report.record {
        let currency = record.currency.as_deref().unwrap_or("$");
        println!("record:");
        println!("  ticker        : {}", record.ticker.as_deref().unwrap_or("-"));
        println!("  price         : {}", fmt_amount(record.price, currency));
        println!("  fcf_per_share : {}", fmt_amount(record.fcf_per_share, currency));
        println!("  wacc          : {}", fmt_wacc(record.wacc));
    }

    println!("inputs:");
    println!("  price         : {}", report.inputs.price);
    println!("  fcf_per_share : {}", report.inputs.fcf_per_share);
    println!("  wacc_percent  : {}", report.inputs.wacc_percent);

    match report.implied_growth_pct {
        Some(growth) => println!("implied_growth: {growth:.2}%"),
        None => println!("implied_growth: not computable from current inputs"),
    }

    if !report.citations.is_empty() {
        println!("sources:");
        for citation in &report.citations {
            println!("  - {} ({})", citation.title, citation.uri);
        }
    }
}

fn fmt_amount(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(value) => format!("{currency}{value}"),
        None => String::from("-"),
    }
}

fn fmt_wacc(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => String::from("-"),
    }
}
