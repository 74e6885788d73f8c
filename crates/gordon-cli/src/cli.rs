//! CLI argument definitions for Gordon.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Fetch grounded fundamentals and derive implied growth |
//! | `growth` | Evaluate the growth model offline from explicit inputs |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Gordon - implied growth analyzer
///
/// Asks a web-grounded generative model for a company's fundamentals
/// (price, TTM FCF per share, WACC) and inverts the FCF perpetuity model to
/// report the growth rate the current price implies.
#[derive(Debug, Parser)]
#[command(name = "gordon", author, version, about = "Grounded implied-growth analyzer")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Upstream request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Model to query (defaults to the GORDON_MODEL environment variable,
    /// then gemini-2.5-flash).
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Key/value table for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch grounded fundamentals for a company and derive implied growth.
    Analyze(AnalyzeArgs),
    /// Evaluate the growth model offline from explicit inputs.
    Growth(GrowthArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Company name or ticker to analyze (e.g. "Apple" or AAPL).
    pub company: String,

    /// Override the fetched stock price before computing growth.
    #[arg(long)]
    pub price: Option<String>,

    /// Override the fetched FCF per share (TTM).
    #[arg(long)]
    pub fcf: Option<String>,

    /// Override the fetched WACC, as a percentage value (e.g. 8.5).
    #[arg(long)]
    pub wacc: Option<String>,
}

#[derive(Debug, Args)]
pub struct GrowthArgs {
    /// Stock price.
    #[arg(long)]
    pub price: String,

    /// FCF per share (TTM).
    #[arg(long)]
    pub fcf: String,

    /// WACC as a percentage value (e.g. 8.5).
    #[arg(long)]
    pub wacc: String,
}
