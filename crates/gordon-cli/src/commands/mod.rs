mod analyze;
mod growth;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::report::AnalysisReport;

pub async fn run(cli: &Cli) -> Result<AnalysisReport, CliError> {
    match &cli.command {
        Command::Analyze(args) => analyze::run(args, cli).await,
        Command::Growth(args) => growth::run(args),
    }
}
