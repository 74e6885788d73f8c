use gordon_core::WorkingInputs;

use crate::cli::GrowthArgs;
use crate::error::CliError;
use crate::report::AnalysisReport;

pub fn run(args: &GrowthArgs) -> Result<AnalysisReport, CliError> {
    let inputs = WorkingInputs {
        price: args.price.clone(),
        fcf_per_share: args.fcf.clone(),
        wacc_percent: args.wacc.clone(),
    };

    let implied = inputs.implied_growth().filter(|value| value.is_finite());

    AnalysisReport::offline(inputs, implied)
}
