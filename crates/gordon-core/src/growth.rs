//! Implied-growth valuation math.

use serde::{Deserialize, Serialize};

use crate::record::FinancialRecord;

/// Implied perpetual growth rate, in percent.
///
/// Inverts the Gordon-growth valuation `price = fcf / (wacc - g)` into
/// `g = wacc - fcf / price`. `wacc_percent` arrives as a percentage value
/// (8.5 for 8.5%) and is converted internally to a decimal fraction.
///
/// Returns `None` when any input is non-finite or when `price` is not
/// strictly positive. The computed value itself is not screened: a caller
/// that renders the result is expected to suppress non-finite output.
pub fn implied_growth(price: f64, fcf_per_share: f64, wacc_percent: f64) -> Option<f64> {
    if !price.is_finite() || !fcf_per_share.is_finite() || !wacc_percent.is_finite() {
        return None;
    }
    if price <= 0.0 {
        return None;
    }

    Some((wacc_percent / 100.0 - fcf_per_share / price) * 100.0)
}

/// Caller-owned editable copy of the three growth inputs.
///
/// Seeded from a fetched record and free to diverge from it afterwards.
/// Values stay text until evaluation so a half-typed edit is simply "not
/// computable" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingInputs {
    pub price: String,
    pub fcf_per_share: String,
    pub wacc_percent: String,
}

impl WorkingInputs {
    /// Seeds inputs from a record, rendering wacc as a percentage value.
    pub fn from_record(record: &FinancialRecord) -> Self {
        Self {
            price: record.price.map(render).unwrap_or_default(),
            fcf_per_share: record.fcf_per_share.map(render).unwrap_or_default(),
            wacc_percent: record.wacc.map(|wacc| render(wacc * 100.0)).unwrap_or_default(),
        }
    }

    /// Evaluates the growth model against the current input text.
    pub fn implied_growth(&self) -> Option<f64> {
        let price = self.price.trim().parse::<f64>().ok()?;
        let fcf_per_share = self.fcf_per_share.trim().parse::<f64>().ok()?;
        let wacc_percent = self.wacc_percent.trim().parse::<f64>().ok()?;
        implied_growth(price, fcf_per_share, wacc_percent)
    }
}

fn render(value: f64) -> String {
    value.to_string()
}
