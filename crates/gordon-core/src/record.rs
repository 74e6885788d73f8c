use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fundamentals for a single company as reported by the upstream service.
///
/// Every field is optional: the upstream replies `null` for anything it
/// cannot determine, and absence must stay observable so the completeness
/// gate and the growth math never operate on fabricated values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "fcfPerShare")]
    pub fcf_per_share: Option<f64>,
    /// Discount rate as a decimal fraction (0.085 means 8.5%).
    #[serde(default)]
    pub wacc: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl FinancialRecord {
    /// Builds a record from a parsed JSON object.
    ///
    /// Missing, `null`, and wrong-typed fields all map to `None`; unexpected
    /// keys are ignored.
    pub fn from_json(object: &Value) -> Self {
        Self {
            ticker: string_field(object, "ticker"),
            price: numeric_field(object, "price"),
            fcf_per_share: numeric_field(object, "fcfPerShare"),
            wacc: numeric_field(object, "wacc"),
            currency: string_field(object, "currency"),
        }
    }

    /// Required fields (wire names) absent from this record.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.price.is_none() {
            missing.push("price");
        }
        if self.fcf_per_share.is_none() {
            missing.push("fcfPerShare");
        }
        if self.wacc.is_none() {
            missing.push("wacc");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

fn numeric_field(object: &Value, key: &str) -> Option<f64> {
    object.get(key).and_then(Value::as_f64)
}

fn string_field(object: &Value, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// A deduplicated grounding source attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub uri: String,
    pub title: String,
}

/// Citation metadata as delivered by the upstream, before reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCitation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Successful outcome of one fetch: the validated record plus its sources.
///
/// Created per retrieval and never merged with the outcome of an earlier
/// fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundedFundamentals {
    pub record: FinancialRecord,
    pub citations: Vec<Citation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_typed_fields_become_absent() {
        let object = json!({
            "ticker": "AAPL",
            "price": "one hundred",
            "fcfPerShare": 6.0,
            "wacc": null,
            "currency": 7
        });

        let record = FinancialRecord::from_json(&object);
        assert_eq!(record.ticker.as_deref(), Some("AAPL"));
        assert_eq!(record.price, None);
        assert_eq!(record.fcf_per_share, Some(6.0));
        assert_eq!(record.wacc, None);
        assert_eq!(record.currency, None);
    }

    #[test]
    fn missing_required_names_wire_keys() {
        let record = FinancialRecord {
            price: Some(150.0),
            ..FinancialRecord::default()
        };

        assert_eq!(record.missing_required(), vec!["fcfPerShare", "wacc"]);
        assert!(!record.is_complete());
    }

    #[test]
    fn integer_prices_read_as_floats() {
        let record = FinancialRecord::from_json(&json!({ "price": 150 }));
        assert_eq!(record.price, Some(150.0));
    }
}
