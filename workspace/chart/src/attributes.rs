//! The placeholder element's data attributes and their parsing.
//!
//! Attribute values arrive as raw strings. Each one has a typed parse that reports
//! what went wrong and an `*_or_default` variant that applies the fallback the chart
//! uses: an empty list for the arrays and zero for the prediction.

use crate::error::{ChartError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

pub const MONTHS_ATTRIBUTE: &str = "data-months";
pub const TOTALS_ATTRIBUTE: &str = "data-totals";
pub const PREDICTION_ATTRIBUTE: &str = "data-prediction";

/// Raw attribute values as read from the chart placeholder. `None` means the
/// attribute is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartAttributes {
    pub months: Option<String>,
    pub totals: Option<String>,
    pub prediction: Option<String>,
}

/// Parsed chart input with all fallbacks applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartInput {
    /// Month labels in chronological order, kept as supplied
    pub months: Vec<String>,
    /// Monthly totals, index-aligned with `months`
    pub totals: Vec<f64>,
    /// Forecast for the month after the last label
    pub prediction: f64,
}

impl ChartAttributes {
    pub fn new(
        months: Option<impl Into<String>>,
        totals: Option<impl Into<String>>,
        prediction: Option<impl Into<String>>,
    ) -> Self {
        Self {
            months: months.map(Into::into),
            totals: totals.map(Into::into),
            prediction: prediction.map(Into::into),
        }
    }

    /// Looks the three attributes up through `get`, e.g. `Element::get_attribute`.
    pub fn from_lookup<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            months: get(MONTHS_ATTRIBUTE),
            totals: get(TOTALS_ATTRIBUTE),
            prediction: get(PREDICTION_ATTRIBUTE),
        }
    }

    pub fn parse(&self) -> ChartInput {
        let input = ChartInput {
            months: parse_json_array_or_default(MONTHS_ATTRIBUTE, self.months.as_deref()),
            totals: parse_json_array_or_default(TOTALS_ATTRIBUTE, self.totals.as_deref()),
            prediction: parse_prediction_or_default(self.prediction.as_deref()),
        };
        debug!(
            months = input.months.len(),
            totals = input.totals.len(),
            prediction = input.prediction,
            "Parsed chart attributes"
        );
        input
    }
}

/// Parses a JSON array attribute. An absent or empty attribute is an empty array.
pub fn parse_json_array<T>(attribute: &str, raw: Option<&str>) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(Vec::new()),
        Some(raw) => raw,
    };

    serde_json::from_str(raw).map_err(|e| ChartError::Json {
        attribute: attribute.to_string(),
        reason: e.to_string(),
    })
}

pub fn parse_json_array_or_default<T>(attribute: &str, raw: Option<&str>) -> Vec<T>
where
    T: DeserializeOwned,
{
    match parse_json_array(attribute, raw) {
        Ok(values) => values,
        Err(err) => {
            debug!(%err, "Falling back to empty data");
            Vec::new()
        }
    }
}

/// Parses the prediction the way a browser's `parseFloat` reads a number: leading
/// whitespace is skipped and the longest numeric prefix is used.
pub fn parse_prediction(raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| ChartError::MissingAttribute(PREDICTION_ATTRIBUTE.to_string()))?;
    let trimmed = raw.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];

    prefix
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ChartError::Prediction(raw.to_string()))
}

pub fn parse_prediction_or_default(raw: Option<&str>) -> f64 {
    match parse_prediction(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "Using zero prediction");
            0.0
        }
    }
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run. The exponent only
/// counts when it has digits.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_months_and_totals() {
        let attrs = ChartAttributes::new(
            Some(r#"["2024-01","2024-02"]"#),
            Some("[120.5, 98]"),
            Some("110.25"),
        );
        let input = attrs.parse();
        assert_eq!(input.months, vec!["2024-01", "2024-02"]);
        assert_eq!(input.totals, vec![120.5, 98.0]);
        assert_eq!(input.prediction, 110.25);
    }

    #[test]
    fn test_absent_attributes_default() {
        let input = ChartAttributes::default().parse();
        assert!(input.months.is_empty());
        assert!(input.totals.is_empty());
        assert_eq!(input.prediction, 0.0);
    }

    #[test]
    fn test_parse_json_array_reports_malformed_input() {
        let result = parse_json_array::<f64>(TOTALS_ATTRIBUTE, Some("[1, 2"));
        assert!(matches!(result, Err(ChartError::Json { ref attribute, .. }) if attribute == TOTALS_ATTRIBUTE));
    }

    #[test]
    fn test_malformed_json_falls_back_to_empty() {
        let attrs = ChartAttributes::new(Some("not json"), Some("{\"a\": 1}"), None::<String>);
        let input = attrs.parse();
        assert!(input.months.is_empty());
        assert!(input.totals.is_empty());
    }

    #[test]
    fn test_null_total_rejects_whole_array() {
        let totals: Vec<f64> = parse_json_array_or_default(TOTALS_ATTRIBUTE, Some("[1, null, 3]"));
        assert!(totals.is_empty());
    }

    #[test]
    fn test_empty_attribute_is_empty_array() {
        let months: Vec<String> = parse_json_array(MONTHS_ATTRIBUTE, Some("  ")).unwrap();
        assert!(months.is_empty());
    }

    #[test]
    fn test_parse_prediction_plain_numbers() {
        assert_eq!(parse_prediction(Some("42")).unwrap(), 42.0);
        assert_eq!(parse_prediction(Some(" -3.5 ")).unwrap(), -3.5);
        assert_eq!(parse_prediction(Some(".5")).unwrap(), 0.5);
        assert_eq!(parse_prediction(Some("1e3")).unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_prediction_uses_numeric_prefix() {
        assert_eq!(parse_prediction(Some("1520.75 INR")).unwrap(), 1520.75);
        assert_eq!(parse_prediction(Some("12e")).unwrap(), 12.0);
        assert_eq!(parse_prediction(Some("7.")).unwrap(), 7.0);
    }

    #[test]
    fn test_parse_prediction_non_numeric() {
        assert!(matches!(parse_prediction(None), Err(ChartError::MissingAttribute(_))));
        for raw in ["", "abc", "NaN", "-", ".", "e5"] {
            assert!(
                matches!(parse_prediction(Some(raw)), Err(ChartError::Prediction(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_prediction_defaults_to_zero() {
        assert_eq!(parse_prediction_or_default(None), 0.0);
        assert_eq!(parse_prediction_or_default(Some("n/a")), 0.0);
        assert_eq!(parse_prediction_or_default(Some("99.9")), 99.9);
    }

    #[test]
    fn test_from_lookup_reads_named_attributes() {
        let attrs = ChartAttributes::from_lookup(|name| match name {
            MONTHS_ATTRIBUTE => Some("[\"2024-01\"]".to_string()),
            PREDICTION_ATTRIBUTE => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(attrs.months.as_deref(), Some("[\"2024-01\"]"));
        assert_eq!(attrs.totals, None);
        assert_eq!(attrs.prediction.as_deref(), Some("5"));
    }
}
