//! Static presentation settings for the prediction chart.

use rusty_money::iso;
use tracing::warn;

pub const DEFAULT_CURRENCY_CODE: &str = "INR";

/// Colours, fonts and sizes handed to the chart library, plus the currency symbol
/// used when formatting values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub currency_symbol: String,
    pub font_family: String,

    pub historical_label: String,
    pub historical_color: String,
    pub predicted_label: String,
    pub predicted_color: String,

    /// Gradient under the historical line, from top to bottom
    pub gradient_top: String,
    pub gradient_bottom: String,
    /// Height in pixels over which the gradient fades out
    pub gradient_height: f64,

    pub line_width: u32,
    pub point_radius: u32,
    pub predicted_point_radius: u32,
    pub predicted_point_style: String,
    pub tension: f64,

    pub text_color: String,
    pub grid_color: String,
    pub tooltip_background: String,
    pub tooltip_text: String,
    pub tooltip_border: String,
    pub tooltip_padding: u32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            currency_symbol: currency_symbol(DEFAULT_CURRENCY_CODE),
            font_family: "system-ui".to_string(),
            historical_label: "Monthly Expenses".to_string(),
            historical_color: "#6366f1".to_string(),
            predicted_label: "Predicted Expense".to_string(),
            predicted_color: "#f43f5e".to_string(),
            gradient_top: "rgba(99, 102, 241, 0.5)".to_string(),
            gradient_bottom: "rgba(99, 102, 241, 0)".to_string(),
            gradient_height: 400.0,
            line_width: 2,
            point_radius: 4,
            predicted_point_radius: 6,
            predicted_point_style: "star".to_string(),
            tension: 0.4,
            text_color: "#94a3b8".to_string(),
            grid_color: "#334155".to_string(),
            tooltip_background: "#1e293b".to_string(),
            tooltip_text: "#e2e8f0".to_string(),
            tooltip_border: "#475569".to_string(),
            tooltip_padding: 12,
        }
    }
}

impl ChartTheme {
    /// Default theme with values formatted in the given ISO 4217 currency.
    pub fn with_currency(code: &str) -> Self {
        Self {
            currency_symbol: currency_symbol(code),
            ..Self::default()
        }
    }

    /// `<symbol><value to two decimals>`, as shown on the y axis.
    pub fn format_value(&self, value: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, value)
    }

    /// `<dataset label>: <formatted value>`, as shown in the tooltip.
    pub fn format_tooltip(&self, dataset_label: &str, value: f64) -> String {
        format!("{}: {}", dataset_label, self.format_value(value))
    }
}

/// Symbol of an ISO 4217 currency. Unknown codes are shown as the code itself.
pub fn currency_symbol(code: &str) -> String {
    let code = code.trim().to_uppercase();
    match iso::find(&code) {
        Some(currency) => currency.symbol.to_string(),
        None => {
            warn!(code = %code, "Unknown currency code");
            format!("{} ", code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_rupee() {
        let theme = ChartTheme::default();
        assert_eq!(theme.currency_symbol, "₹");
        assert_eq!(theme.format_value(1234.5), "₹1234.50");
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(currency_symbol("usd"), "$");
        assert_eq!(currency_symbol(" EUR "), "€");
        assert_eq!(currency_symbol("XYZ"), "XYZ ");
    }

    #[test]
    fn test_tooltip_format() {
        let theme = ChartTheme::with_currency("USD");
        assert_eq!(
            theme.format_tooltip("Predicted Expense", 99.999),
            "Predicted Expense: $100.00"
        );
    }

    #[test]
    fn test_negative_values_keep_sign_after_symbol() {
        let theme = ChartTheme::default();
        assert_eq!(theme.format_value(-12.0), "₹-12.00");
    }
}
