//! Chart.js configuration for the prediction chart.

use crate::series::ChartSeriesPair;
use crate::theme::ChartTheme;
use serde::Serialize;
use serde_json::{Value, json};

/// Index of the historical dataset in `data.datasets`
pub const HISTORICAL_DATASET: usize = 0;

/// A complete `line` chart configuration. Values that must be host callables
/// (the gradient fill and the two value formatters) are left as plain data here and
/// replaced by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartConfig(Value);

impl ChartConfig {
    pub fn new(series: &ChartSeriesPair, theme: &ChartTheme) -> Self {
        let font = json!({"family": theme.font_family});

        let historical = json!({
            "label": theme.historical_label,
            "data": series.historical,
            "borderColor": theme.historical_color,
            "borderWidth": theme.line_width,
            "pointBackgroundColor": theme.historical_color,
            "pointRadius": theme.point_radius,
            "tension": theme.tension,
            "fill": true,
            "backgroundColor": theme.gradient_top
        });

        let predicted = json!({
            "label": theme.predicted_label,
            "data": series.predicted,
            "borderColor": theme.predicted_color,
            "borderWidth": theme.line_width,
            "pointBackgroundColor": theme.predicted_color,
            "pointRadius": theme.predicted_point_radius,
            "pointStyle": theme.predicted_point_style,
            "tension": theme.tension,
            "fill": false
        });

        let options = json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "display": true,
                    "position": "top",
                    "labels": {"color": theme.text_color, "font": font}
                },
                "tooltip": {
                    "mode": "index",
                    "intersect": false,
                    "backgroundColor": theme.tooltip_background,
                    "titleColor": theme.tooltip_text,
                    "bodyColor": theme.tooltip_text,
                    "borderColor": theme.tooltip_border,
                    "borderWidth": 1,
                    "padding": theme.tooltip_padding,
                    "displayColors": true,
                    "callbacks": {}
                }
            },
            "scales": {
                "x": {
                    "grid": {"display": false, "drawBorder": false},
                    "ticks": {"color": theme.text_color, "font": font}
                },
                "y": {
                    "grid": {"color": theme.grid_color, "drawBorder": false},
                    "ticks": {"color": theme.text_color, "font": font}
                }
            }
        });

        Self(json!({
            "type": "line",
            "data": {
                "labels": series.labels,
                "datasets": [historical, predicted]
            },
            "options": options
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
