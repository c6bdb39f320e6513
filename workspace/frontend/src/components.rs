mod prediction_chart;

pub use prediction_chart::{PredictionChart, PredictionChartProps};
