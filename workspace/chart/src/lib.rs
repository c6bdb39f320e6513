//! Expense prediction chart: the data side of the "monthly expenses vs. next month
//! forecast" line chart.
//!
//! Everything here is host-agnostic. The browser crate reads the placeholder
//! element's attributes, hands them to [`init_prediction_chart`] together with a
//! [`ChartRenderer`], and the renderer draws the resulting [`ChartConfig`].

pub mod attributes;
pub mod config;
pub mod error;
pub mod month;
pub mod render;
pub mod series;
pub mod theme;

pub use attributes::{ChartAttributes, ChartInput};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use month::MonthLabel;
pub use render::{ChartRenderer, InitOutcome, init_prediction_chart};
pub use series::ChartSeriesPair;
pub use theme::ChartTheme;
