use crate::attributes::ChartInput;
use crate::month::MonthLabel;
use serde::Serialize;
use tracing::debug;

/// The two datasets of the prediction chart plus the shared x-axis labels.
///
/// When a projection is possible, `labels` has one more entry than `historical`:
/// the month after the last observed one. `predicted` is null everywhere except that
/// trailing slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeriesPair {
    pub labels: Vec<String>,
    pub historical: Vec<f64>,
    pub predicted: Vec<Option<f64>>,
}

impl ChartSeriesPair {
    pub fn build(input: &ChartInput) -> Self {
        let mut labels = input.months.clone();
        let historical = input.totals.clone();

        let Some(next) = projected_month(&input.months) else {
            return Self {
                labels,
                historical,
                predicted: Vec::new(),
            };
        };

        labels.push(next.to_string());
        let predicted = std::iter::repeat_n(None, historical.len())
            .chain(std::iter::once(Some(input.prediction)))
            .collect();

        debug!(next = %next, prediction = input.prediction, "Appended predicted month");
        Self {
            labels,
            historical,
            predicted,
        }
    }

    /// Whether a predicted point was appended.
    pub fn has_prediction(&self) -> bool {
        !self.predicted.is_empty()
    }

    /// Label of the predicted month, if any.
    pub fn predicted_label(&self) -> Option<&str> {
        if self.has_prediction() {
            self.labels.last().map(String::as_str)
        } else {
            None
        }
    }
}

/// Month following the last label. Nothing is projected from an empty history or a
/// malformed last label.
fn projected_month(months: &[String]) -> Option<MonthLabel> {
    let last = months.last()?;
    match last.parse::<MonthLabel>() {
        Ok(label) => {
            let next = label.next();
            if next.is_none() {
                debug!(last = %label, "No month after last label, skipping prediction point");
            }
            next
        }
        Err(err) => {
            debug!(%err, "Skipping prediction point");
            None
        }
    }
}
