//! Calendar month labels in "YYYY-MM" form.

use crate::error::{ChartError, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, displayed as zero-padded "YYYY-MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthLabel {
    year: i32,
    month: u32,
}

impl MonthLabel {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ChartError::MonthOutOfRange {
                label: format!("{}-{:02}", year, month),
                month,
            });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month immediately after this one. December rolls over into January of
    /// the following year. `None` when the result is outside the calendar range.
    pub fn next(&self) -> Option<Self> {
        let next = NaiveDate::from_ymd_opt(self.year, self.month, 1)?
            .checked_add_months(Months::new(1))?;
        Some(Self {
            year: next.year(),
            month: next.month(),
        })
    }
}

impl FromStr for MonthLabel {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let format_err = || ChartError::MonthFormat(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(format_err)?;
        let year: i32 = year.trim().parse().map_err(|_| format_err())?;
        let month: u32 = month.trim().parse().map_err(|_| format_err())?;

        Self::new(year, month).map_err(|_| ChartError::MonthOutOfRange {
            label: s.to_string(),
            month,
        })
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let label: MonthLabel = "2024-05".parse().unwrap();
        assert_eq!(label.year(), 2024);
        assert_eq!(label.month(), 5);
        assert_eq!(label.to_string(), "2024-05");
    }

    #[test]
    fn test_display_zero_pads_unpadded_input() {
        let label: MonthLabel = "2024-3".parse().unwrap();
        assert_eq!(label.to_string(), "2024-03");
    }

    #[test]
    fn test_next_within_year() {
        let label: MonthLabel = "2024-05".parse().unwrap();
        assert_eq!(label.next().unwrap().to_string(), "2024-06");
    }

    #[test]
    fn test_next_rolls_over_december() {
        let label: MonthLabel = "2024-12".parse().unwrap();
        assert_eq!(label.next().unwrap().to_string(), "2025-01");
    }

    #[test]
    fn test_next_every_month() {
        for month in 1..=11 {
            let next = MonthLabel::new(2023, month).unwrap().next().unwrap();
            assert_eq!((next.year(), next.month()), (2023, month + 1));
        }
    }

    #[test]
    fn test_next_out_of_calendar_range() {
        let label: MonthLabel = "2147483647-12".parse().unwrap();
        assert_eq!(label.next(), None);

        let label = MonthLabel::new(i32::MAX, 5).unwrap();
        assert_eq!(label.next(), None);
    }

    #[test]
    fn test_rejects_month_out_of_range() {
        assert!(matches!(
            "2024-13".parse::<MonthLabel>(),
            Err(ChartError::MonthOutOfRange { month: 13, .. })
        ));
        assert!(matches!(
            "2024-00".parse::<MonthLabel>(),
            Err(ChartError::MonthOutOfRange { month: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_label() {
        for raw in ["", "2024", "abcd-ef", "2024-05-01", "May 2024"] {
            assert!(raw.parse::<MonthLabel>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let labels: Vec<MonthLabel> = serde_json::from_str(r#"["2023-11","2023-12"]"#).unwrap();
        assert_eq!(labels[1].next().unwrap().to_string(), "2024-01");
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"["2023-11","2023-12"]"#);
    }
}
