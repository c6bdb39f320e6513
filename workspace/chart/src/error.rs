use thiserror::Error;

/// Error types for reading chart input
#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    /// Month label is not of the form "YYYY-MM"
    #[error("Invalid month label '{0}': expected YYYY-MM")]
    MonthFormat(String),

    /// Month component outside 1..=12
    #[error("Invalid month label '{label}': month {month} is out of range")]
    MonthOutOfRange { label: String, month: u32 },

    /// Attribute payload is not the expected JSON array
    #[error("Attribute '{attribute}' is not a valid JSON array: {reason}")]
    Json { attribute: String, reason: String },

    /// Attribute is not present on the element
    #[error("Attribute '{0}' is missing")]
    MissingAttribute(String),

    /// Prediction attribute carries no number
    #[error("Prediction '{0}' is not a number")]
    Prediction(String),
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
