//! Error types for the statistics engines.

use inflammation_model::ModelError;
use thiserror::Error;

/// Errors that can occur while computing statistics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A daily statistic was requested over a table with no patients.
    #[error("cannot compute daily {statistic} of an empty table")]
    EmptyTable { statistic: &'static str },

    /// Normalisation input contains a negative measurement.
    #[error(
        "inflammation values must not be negative (found {value} at row {row}, column {column})"
    )]
    NegativeValue { row: usize, column: usize, value: f64 },

    /// A derived table violated the table invariants.
    #[error(transparent)]
    Table(#[from] ModelError),
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::EmptyTable { statistic: "mean" };
        assert_eq!(err.to_string(), "cannot compute daily mean of an empty table");

        let err = StatsError::NegativeValue {
            row: 1,
            column: 0,
            value: -2.0,
        };
        assert!(
            err.to_string()
                .starts_with("inflammation values must not be negative")
        );
    }
}
