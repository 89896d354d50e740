//! Error types for the inflammation data model.

use thiserror::Error;

/// Errors raised while building tables or reading patient history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    // === Table Shape Errors ===
    /// A row does not have the same number of columns as the first row.
    #[error("row {row} has {found} values, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    // === Cell Value Errors ===
    /// A cell could not be read as a number.
    #[error("non-numeric value '{value}' at row {row}, column {column}")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },

    /// A cell is NaN or infinite.
    #[error("non-finite value {value} at row {row}, column {column}")]
    NonFinite { row: usize, column: usize, value: f64 },

    // === Patient History Errors ===
    /// `last_observation` was requested before anything was recorded.
    #[error("no observations recorded for patient '{patient}'")]
    EmptyHistory { patient: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
