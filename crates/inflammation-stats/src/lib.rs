//! Statistics over inflammation measurement tables.
//!
//! Two independent engines operate on a [`MeasurementTable`]:
//!
//! - **Aggregation**: per-day (column-wise) mean, maximum, minimum and
//!   population standard deviation across all patients.
//! - **Normalisation**: each patient's row scaled by that patient's own peak
//!   value, giving values in `[0, 1]`.
//!
//! # Example
//!
//! ```
//! use inflammation_model::MeasurementTable;
//! use inflammation_stats::{daily_max, patient_normalise};
//!
//! let table = MeasurementTable::new(vec![vec![1.0, 2.0], vec![4.0, 0.0]])?;
//! assert_eq!(daily_max(&table)?, vec![4.0, 2.0]);
//!
//! let normalised = patient_normalise(&table)?;
//! assert_eq!(normalised.rows(), &[vec![0.5, 1.0], vec![1.0, 0.0]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod aggregation;
mod error;
mod normalization;

pub use inflammation_model::MeasurementTable;

// === Error Types ===
pub use error::{Result, StatsError};

// === Daily Statistics ===
pub use aggregation::{
    DailySummary, daily_max, daily_mean, daily_min, daily_standard_deviation, daily_summary,
};

// === Normalisation ===
pub use normalization::patient_normalise;
