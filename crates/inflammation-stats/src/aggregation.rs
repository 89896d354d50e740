//! Per-day statistics: column-wise reductions across all patients.

use inflammation_model::MeasurementTable;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StatsError};

/// All daily statistics of one table, each with one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub mean: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
    pub standard_deviation: Vec<f64>,
}

impl DailySummary {
    pub fn n_days(&self) -> usize {
        self.mean.len()
    }
}

/// Arithmetic mean of each day across all patients.
pub fn daily_mean(table: &MeasurementTable) -> Result<Vec<f64>> {
    per_day(table, "mean", mean)
}

/// Maximum of each day across all patients.
pub fn daily_max(table: &MeasurementTable) -> Result<Vec<f64>> {
    per_day(table, "max", |values| {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Minimum of each day across all patients.
pub fn daily_min(table: &MeasurementTable) -> Result<Vec<f64>> {
    per_day(table, "min", |values| {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// Population standard deviation (divisor `n`) of each day.
pub fn daily_standard_deviation(table: &MeasurementTable) -> Result<Vec<f64>> {
    per_day(table, "standard deviation", |values| {
        let centre = mean(values);
        // Half-deviations cannot overflow even when the spread exceeds f64::MAX.
        let halves: Vec<f64> = values.iter().map(|v| v / 2.0 - centre / 2.0).collect();
        let scale = halves.iter().fold(0.0_f64, |acc, h| acc.max(h.abs()));
        if scale == 0.0 {
            return 0.0;
        }
        2.0 * scale * mean_square(&halves, scale).sqrt()
    })
}

/// Compute every daily statistic in one call.
pub fn daily_summary(table: &MeasurementTable) -> Result<DailySummary> {
    Ok(DailySummary {
        mean: daily_mean(table)?,
        max: daily_max(table)?,
        min: daily_min(table)?,
        standard_deviation: daily_standard_deviation(table)?,
    })
}

fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

fn mean_square(values: &[f64], scale: f64) -> f64 {
    values.iter().map(|v| (v / scale).powi(2)).sum::<f64>() / values.len() as f64
}

/// Apply `reduce` to every column. Columns are never empty: zero-row tables
/// are rejected up front.
fn per_day(
    table: &MeasurementTable,
    statistic: &'static str,
    reduce: impl Fn(&[f64]) -> f64,
) -> Result<Vec<f64>> {
    if table.is_empty() {
        return Err(StatsError::EmptyTable { statistic });
    }
    debug!(
        statistic,
        patients = table.n_rows(),
        days = table.n_columns(),
        "computing daily statistic"
    );

    let mut column = Vec::with_capacity(table.n_rows());
    let values = (0..table.n_columns())
        .map(|day| {
            column.clear();
            column.extend(table.rows().iter().map(|row| row[day]));
            reduce(&column)
        })
        .collect();
    Ok(values)
}
