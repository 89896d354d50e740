//! Per-patient normalisation against each patient's own peak value.

use inflammation_model::MeasurementTable;
use tracing::debug;

use crate::error::{Result, StatsError};

/// Divide every row by its own maximum.
///
/// The whole table is checked for negative values before any output is
/// built; one negative cell anywhere rejects the call. Rows whose maximum is
/// zero normalise to all zeros.
pub fn patient_normalise(table: &MeasurementTable) -> Result<MeasurementTable> {
    if let Some((row, column, value)) = first_negative(table) {
        return Err(StatsError::NegativeValue { row, column, value });
    }
    debug!(
        patients = table.n_rows(),
        days = table.n_columns(),
        "normalising patient rows"
    );

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| normalise_row(idx, row))
        .collect();
    Ok(MeasurementTable::new(rows)?)
}

fn first_negative(table: &MeasurementTable) -> Option<(usize, usize, f64)> {
    table.rows().iter().enumerate().find_map(|(row, values)| {
        values
            .iter()
            .position(|v| *v < 0.0)
            .map(|column| (row, column, values[column]))
    })
}

fn normalise_row(idx: usize, row: &[f64]) -> Vec<f64> {
    let peak = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if peak <= 0.0 {
        debug!(row = idx, "patient has zero peak; row normalised to zeros");
        return vec![0.0; row.len()];
    }
    row.iter().map(|v| clamp_ratio(v / peak)).collect()
}

/// Undefined or negative ratios become 0.
fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() || ratio < 0.0 {
        0.0
    } else {
        ratio
    }
}
