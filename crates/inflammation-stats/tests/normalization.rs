//! Tests for per-patient normalisation.

use inflammation_model::MeasurementTable;
use inflammation_stats::{StatsError, patient_normalise};
use proptest::prelude::*;

fn table(rows: &[&[f64]]) -> MeasurementTable {
    MeasurementTable::new(rows.iter().map(|row| row.to_vec()).collect()).expect("valid table")
}

fn assert_close(actual: &MeasurementTable, expected: &[&[f64]], tolerance: f64) {
    assert_eq!(actual.n_rows(), expected.len());
    for (got, want) in actual.rows().iter().zip(expected) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want.iter()) {
            assert!((g - w).abs() < tolerance, "expected {w}, got {g}");
        }
    }
}

#[test]
fn normalises_each_row_by_its_peak() {
    let out = patient_normalise(&table(&[
        &[1.0, 2.0, 3.0],
        &[4.0, 5.0, 6.0],
        &[7.0, 8.0, 9.0],
    ]))
    .unwrap();
    assert_close(
        &out,
        &[&[0.33, 0.67, 1.0], &[0.67, 0.83, 1.0], &[0.78, 0.89, 1.0]],
        0.01,
    );
}

#[test]
fn all_ones_are_unchanged() {
    let ones = table(&[&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]]);
    assert_eq!(patient_normalise(&ones).unwrap(), ones);
}

#[test]
fn zero_row_normalises_to_zeros() {
    let out = patient_normalise(&table(&[&[0.0, 0.0, 0.0], &[0.0, 2.0, 4.0]])).unwrap();
    assert_eq!(out.rows(), &[vec![0.0, 0.0, 0.0], vec![0.0, 0.5, 1.0]]);
}

#[test]
fn single_peak_normalises_to_one() {
    let out = patient_normalise(&table(&[&[0.0, 0.0, 7.0]])).unwrap();
    assert_eq!(out.rows(), &[vec![0.0, 0.0, 1.0]]);
}

#[test]
fn negative_value_rejects_whole_table() {
    let err = patient_normalise(&table(&[
        &[1.0, 2.0, 3.0],
        &[4.0, 5.0, 6.0],
        &[7.0, -8.0, 9.0],
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        StatsError::NegativeValue {
            row: 2,
            column: 1,
            value: -8.0
        }
    );
}

fn non_negative_table() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, days)| {
        prop::collection::vec(prop::collection::vec(0.0f64..1000.0, days), rows)
    })
}

proptest! {
    #[test]
    fn normalised_values_stay_in_unit_interval(rows in non_negative_table()) {
        let input = MeasurementTable::new(rows).unwrap();
        let out = patient_normalise(&input).unwrap();
        prop_assert_eq!(out.n_rows(), input.n_rows());
        prop_assert_eq!(out.n_columns(), input.n_columns());
        for value in out.rows().iter().flatten() {
            prop_assert!((0.0..=1.0).contains(value));
        }
    }

    #[test]
    fn normalised_row_peaks_are_one(rows in non_negative_table()) {
        let input = MeasurementTable::new(rows).unwrap();
        let out = patient_normalise(&input).unwrap();
        for (original, normalised) in input.rows().iter().zip(out.rows()) {
            let peak = original.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let new_peak = normalised.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if peak > 0.0 {
                prop_assert_eq!(new_peak, 1.0);
            } else {
                prop_assert_eq!(new_peak, 0.0);
            }
        }
    }

    #[test]
    fn any_negative_value_fails(
        rows in non_negative_table(),
        pick in any::<prop::sample::Index>(),
        negative in -1000.0f64..-0.001,
    ) {
        let mut rows = rows;
        let row = pick.index(rows.len());
        let column = pick.index(rows[row].len());
        rows[row][column] = negative;
        let input = MeasurementTable::new(rows).unwrap();
        let is_negative_error = matches!(
            patient_normalise(&input),
            Err(StatsError::NegativeValue { .. })
        );
        prop_assert!(is_negative_error);
    }
}
