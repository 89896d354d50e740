//! Tests for the daily statistics engine.

use inflammation_model::{MeasurementTable, ModelError};
use inflammation_stats::{
    StatsError, daily_max, daily_mean, daily_min, daily_standard_deviation,
};

fn table(rows: &[&[f64]]) -> MeasurementTable {
    MeasurementTable::new(rows.iter().map(|row| row.to_vec()).collect()).expect("valid table")
}

fn zeros() -> MeasurementTable {
    table(&[&[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0]])
}

fn ascending() -> MeasurementTable {
    table(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]])
}

#[test]
fn daily_statistics_of_zeros_are_zero() {
    assert_eq!(daily_mean(&zeros()).unwrap(), vec![0.0, 0.0]);
    assert_eq!(daily_max(&zeros()).unwrap(), vec![0.0, 0.0]);
    assert_eq!(daily_min(&zeros()).unwrap(), vec![0.0, 0.0]);
    assert_eq!(daily_standard_deviation(&zeros()).unwrap(), vec![0.0, 0.0]);
}

#[test]
fn daily_mean_of_integers() {
    assert_eq!(daily_mean(&ascending()).unwrap(), vec![3.0, 4.0]);
}

#[test]
fn daily_max_of_integers() {
    assert_eq!(daily_max(&ascending()).unwrap(), vec![5.0, 6.0]);
    let t = table(&[&[4.0, 2.0, 5.0], &[1.0, 6.0, 2.0], &[4.0, 1.0, 9.0]]);
    assert_eq!(daily_max(&t).unwrap(), vec![4.0, 6.0, 9.0]);
}

#[test]
fn daily_min_of_integers() {
    assert_eq!(daily_min(&ascending()).unwrap(), vec![1.0, 2.0]);
    let t = table(&[&[4.0, 2.0, 5.0], &[1.0, 6.0, 2.0], &[4.0, 1.0, 9.0]]);
    assert_eq!(daily_min(&t).unwrap(), vec![1.0, 1.0, 2.0]);
}

#[test]
fn daily_min_keeps_negatives() {
    let t = table(&[&[4.0, -2.0, 5.0], &[1.0, -6.0, 2.0], &[-4.0, -1.0, 9.0]]);
    assert_eq!(daily_min(&t).unwrap(), vec![-4.0, -6.0, 2.0]);
}

#[test]
fn daily_standard_deviation_is_population() {
    // Column 0: 2, 4, 4, 4, 5, 5, 7, 9 -> mean 5, population sd 2.
    let t = table(&[
        &[2.0],
        &[4.0],
        &[4.0],
        &[4.0],
        &[5.0],
        &[5.0],
        &[7.0],
        &[9.0],
    ]);
    let sd = daily_standard_deviation(&t).unwrap();
    assert!((sd[0] - 2.0).abs() < 1e-12);
}

#[test]
fn near_max_values_do_not_overflow() {
    let same = table(&[&[1.7e308], &[1.7e308]]);
    assert_eq!(daily_mean(&same).unwrap(), vec![1.7e308]);
    assert_eq!(daily_standard_deviation(&same).unwrap(), vec![0.0]);

    let spread = table(&[&[1.7e308], &[-1.7e308]]);
    assert_eq!(daily_mean(&spread).unwrap(), vec![0.0]);
    let sd = daily_standard_deviation(&spread).unwrap();
    assert!(sd[0].is_finite());
    assert!((sd[0] / 1.7e308 - 1.0).abs() < 1e-12);
}

#[test]
fn output_length_matches_column_count() {
    let t = table(&[&[1.0, 2.0, 3.0, 4.0]]);
    assert_eq!(daily_mean(&t).unwrap().len(), 4);
    assert_eq!(daily_standard_deviation(&t).unwrap().len(), 4);
}

#[test]
fn empty_table_fails() {
    let empty = MeasurementTable::empty();
    assert!(matches!(
        daily_mean(&empty),
        Err(StatsError::EmptyTable { .. })
    ));
    assert!(matches!(daily_max(&empty), Err(StatsError::EmptyTable { .. })));
    assert!(matches!(
        daily_standard_deviation(&empty),
        Err(StatsError::EmptyTable { .. })
    ));
}

#[test]
fn textual_rows_fail_before_aggregation() {
    let result = MeasurementTable::parse_rows(&[vec!["abd", "ads"], vec!["afs", "dfs"]]);
    assert!(matches!(result, Err(ModelError::NonNumeric { .. })));
}
