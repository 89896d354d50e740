//! Rectangular measurement table: rows are patients, columns are days.

use serde::Serialize;

use crate::error::{ModelError, Result};

/// A rectangular table of finite inflammation measurements.
///
/// Every row has the same length and every value is finite; both are checked
/// once at construction, so the engines never re-validate shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MeasurementTable {
    rows: Vec<Vec<f64>>,
}

impl MeasurementTable {
    /// Build a table from numeric rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        check_shape(rows.iter().map(Vec::len))?;
        for (row_idx, row) in rows.iter().enumerate() {
            if let Some((column, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(ModelError::NonFinite {
                    row: row_idx,
                    column,
                    value,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Build a table from textual cells, parsing each trimmed cell as `f64`.
    ///
    /// Shape is checked before any cell is parsed.
    pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        check_shape(rows.iter().map(Vec::len))?;
        let mut parsed = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let mut values = Vec::with_capacity(row.len());
            for (column, cell) in row.iter().enumerate() {
                let raw = cell.as_ref().trim();
                let value = raw.parse::<f64>().map_err(|_| ModelError::NonNumeric {
                    row: row_idx,
                    column,
                    value: raw.to_string(),
                })?;
                values.push(value);
            }
            parsed.push(values);
        }
        Self::new(parsed)
    }

    /// A table with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Values of one day across all patients, or `None` past the last column.
    pub fn column(&self, index: usize) -> Option<impl Iterator<Item = f64> + '_> {
        (index < self.n_columns()).then(|| self.rows.iter().map(move |row| row[index]))
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

fn check_shape(lengths: impl Iterator<Item = usize>) -> Result<()> {
    let mut expected = None;
    for (row, found) in lengths.enumerate() {
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(ModelError::Shape {
                    row,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
