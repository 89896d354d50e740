//! Headerless CSV reading into measurement tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use inflammation_model::MeasurementTable;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Load a measurement table from a comma-delimited file.
///
/// Every line is one patient and every field one day. There is no header row.
pub fn load_csv(path: &Path) -> Result<MeasurementTable> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let table = read_csv_table(file, path)?;
    info!(
        path = %path.display(),
        patients = table.n_rows(),
        days = table.n_columns(),
        "loaded measurement table"
    );
    Ok(table)
}

/// Read a measurement table from any CSV source; `path` is used for errors.
pub fn read_csv_table<R: Read>(reader: R, path: &Path) -> Result<MeasurementTable> {
    // Flexible so ragged rows surface as a table shape error with row context.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "read CSV records");

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    MeasurementTable::parse_rows(&rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Whitespace is already trimmed by the reader.
fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}
