//! Inflammation data ingestion.
//!
//! Loads headerless comma-delimited files (one line per patient, one value
//! per day) into a [`MeasurementTable`](inflammation_model::MeasurementTable).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use inflammation_ingest::load_csv;
//!
//! let table = load_csv(Path::new("data/inflammation-01.csv"))?;
//! println!("{} patients over {} days", table.n_rows(), table.n_columns());
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{MAX_CSV_FILE_SIZE, check_file_size_with_limit, load_csv, read_csv_table};
