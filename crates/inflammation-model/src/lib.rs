//! Data model for inflammation studies.
//!
//! Two independent halves live here:
//!
//! - [`MeasurementTable`]: a rectangular table of finite values, one row per
//!   patient and one column per observation day.
//! - The record-keeping model: [`Patient`] with its ordered [`Observation`]
//!   history, and [`Doctor`] holding handles to the patients they own. Both
//!   implement [`Person`].
//!
//! The table engines in `inflammation-stats` only consume [`MeasurementTable`];
//! nothing here converts between the two halves.

pub mod doctor;
pub mod error;
pub mod observation;
pub mod patient;
pub mod person;
pub mod table;

pub use doctor::{Doctor, SharedPatient};
pub use error::{ModelError, Result};
pub use observation::Observation;
pub use patient::Patient;
pub use person::Person;
pub use table::MeasurementTable;
