use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::patient::Patient;
use crate::person::Person;

/// Handle to a patient that may be referenced from several places.
pub type SharedPatient = Rc<RefCell<Patient>>;

/// A clinician responsible for a set of patients.
///
/// The doctor keeps handles to the caller's patients rather than copies, so
/// observations recorded elsewhere are visible through [`Doctor::patients`].
#[derive(Debug, Clone)]
pub struct Doctor {
    name: String,
    patients: Vec<SharedPatient>,
}

impl Doctor {
    pub fn new(name: impl Into<String>, patients: Vec<SharedPatient>) -> Self {
        Self {
            name: name.into(),
            patients,
        }
    }

    pub fn patients(&self) -> &[SharedPatient] {
        &self.patients
    }
}

impl Person for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
