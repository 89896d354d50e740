//! Patients and their append-only observation history.

use std::fmt;

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::observation::Observation;
use crate::person::Person;

/// A patient with an ordered history of observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    name: String,
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observations: Vec::new(),
        }
    }

    /// Record a measurement and return the stored observation.
    ///
    /// When `day` is `None` the observation is placed on [`Self::next_day`].
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> &Observation {
        let day = day.unwrap_or_else(|| self.next_day());
        self.observations.push(Observation::new(day, value));
        &self.observations[self.observations.len() - 1]
    }

    /// Day assigned to the next observation recorded without an explicit day:
    /// one past the most recent entry, or 0 for an empty history.
    pub fn next_day(&self) -> u32 {
        self.observations
            .last()
            .map_or(0, |last| last.day().saturating_add(1))
    }

    /// The most recently recorded observation.
    pub fn last_observation(&self) -> Result<&Observation> {
        self.observations
            .last()
            .ok_or_else(|| ModelError::EmptyHistory {
                patient: self.name.clone(),
            })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}

impl Person for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_day_follows_explicit_day() {
        let mut patient = Patient::new("alice");
        patient.add_observation(3.0, Some(10));
        let obs = patient.add_observation(4.0, None);
        assert_eq!(obs.day(), 11);
        assert_eq!(patient.next_day(), 12);
    }

    #[test]
    fn test_explicit_day_may_go_backwards() {
        let mut patient = Patient::new("alice");
        patient.add_observation(3.0, Some(5));
        patient.add_observation(1.0, Some(2));
        assert_eq!(patient.next_day(), 3);
        assert_eq!(patient.observations().len(), 2);
    }
}
