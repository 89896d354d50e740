use std::fmt;

use serde::Serialize;

/// A single measurement taken on a given study day.
///
/// Only [`Patient::add_observation`](crate::Patient::add_observation) creates
/// these; they are never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    day: u32,
    value: f64,
}

impl Observation {
    pub(crate) fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}: {}", self.day, self.value)
    }
}
