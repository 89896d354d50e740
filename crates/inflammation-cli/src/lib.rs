//! CLI library components for the inflammation tool.

pub mod logging;
pub mod summary;
