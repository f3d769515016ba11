//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod measure;

// Re-export main command functions
pub use measure::{execute_measure, measure, validate_args, MeasureArgs, Measurement};
