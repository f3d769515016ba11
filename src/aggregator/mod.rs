//! Aggregation of resolved markers into startup phase durations.

pub mod phases;

// Re-export main types and functions
pub use phases::{compute_durations, elapsed_ms, phase_duration, Phase, PhaseDurations};
