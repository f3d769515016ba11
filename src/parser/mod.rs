//! Time Profiler export parsing.
//!
//! This module handles:
//! - Splitting exported XML into sampled rows
//! - Matching rows against startup marker rules
//! - Resolving first/last marker timestamps

pub mod markers;
pub mod rows;
pub mod schema;
pub mod time_profile;

// Re-export main types
pub use markers::{rule_for, MarkerRule, UpdatePolicy, MARKER_RULES};
pub use rows::{parse_rows, sample_time, split_rows};
pub use schema::{MarkerKey, TimestampSet, TraceRow};
pub use time_profile::extract_timestamps;
