//! Output writers for startup timings.
//!
//! - `key=value` lines (default, parsed by shell scripts)
//! - JSON report

pub mod json;
pub mod key_value;

// Re-export main functions
pub use json::{report_to_string, write_report_json, StartupReport};
pub use key_value::{format_key_value, format_value, write_key_value};
