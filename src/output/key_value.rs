//! `key=value` output for shell scripts.
//!
//! One line per phase, in fixed order:
//!
//! ```text
//! runtime_ms=5
//! vm_init_ms=3
//! managed_ms=N/A
//! ```

use crate::aggregator::phases::{Phase, PhaseDurations};
use crate::utils::config::NOT_AVAILABLE;
use crate::utils::error::OutputError;
use std::io::Write;

/// Render one duration, `N/A` when absent
pub fn format_value(value: Option<i64>) -> String {
    match value {
        Some(ms) => ms.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Render all phases as newline-terminated `key=value` lines
pub fn format_key_value(durations: &PhaseDurations) -> String {
    Phase::ALL
        .iter()
        .map(|phase| format!("{}={}\n", phase.key(), format_value(durations.get(*phase))))
        .collect()
}

/// Write the `key=value` lines to `writer`
///
/// # Errors
/// * `OutputError::WriteFailed` - the writer rejected the output
pub fn write_key_value<W: Write>(durations: &PhaseDurations, mut writer: W) -> Result<(), OutputError> {
    writer.write_all(format_key_value(durations).as_bytes())?;
    writer.flush()?;
    Ok(())
}
