//! JSON startup report writer.
//!
//! The JSON report carries the same durations as the `key=value` output,
//! plus every resolved marker timestamp (including `ui_app_main`).

use crate::aggregator::phases::PhaseDurations;
use crate::parser::schema::TimestampSet;
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Top-level report structure
#[derive(Debug, Clone, Serialize)]
pub struct StartupReport {
    /// Report schema version
    pub version: String,

    /// Trace bundle that was analyzed
    pub trace: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Resolved marker sample times in nanoseconds
    pub timestamps: TimestampSet,

    /// Phase durations in milliseconds
    pub durations: PhaseDurations,
}

impl StartupReport {
    pub fn new(trace_path: &Path, timestamps: TimestampSet, durations: PhaseDurations) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            trace: trace_path.display().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            timestamps,
            durations,
        }
    }
}

/// Serialize a report to a pretty-printed string
pub fn report_to_string(report: &StartupReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Write a report as pretty JSON followed by a newline
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report_json<W: Write>(report: &StartupReport, mut writer: W) -> Result<(), OutputError> {
    let json = report_to_string(report)?;
    debug!("Writing JSON report ({} bytes)", json.len());

    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_null() {
        let timestamps = TimestampSet {
            ui_app_main: Some(7),
            ..Default::default()
        };
        let report = StartupReport::new(
            Path::new("launch.trace"),
            timestamps,
            PhaseDurations::default(),
        );

        let value: serde_json::Value =
            serde_json::from_str(&report_to_string(&report).unwrap()).unwrap();

        assert_eq!(value["version"], REPORT_VERSION);
        assert_eq!(value["trace"], "launch.trace");
        assert_eq!(value["timestamps"]["ui_app_main"], 7);
        assert!(value["timestamps"]["xamarin_main_start"].is_null());
        assert!(value["durations"]["managed_ms"].is_null());
    }
}
