//! Exporter backed by the `xctrace` command-line tool.

use super::TraceExporter;
use crate::utils::config::{DEFAULT_EXPORT_PROGRAM, XCTRACE_SUBCOMMAND};
use crate::utils::error::ExportError;
use log::{debug, info, warn};
use std::path::Path;
use std::process::Command;

/// Runs `<program> xctrace export --input <trace> --xpath <query>`
#[derive(Debug, Clone)]
pub struct XctraceExporter {
    program: String,
}

impl XctraceExporter {
    /// Create an exporter that launches `program` (usually `xcrun`)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the export command without running it
    ///
    /// **Public** - exposed so callers can inspect the exact invocation
    pub fn command(&self, trace_path: &Path, query: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(XCTRACE_SUBCOMMAND)
            .arg("export")
            .arg("--input")
            .arg(trace_path)
            .arg("--xpath")
            .arg(query);
        cmd
    }
}

impl Default for XctraceExporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_PROGRAM)
    }
}

impl TraceExporter for XctraceExporter {
    /// Run the export synchronously and capture stdout
    ///
    /// # Errors
    /// * `ExportError::SpawnFailed` - the program could not be started
    ///
    /// A non-zero exit status is not an error: it is logged and whatever
    /// the tool printed on stdout is still returned.
    fn export_table(&self, trace_path: &Path, query: &str) -> Result<String, ExportError> {
        let mut cmd = self.command(trace_path, query);
        debug!("Running exporter: {:?}", cmd);

        let output = cmd.output().map_err(|source| ExportError::SpawnFailed {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "Exporter exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            "Exported table from {} ({} bytes)",
            trace_path.display(),
            text.len()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::TIME_PROFILE_XPATH;

    #[test]
    fn test_command_arguments() {
        let exporter = XctraceExporter::default();
        let cmd = exporter.command(Path::new("launch.trace"), TIME_PROFILE_XPATH);

        assert_eq!(cmd.get_program(), "xcrun");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "xctrace",
                "export",
                "--input",
                "launch.trace",
                "--xpath",
                "/trace-toc/run/data/table[@schema=\"time-profile\"]",
            ]
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let exporter = XctraceExporter::new("definitely-not-a-real-exporter-binary");
        let result = exporter.export_table(Path::new("launch.trace"), TIME_PROFILE_XPATH);

        assert!(matches!(result, Err(ExportError::SpawnFailed { .. })));
    }
}
